//! Rendered error and diagnostic messages.
//!
//! The CLI prints these strings verbatim, so a wording change shows up
//! here as a snapshot diff first. Accept intended changes with
//! `cargo insta review`.

use dtix_decoder::decode_event;
use dtix_encoder::EventEncoder;
use dtix_tests::{golden, sample_record};
use dtix_types::{DecodeLimits, TicketAreaMapping, TypeError};
use dtix_wire::{Diagnostic, WireError};
use insta::assert_snapshot;

#[test]
fn wire_error_messages() {
    let err = WireError::BufferUnderrun {
        offset: 380,
        needed: 15,
        available: 7,
    };
    assert_snapshot!(err, @"buffer underrun at offset 380: needed 15 bytes, 7 available");
}

#[test]
fn type_error_messages() {
    assert_snapshot!(
        TypeError::InvalidLength { offset: 40, declared: 5000, bound: 1024 },
        @"declared string length 5000 at offset 40 exceeds bound 1024"
    );
    assert_snapshot!(
        TypeError::TextDecode { offset: 242, length: 5 },
        @"invalid UTF-8 in 5-byte string at offset 242"
    );
    assert_snapshot!(
        TypeError::InvalidOptionTag { offset: 224, tag: 0x7C },
        @"invalid option tag 0x7C at offset 224, expected 0x00 or 0x01"
    );
    assert_snapshot!(
        TypeError::ImplausibleCount { offset: 335, declared: 1_000_000, bound: 100 },
        @"implausible vector count 1000000 at offset 335, bound is 100"
    );
}

#[test]
fn decode_error_message_nests_causes() {
    let mut bytes = golden("summer_fest");
    bytes[359..363].copy_from_slice(&5000u32.to_le_bytes());
    let err = decode_event(&bytes).unwrap_err();

    assert_snapshot!(
        err,
        @"failed to decode `ticket_area_mappings` (cursor at 363): element 2 of vector at offset 335: declared string length 5000 at offset 359 exceeds bound 1024"
    );
}

#[test]
fn drifted_layout_message() {
    let err = decode_event(&golden("drifted_layout")).unwrap_err();
    assert_snapshot!(
        err,
        @"failed to decode `seat_map_hash` (cursor at 225): invalid option tag 0x7C at offset 224, expected 0x00 or 0x01"
    );
}

#[test]
fn diagnostic_messages() {
    assert_snapshot!(
        Diagnostic::SuspiciousTag { field: "is_active", offset: 12, value: 0x02 },
        @"suspicious tag 0x02 for `is_active` at offset 12, read as true"
    );
    assert_snapshot!(
        Diagnostic::UnknownEnumTag {
            field: "event_status",
            enum_name: "EventStatus",
            offset: 290,
            value: 0x09,
        },
        @"unknown EventStatus tag 0x09 for `event_status` at offset 290"
    );
    assert_snapshot!(
        Diagnostic::NoTicketAreaMappings { offset: 335 },
        @"no ticket-area mappings (empty vector at offset 335)"
    );
}

#[test]
fn encode_error_messages() {
    let mut record = sample_record();
    record.refund_policy_hash = "r".repeat(65);
    let err = EventEncoder::new(&record)
        .limits(DecodeLimits::new(64, 100))
        .encode()
        .unwrap_err();
    assert_snapshot!(err, @"`refund_policy_hash` is 65 bytes, limit 64");

    let record = sample_record();
    let err = EventEncoder::new(&record)
        .limits(DecodeLimits::new(1024, 3))
        .encode()
        .unwrap_err();
    assert_snapshot!(err, @"4 ticket-area mappings, limit 3");

    let mut record = sample_record();
    record.ticket_area_mappings[1] = TicketAreaMapping::new("EARLY-BIRD", "A1");
    let err = EventEncoder::new(&record).encode().unwrap_err();
    assert_snapshot!(err, @r#"ticket-area mapping 1 ("EARLY-BIRD-A1") does not decode to itself"#);
}
