//! Non-fatal diagnostics.
//!
//! A diagnostic never stops a run. These tests damage single bytes whose
//! width is fixed (enum tags, boolean flags) and check that the record
//! still decodes in full, with the observation reported next to it.

use dtix_decoder::decode_event;
use dtix_tests::{encode_unchecked, golden, sample_encoder, sample_record};
use dtix_types::layout;
use dtix_wire::{Cursor, Diagnostic, WireError};

#[test]
fn unknown_event_status_is_reported_not_fatal() {
    let mut bytes = golden("summer_fest");
    bytes[290] = 0x09;

    let decoded = decode_event(&bytes).unwrap();
    assert_eq!(decoded.record, sample_record());
    assert_eq!(
        decoded.diagnostics,
        vec![Diagnostic::UnknownEnumTag {
            field: layout::EVENT_STATUS,
            enum_name: "EventStatus",
            offset: 290,
            value: 0x09,
        }]
    );
    assert!(!decoded.is_clean());
}

#[test]
fn unknown_pricing_strategy_is_reported_not_fatal() {
    let record = sample_record();
    let bytes = sample_encoder(&record)
        .raw_pricing(0x07)
        .unchecked()
        .encode()
        .unwrap()
        .bytes;

    let decoded = decode_event(&bytes).unwrap();
    assert_eq!(decoded.record, record);
    assert_eq!(
        decoded.diagnostics,
        vec![Diagnostic::UnknownEnumTag {
            field: layout::PRICING_STRATEGY_TYPE,
            enum_name: "PricingStrategyType",
            offset: 309,
            value: 0x07,
        }]
    );
}

#[test]
fn every_known_status_decodes_clean() {
    let record = sample_record();
    for byte in 0x00..=0x05 {
        let bytes = sample_encoder(&record).raw_status(byte).encode().unwrap().bytes;
        let decoded = decode_event(&bytes).unwrap();
        assert!(decoded.is_clean(), "status {byte:#04x}: {:?}", decoded.diagnostics);
    }
}

#[test]
fn empty_mapping_vector_is_flagged() {
    let mut record = sample_record();
    record.ticket_area_mappings.clear();
    let encoded = encode_unchecked(&record);
    let mappings = encoded.offset_of(layout::TICKET_AREA_MAPPINGS).unwrap();

    let decoded = decode_event(&encoded.bytes).unwrap();
    assert!(decoded.record.ticket_area_mappings.is_empty());
    assert!(decoded.record.ticket_types().is_empty());
    assert_eq!(
        decoded.diagnostics,
        vec![Diagnostic::NoTicketAreaMappings { offset: mappings }]
    );
    assert_eq!(decoded.consumed, mappings + 4);
}

#[test]
fn diagnostics_arrive_in_wire_order() {
    let mut record = sample_record();
    record.ticket_area_mappings.clear();
    let bytes = sample_encoder(&record)
        .raw_status(0x0A)
        .raw_pricing(0x0B)
        .unchecked()
        .encode()
        .unwrap()
        .bytes;

    let decoded = decode_event(&bytes).unwrap();
    let offsets: Vec<usize> = decoded.diagnostics.iter().map(Diagnostic::offset).collect();
    assert_eq!(offsets.len(), 3);
    assert!(offsets.is_sorted(), "{offsets:?}");
    assert!(matches!(
        decoded.diagnostics[0],
        Diagnostic::UnknownEnumTag { value: 0x0A, .. }
    ));
    assert!(matches!(
        decoded.diagnostics[2],
        Diagnostic::NoTicketAreaMappings { .. }
    ));
}

// ── Boolean flags ─────────────────────────────────────────────────────────────

#[test]
fn read_bool_accepts_zero_and_one() {
    let buf = [0x00, 0x01];
    let mut cursor = Cursor::new(&buf);
    let mut diagnostics = Vec::new();

    assert!(!cursor.read_bool("is_active", &mut diagnostics).unwrap());
    assert!(cursor.read_bool("is_active", &mut diagnostics).unwrap());
    assert!(diagnostics.is_empty());
}

#[test]
fn read_bool_flags_stray_byte_and_reads_true() {
    let buf = [0x00, 0x02, 0x01];
    let mut cursor = Cursor::new(&buf);
    cursor.skip(1).unwrap();
    let mut diagnostics = Vec::new();

    assert!(cursor.read_bool("is_active", &mut diagnostics).unwrap());
    assert_eq!(cursor.position(), 2);
    assert_eq!(
        diagnostics,
        vec![Diagnostic::SuspiciousTag {
            field: "is_active",
            offset: 1,
            value: 0x02,
        }]
    );
}

#[test]
fn read_bool_at_end_underruns() {
    let mut cursor = Cursor::new(&[]);
    let mut diagnostics = Vec::new();
    assert_eq!(
        cursor.read_bool("is_active", &mut diagnostics),
        Err(WireError::BufferUnderrun {
            offset: 0,
            needed: 1,
            available: 0,
        })
    );
    assert!(diagnostics.is_empty());
}
