//! Shared fixtures for the dtix integration tests, benches and the golden
//! generator.
//!
//! Every fixture is deterministic: the golden files under `tests/golden/`
//! are exactly what [`sample_encoder`] produces, and the tests rely on that.

use std::path::{Path, PathBuf};

use dtix_encoder::{AccountTrailer, EncodedEvent, EventEncoder, EventTimings};
use dtix_types::{EventRecord, EventStatus, PricingStrategyType, Pubkey, TicketAreaMapping};

pub const ORGANIZER_BYTES: [u8; 32] = [0x4A; 32];
pub const VENUE_BYTES: [u8; 32] = [0x7C; 32];

/// Base58 forms of the two fixture keys.
pub const ORGANIZER_B58: &str = "5zzsbHTkm4ymKhWZH78zXn7T4kZtqhogMCKZK8KLHesK";
pub const VENUE_B58: &str = "9NwekLkGKyq6JE1w63Sw5YhbGh5xWt8gHbeNE8ZHeJzf";

pub const SAMPLE_TIMINGS: EventTimings = EventTimings {
    event_start_time: 1_767_225_600,
    event_end_time: 1_767_240_000,
    ticket_sale_start_time: 1_764_547_200,
    ticket_sale_end_time: 1_767_222_000,
};

pub const SAMPLE_TRAILER: AccountTrailer = AccountTrailer {
    bump: 254,
    created_at: 1_764_000_000,
    updated_at: 1_764_100_000,
};

/// Width of the trailer the sample account carries after its mappings.
pub const TRAILER_LEN: usize = 1 + 8 + 8;

/// A fully populated event with four mappings over three ticket types.
#[must_use]
pub fn sample_record() -> EventRecord {
    EventRecord {
        organizer: Pubkey::new(ORGANIZER_BYTES),
        event_name: "Summer Fest 2025".into(),
        event_description_hash: "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG".into(),
        event_poster_image_hash: "QmT78zSuBmuS4z925WZfrqQ1qHaJ56DQaTfyMUF7F8ff5o".into(),
        venue_account: Pubkey::new(VENUE_BYTES),
        seat_map_hash: Some("QmSeatMapA1B2".into()),
        event_category: "music".into(),
        performer_details_hash: "QmPerformerDetails".into(),
        contact_info_hash: "QmContactInfo".into(),
        refund_policy_hash: "QmRefundPolicy".into(),
        total_tickets_minted: 1000,
        total_tickets_sold: 250,
        total_revenue: 25_000_000_000,
        ticket_types_count: 3,
        ticket_area_mappings: ["VIP-A1", "VIP-A2", "GA-B1", "STUDENT-C1-east"]
            .into_iter()
            .map(TicketAreaMapping::parse)
            .collect(),
    }
}

/// Encoder configured the way the golden account was written.
#[must_use]
pub fn sample_encoder(record: &EventRecord) -> EventEncoder<'_> {
    let mut encoder = EventEncoder::new(record);
    encoder
        .timings(SAMPLE_TIMINGS)
        .status(EventStatus::OnSale)
        .pricing(PricingStrategyType::FixedPrice)
        .refunded(4)
        .resale_available(12)
        .trailer(SAMPLE_TRAILER);
    encoder
}

/// Encode `record` with the sample skipped-field values, no limit checks.
///
/// # Panics
///
/// Never in practice: unchecked encoding has no failure path.
#[must_use]
pub fn encode_unchecked(record: &EventRecord) -> EncodedEvent {
    sample_encoder(record)
        .unchecked()
        .encode()
        .unwrap_or_else(|e| panic!("unchecked encode failed: {e}"))
}

/// The golden account a program with one extra `u64` before the schedule
/// timestamps would write: the layout the decoder does not know about.
#[must_use]
pub fn drifted_bytes(record: &EventRecord) -> Vec<u8> {
    let encoded = encode_unchecked(record);
    let at = encoded
        .offset_of(dtix_types::layout::EVENT_START_TIME)
        .unwrap_or(encoded.bytes.len());
    let mut bytes = encoded.bytes;
    let tail = bytes.split_off(at);
    bytes.extend_from_slice(&500_000_000u64.to_le_bytes());
    bytes.extend_from_slice(&tail);
    bytes
}

#[must_use]
pub fn golden_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/golden")
}

/// Read `tests/golden/<name>.hex`.
///
/// # Panics
///
/// If the fixture is missing or not valid hex.
#[must_use]
pub fn golden(name: &str) -> Vec<u8> {
    let path = golden_dir().join(format!("{name}.hex"));
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden fixture {}: {e}", path.display()));
    let digits: String = text.split_whitespace().collect();
    hex::decode(&digits)
        .unwrap_or_else(|e| panic!("golden fixture {} is not hex: {e}", path.display()))
}

/// Hex text as the generator writes it: 64 digits per line.
#[must_use]
pub fn to_golden_hex(bytes: &[u8]) -> String {
    let digits = hex::encode(bytes);
    let mut out = String::with_capacity(digits.len() + digits.len() / 64 + 1);
    for line in digits.as_bytes().chunks(64) {
        out.push_str(&String::from_utf8_lossy(line));
        out.push('\n');
    }
    out
}
