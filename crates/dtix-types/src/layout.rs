//! Byte layout of an event account, as written by the ticketing program.
//!
//! The account is Borsh-serialized behind an 8-byte Anchor discriminator.
//! Field widths and names live here so the decoder, the synthetic encoder
//! and the tests agree on one table.
//!
//! ```text
//! ┌────┬────────────────────────────────┬─────────────────────────────┐
//! │ #  │ Field                          │ Wire form                   │
//! ├────┼────────────────────────────────┼─────────────────────────────┤
//! │  1 │ discriminator                  │ [u8; 8]        (skipped)    │
//! │  2 │ organizer                      │ [u8; 32]                    │
//! │  3 │ event_name                     │ string                      │
//! │  4 │ event_description_hash         │ string                      │
//! │  5 │ event_poster_image_hash        │ string                      │
//! │  6 │ event_start_time               │ i64            (skipped)    │
//! │  7 │ event_end_time                 │ i64            (skipped)    │
//! │  8 │ ticket_sale_start_time         │ i64            (skipped)    │
//! │  9 │ ticket_sale_end_time           │ i64            (skipped)    │
//! │ 10 │ venue_account                  │ [u8; 32]                    │
//! │ 11 │ seat_map_hash                  │ Option<string>              │
//! │ 12 │ event_category                 │ string                      │
//! │ 13 │ performer_details_hash         │ string                      │
//! │ 14 │ contact_info_hash              │ string                      │
//! │ 15 │ event_status                   │ u8 enum tag    (skipped)    │
//! │ 16 │ refund_policy_hash             │ string                      │
//! │ 17 │ pricing_strategy_type          │ u8 enum tag    (skipped)    │
//! │ 18 │ total_tickets_minted           │ u32                         │
//! │ 19 │ total_tickets_sold             │ u32                         │
//! │ 20 │ total_tickets_refunded         │ u32            (skipped)    │
//! │ 21 │ total_tickets_resale_available │ u32            (skipped)    │
//! │ 22 │ total_revenue                  │ i64                         │
//! │ 23 │ ticket_types_count             │ u8                          │
//! │ 24 │ ticket_area_mappings           │ Vec<string>                 │
//! └────┴────────────────────────────────┴─────────────────────────────┘
//! ```
//!
//! `string` is a u32 little-endian byte length followed by UTF-8 bytes,
//! `Option<T>` is a `0x00`/`0x01` tag followed by `T` when present, and
//! `Vec<T>` is a u32 little-endian count followed by the elements.
//!
//! The on-chain struct continues past the mapping vector (bump seed and
//! creation/update timestamps). The decoder stops after field 24.

pub const DISCRIMINATOR_LEN: usize = 8;

/// Anchor discriminator of `EventAccount`: the first 8 bytes of
/// `sha256("account:EventAccount")`.
pub const EVENT_ACCOUNT_DISCRIMINATOR: [u8; DISCRIMINATOR_LEN] =
    [0x62, 0x88, 0x20, 0xA5, 0x85, 0xE7, 0xF3, 0x9A];
pub const TIMESTAMP_LEN: usize = 8;
pub const COUNTER_LEN: usize = 4;

pub const DISCRIMINATOR: &str = "discriminator";
pub const ORGANIZER: &str = "organizer";
pub const EVENT_NAME: &str = "event_name";
pub const EVENT_DESCRIPTION_HASH: &str = "event_description_hash";
pub const EVENT_POSTER_IMAGE_HASH: &str = "event_poster_image_hash";
pub const EVENT_START_TIME: &str = "event_start_time";
pub const EVENT_END_TIME: &str = "event_end_time";
pub const TICKET_SALE_START_TIME: &str = "ticket_sale_start_time";
pub const TICKET_SALE_END_TIME: &str = "ticket_sale_end_time";
pub const VENUE_ACCOUNT: &str = "venue_account";
pub const SEAT_MAP_HASH: &str = "seat_map_hash";
pub const EVENT_CATEGORY: &str = "event_category";
pub const PERFORMER_DETAILS_HASH: &str = "performer_details_hash";
pub const CONTACT_INFO_HASH: &str = "contact_info_hash";
pub const EVENT_STATUS: &str = "event_status";
pub const REFUND_POLICY_HASH: &str = "refund_policy_hash";
pub const PRICING_STRATEGY_TYPE: &str = "pricing_strategy_type";
pub const TOTAL_TICKETS_MINTED: &str = "total_tickets_minted";
pub const TOTAL_TICKETS_SOLD: &str = "total_tickets_sold";
pub const TOTAL_TICKETS_REFUNDED: &str = "total_tickets_refunded";
pub const TOTAL_TICKETS_RESALE_AVAILABLE: &str = "total_tickets_resale_available";
pub const TOTAL_REVENUE: &str = "total_revenue";
pub const TICKET_TYPES_COUNT: &str = "ticket_types_count";
pub const TICKET_AREA_MAPPINGS: &str = "ticket_area_mappings";

/// Every field in wire order, skipped ones included.
pub const FIELD_ORDER: [&str; 24] = [
    DISCRIMINATOR,
    ORGANIZER,
    EVENT_NAME,
    EVENT_DESCRIPTION_HASH,
    EVENT_POSTER_IMAGE_HASH,
    EVENT_START_TIME,
    EVENT_END_TIME,
    TICKET_SALE_START_TIME,
    TICKET_SALE_END_TIME,
    VENUE_ACCOUNT,
    SEAT_MAP_HASH,
    EVENT_CATEGORY,
    PERFORMER_DETAILS_HASH,
    CONTACT_INFO_HASH,
    EVENT_STATUS,
    REFUND_POLICY_HASH,
    PRICING_STRATEGY_TYPE,
    TOTAL_TICKETS_MINTED,
    TOTAL_TICKETS_SOLD,
    TOTAL_TICKETS_REFUNDED,
    TOTAL_TICKETS_RESALE_AVAILABLE,
    TOTAL_REVENUE,
    TICKET_TYPES_COUNT,
    TICKET_AREA_MAPPINGS,
];

/// Fields the decoder steps over without surfacing a value.
pub const SKIPPED_FIELDS: [&str; 9] = [
    DISCRIMINATOR,
    EVENT_START_TIME,
    EVENT_END_TIME,
    TICKET_SALE_START_TIME,
    TICKET_SALE_END_TIME,
    EVENT_STATUS,
    PRICING_STRATEGY_TYPE,
    TOTAL_TICKETS_REFUNDED,
    TOTAL_TICKETS_RESALE_AVAILABLE,
];

#[must_use]
pub fn is_skipped(field: &str) -> bool {
    SKIPPED_FIELDS.iter().any(|f| *f == field)
}

/// Position of `field` in [`FIELD_ORDER`].
#[must_use]
pub fn field_index(field: &str) -> Option<usize> {
    FIELD_ORDER.iter().position(|f| *f == field)
}
