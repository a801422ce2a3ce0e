use dtix_types::layout;
use dtix_types::{EventRecord, Pubkey};
use dtix_wire::Diagnostic;

/// A successful decode run.
///
/// ```text
/// ┌────────────────────────────────────────────────────────────────┐
/// │ DecodedEvent                                                   │
/// │   record:        EventRecord           ← captured fields       │
/// │   diagnostics:   Vec<Diagnostic>       ← non-fatal warnings    │
/// │   consumed:      usize                 ← final cursor          │
/// │   field_offsets: Vec<(&str, usize)>    ← start of every field  │
/// └────────────────────────────────────────────────────────────────┘
/// ```
///
/// The record reflects exactly `bytes[..consumed]`; anything after that
/// (bump seed, timestamps, allocation padding) was never looked at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedEvent {
    pub record: EventRecord,
    pub diagnostics: Vec<Diagnostic>,
    pub consumed: usize,
    pub field_offsets: Vec<(&'static str, usize)>,
}

impl DecodedEvent {
    #[must_use]
    pub fn offset_of(&self, field: &str) -> Option<usize> {
        self.field_offsets
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, offset)| *offset)
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Fields captured before a run failed.
///
/// Each slot is `Some` only if its field was read in full. `seat_map_hash`
/// nests: the outer `Option` says whether the field was reached, the inner
/// one is the decoded value. The mapping vector is the last field, so it
/// never appears here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartialEvent {
    pub organizer: Option<Pubkey>,
    pub event_name: Option<String>,
    pub event_description_hash: Option<String>,
    pub event_poster_image_hash: Option<String>,
    pub venue_account: Option<Pubkey>,
    pub seat_map_hash: Option<Option<String>>,
    pub event_category: Option<String>,
    pub performer_details_hash: Option<String>,
    pub contact_info_hash: Option<String>,
    pub refund_policy_hash: Option<String>,
    pub total_tickets_minted: Option<u32>,
    pub total_tickets_sold: Option<u32>,
    pub total_revenue: Option<i64>,
    pub ticket_types_count: Option<u8>,
    /// Start offsets of the fields the run reached, failing one included.
    pub field_offsets: Vec<(&'static str, usize)>,
}

impl PartialEvent {
    /// Names of the captured fields, in wire order.
    #[must_use]
    pub fn captured(&self) -> Vec<&'static str> {
        let slots = [
            (layout::ORGANIZER, self.organizer.is_some()),
            (layout::EVENT_NAME, self.event_name.is_some()),
            (layout::EVENT_DESCRIPTION_HASH, self.event_description_hash.is_some()),
            (layout::EVENT_POSTER_IMAGE_HASH, self.event_poster_image_hash.is_some()),
            (layout::VENUE_ACCOUNT, self.venue_account.is_some()),
            (layout::SEAT_MAP_HASH, self.seat_map_hash.is_some()),
            (layout::EVENT_CATEGORY, self.event_category.is_some()),
            (layout::PERFORMER_DETAILS_HASH, self.performer_details_hash.is_some()),
            (layout::CONTACT_INFO_HASH, self.contact_info_hash.is_some()),
            (layout::REFUND_POLICY_HASH, self.refund_policy_hash.is_some()),
            (layout::TOTAL_TICKETS_MINTED, self.total_tickets_minted.is_some()),
            (layout::TOTAL_TICKETS_SOLD, self.total_tickets_sold.is_some()),
            (layout::TOTAL_REVENUE, self.total_revenue.is_some()),
            (layout::TICKET_TYPES_COUNT, self.ticket_types_count.is_some()),
        ];
        slots
            .into_iter()
            .filter_map(|(name, present)| present.then_some(name))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.captured().is_empty()
    }
}
