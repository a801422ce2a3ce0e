use crate::mapping::{MAPPING_SEPARATOR, TicketAreaMapping};
use crate::pubkey::Pubkey;

/// The fields of an event account that the decoder surfaces.
///
/// Timestamps, the status and pricing enums, and the refund/resale
/// counters sit between these fields on the wire but are stepped over;
/// see [`layout`](crate::layout) for the full byte order. The `*_hash`
/// strings are off-chain content references (IPFS CIDs in practice) and
/// are carried as plain text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventRecord {
    pub organizer: Pubkey,
    pub event_name: String,
    pub event_description_hash: String,
    pub event_poster_image_hash: String,
    pub venue_account: Pubkey,
    pub seat_map_hash: Option<String>,
    pub event_category: String,
    pub performer_details_hash: String,
    pub contact_info_hash: String,
    pub refund_policy_hash: String,
    pub total_tickets_minted: u32,
    pub total_tickets_sold: u32,
    pub total_revenue: i64,
    pub ticket_types_count: u8,
    pub ticket_area_mappings: Vec<TicketAreaMapping>,
}

impl EventRecord {
    /// Distinct ticket types named by split mappings, sorted.
    ///
    /// Opaque mappings contribute nothing.
    #[must_use]
    pub fn ticket_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self
            .ticket_area_mappings
            .iter()
            .filter_map(TicketAreaMapping::ticket_type)
            .collect();
        types.sort_unstable();
        types.dedup();
        types
    }

    /// Areas mapped to `ticket_type`, in wire order.
    ///
    /// Matches on the stored string: every mapping that begins with
    /// `"<ticket_type>-"` contributes the rest of the string. A type name
    /// that itself contains `-` therefore still finds its areas, even though
    /// [`ticket_types`](Self::ticket_types) lists only its first segment.
    ///
    /// ```text
    ///   "EARLY-BIRD-A1"   areas_for("EARLY-BIRD") → ["A1"]
    ///                     areas_for("EARLY")      → ["BIRD-A1"]
    /// ```
    #[must_use]
    pub fn areas_for(&self, ticket_type: &str) -> Vec<String> {
        let prefix = format!("{ticket_type}{MAPPING_SEPARATOR}");
        self.ticket_area_mappings
            .iter()
            .filter_map(|m| m.to_wire_string().strip_prefix(&prefix).map(str::to_owned))
            .collect()
    }
}
