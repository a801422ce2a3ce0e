use dtix_types::enums::read_enum_tag;
use dtix_types::fields::{read_option, read_string};
use dtix_types::layout::{self, COUNTER_LEN, DISCRIMINATOR_LEN, TIMESTAMP_LEN};
use dtix_types::vector::read_ticket_area_mappings;
use dtix_types::{
    DecodeLimits, EventRecord, EventStatus, PricingStrategyType, Pubkey, TypeError,
};
use dtix_wire::{Cursor, Diagnostic};

use crate::error::DecodeError;
use crate::record::{DecodedEvent, PartialEvent};

/// Event-account decoder.
///
/// Walks the fixed field sequence from offset 0 with a single cursor,
/// capturing the fields an [`EventRecord`] carries and stepping over the
/// rest. There is no schema and no backtracking: each field is read
/// where the previous one ended.
///
/// ```text
///   Start ─► discriminator ─► organizer ─► ... ─► ticket_area_mappings ─► Done
///                 │               │                        │
///                 └───────────────┴──── any reader error ──┴──► Failed
/// ```
///
/// Gating fields (string lengths, the option tag, the vector count) are
/// strict because a wrong value would shift every later field. Single
/// byte fields that gate nothing (enum tags) only raise diagnostics.
///
/// # Example
///
/// ```rust
/// use dtix_decoder::EventDecoder;
/// use dtix_encoder::EventEncoder;
/// use dtix_types::{DecodeLimits, EventRecord};
///
/// let record = EventRecord {
///     event_name: "Summer Fest".into(),
///     ..EventRecord::default()
/// };
/// let encoded = EventEncoder::new(&record).encode().unwrap();
///
/// let decoded = EventDecoder::with_limits(DecodeLimits::new(256, 20))
///     .decode(&encoded.bytes)
///     .unwrap();
/// assert_eq!(decoded.record.event_name, "Summer Fest");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct EventDecoder {
    limits: DecodeLimits,
}

impl EventDecoder {
    /// Decoder with the default bounds (1024-byte strings, 100 mappings).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_limits(limits: DecodeLimits) -> Self {
        Self { limits }
    }

    #[must_use]
    pub fn limits(&self) -> DecodeLimits {
        self.limits
    }

    /// Decode one event account.
    ///
    /// # Errors
    ///
    /// A [`DecodeError`] naming the field that failed, the cursor position
    /// and the fields captured before it.
    #[tracing::instrument(level = "debug", skip_all, fields(len = bytes.len()))]
    pub fn decode(&self, bytes: &[u8]) -> Result<DecodedEvent, DecodeError> {
        let limits = &self.limits;
        let mut run = Run::new(bytes);

        run.skip(layout::DISCRIMINATOR, DISCRIMINATOR_LEN)?;
        let organizer = run.capture(layout::ORGANIZER, |p| &mut p.organizer, |c, _| {
            Pubkey::read_from(c).map_err(TypeError::from)
        })?;
        let event_name = run.capture(layout::EVENT_NAME, |p| &mut p.event_name, |c, _| {
            read_string(c, limits)
        })?;
        let event_description_hash = run.capture(
            layout::EVENT_DESCRIPTION_HASH,
            |p| &mut p.event_description_hash,
            |c, _| read_string(c, limits),
        )?;
        let event_poster_image_hash = run.capture(
            layout::EVENT_POSTER_IMAGE_HASH,
            |p| &mut p.event_poster_image_hash,
            |c, _| read_string(c, limits),
        )?;

        for field in [
            layout::EVENT_START_TIME,
            layout::EVENT_END_TIME,
            layout::TICKET_SALE_START_TIME,
            layout::TICKET_SALE_END_TIME,
        ] {
            run.skip(field, TIMESTAMP_LEN)?;
        }

        let venue_account = run.capture(layout::VENUE_ACCOUNT, |p| &mut p.venue_account, |c, _| {
            Pubkey::read_from(c).map_err(TypeError::from)
        })?;
        let seat_map_hash = run.capture(layout::SEAT_MAP_HASH, |p| &mut p.seat_map_hash, |c, _| {
            read_option(c, |c| read_string(c, limits))
        })?;
        let event_category = run.capture(
            layout::EVENT_CATEGORY,
            |p| &mut p.event_category,
            |c, _| read_string(c, limits),
        )?;
        let performer_details_hash = run.capture(
            layout::PERFORMER_DETAILS_HASH,
            |p| &mut p.performer_details_hash,
            |c, _| read_string(c, limits),
        )?;
        let contact_info_hash = run.capture(
            layout::CONTACT_INFO_HASH,
            |p| &mut p.contact_info_hash,
            |c, _| read_string(c, limits),
        )?;

        run.step(layout::EVENT_STATUS, |c, d| {
            read_enum_tag::<EventStatus>(c, layout::EVENT_STATUS, d)?;
            Ok(())
        })?;

        let refund_policy_hash = run.capture(
            layout::REFUND_POLICY_HASH,
            |p| &mut p.refund_policy_hash,
            |c, _| read_string(c, limits),
        )?;

        run.step(layout::PRICING_STRATEGY_TYPE, |c, d| {
            read_enum_tag::<PricingStrategyType>(c, layout::PRICING_STRATEGY_TYPE, d)?;
            Ok(())
        })?;

        let total_tickets_minted = run.capture(
            layout::TOTAL_TICKETS_MINTED,
            |p| &mut p.total_tickets_minted,
            |c, _| c.read_u32_le().map_err(TypeError::from),
        )?;
        let total_tickets_sold = run.capture(
            layout::TOTAL_TICKETS_SOLD,
            |p| &mut p.total_tickets_sold,
            |c, _| c.read_u32_le().map_err(TypeError::from),
        )?;
        run.skip(layout::TOTAL_TICKETS_REFUNDED, COUNTER_LEN)?;
        run.skip(layout::TOTAL_TICKETS_RESALE_AVAILABLE, COUNTER_LEN)?;
        let total_revenue = run.capture(layout::TOTAL_REVENUE, |p| &mut p.total_revenue, |c, _| {
            c.read_i64_le().map_err(TypeError::from)
        })?;
        let ticket_types_count = run.capture(
            layout::TICKET_TYPES_COUNT,
            |p| &mut p.ticket_types_count,
            |c, _| c.read_u8().map_err(TypeError::from),
        )?;

        let mappings_offset = run.position();
        let ticket_area_mappings = run.step(layout::TICKET_AREA_MAPPINGS, |c, _| {
            read_ticket_area_mappings(c, limits)
        })?;
        if ticket_area_mappings.is_empty() {
            run.diagnose(Diagnostic::NoTicketAreaMappings {
                offset: mappings_offset,
            });
        }

        Ok(run.finish(EventRecord {
            organizer,
            event_name,
            event_description_hash,
            event_poster_image_hash,
            venue_account,
            seat_map_hash,
            event_category,
            performer_details_hash,
            contact_info_hash,
            refund_policy_hash,
            total_tickets_minted,
            total_tickets_sold,
            total_revenue,
            ticket_types_count,
            ticket_area_mappings,
        }))
    }
}

/// Decode with the default limits.
///
/// # Errors
///
/// See [`EventDecoder::decode`].
pub fn decode_event(bytes: &[u8]) -> Result<DecodedEvent, DecodeError> {
    EventDecoder::new().decode(bytes)
}

// ── Per-call run state ────────────────────────────────────────────────
//
// One `Run` per decode call. It owns the cursor, the diagnostics and the
// partial record, and turns a reader error into a `DecodeError` tagged
// with the field that was being read.

struct Run<'a> {
    cursor: Cursor<'a>,
    diagnostics: Vec<Diagnostic>,
    partial: PartialEvent,
}

impl<'a> Run<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(bytes),
            diagnostics: Vec::new(),
            partial: PartialEvent::default(),
        }
    }

    fn position(&self) -> usize {
        self.cursor.position()
    }

    fn step<T>(
        &mut self,
        field: &'static str,
        read: impl FnOnce(&mut Cursor<'a>, &mut Vec<Diagnostic>) -> Result<T, TypeError>,
    ) -> Result<T, DecodeError> {
        let offset = self.cursor.position();
        self.partial.field_offsets.push((field, offset));
        let raised = self.diagnostics.len();

        match read(&mut self.cursor, &mut self.diagnostics) {
            Ok(value) => {
                tracing::trace!("{field} at offset {offset}, {} bytes", self.cursor.position() - offset);
                for diagnostic in &self.diagnostics[raised..] {
                    tracing::debug!("{diagnostic}");
                }
                Ok(value)
            }
            Err(source) => {
                let position = self.cursor.position();
                tracing::debug!("aborted at `{field}` (cursor {position}): {source}");
                Err(DecodeError {
                    field,
                    position,
                    partial: Box::new(std::mem::take(&mut self.partial)),
                    source,
                })
            }
        }
    }

    /// Read a field and keep a copy in the partial record.
    fn capture<T: Clone>(
        &mut self,
        field: &'static str,
        slot: impl FnOnce(&mut PartialEvent) -> &mut Option<T>,
        read: impl FnOnce(&mut Cursor<'a>, &mut Vec<Diagnostic>) -> Result<T, TypeError>,
    ) -> Result<T, DecodeError> {
        let value = self.step(field, read)?;
        *slot(&mut self.partial) = Some(value.clone());
        Ok(value)
    }

    fn skip(&mut self, field: &'static str, n: usize) -> Result<(), DecodeError> {
        self.step(field, |c, _| c.skip(n).map_err(TypeError::from))
    }

    fn diagnose(&mut self, diagnostic: Diagnostic) {
        tracing::debug!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    fn finish(self, record: EventRecord) -> DecodedEvent {
        let consumed = self.cursor.position();
        tracing::debug!(
            "decoded `{}` ({consumed} bytes, {} diagnostics)",
            record.event_name,
            self.diagnostics.len()
        );
        DecodedEvent {
            record,
            diagnostics: self.diagnostics,
            consumed,
            field_offsets: self.partial.field_offsets,
        }
    }
}
