use dtix_types::enums::WireEnum;
use dtix_types::fields::{encode_option, encode_string};
use dtix_types::layout::{self, EVENT_ACCOUNT_DISCRIMINATOR};
use dtix_types::{DecodeLimits, EventRecord, EventStatus, PricingStrategyType};
use dtix_wire::writer::{put_fixed, put_i64_le, put_u32_le, put_u8};

use crate::error::EncodeError;

/// The four schedule timestamps (unix seconds) stored after the poster
/// hash. The decoder steps over them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventTimings {
    pub event_start_time: i64,
    pub event_end_time: i64,
    pub ticket_sale_start_time: i64,
    pub ticket_sale_end_time: i64,
}

/// Fields the on-chain struct stores after the mapping vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccountTrailer {
    pub bump: u8,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Bytes produced by [`EventEncoder::encode`], with the start offset of
/// every field in wire order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedEvent {
    pub bytes: Vec<u8>,
    pub field_offsets: Vec<(&'static str, usize)>,
    /// Offset one past the mapping vector, where the decoder stops.
    pub record_end: usize,
}

impl EncodedEvent {
    #[must_use]
    pub fn offset_of(&self, field: &str) -> Option<usize> {
        self.field_offsets
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, offset)| *offset)
    }
}

/// Synthetic event-account encoder.
///
/// Lays an [`EventRecord`] out the way the ticketing program serializes
/// its account, so tests and fixtures can produce byte-exact input for the
/// decoder without a chain. Fields the record does not carry (timestamps,
/// status, pricing, the refund and resale counters, the trailer) come from
/// the builder and default to zero / the first enum variant.
///
/// ```rust
/// use dtix_encoder::EventEncoder;
/// use dtix_types::{EventRecord, EventStatus};
///
/// let record = EventRecord {
///     event_name: "Summer Fest".into(),
///     ..EventRecord::default()
/// };
/// let encoded = EventEncoder::new(&record)
///     .status(EventStatus::OnSale)
///     .encode()
///     .unwrap();
/// assert_eq!(encoded.offset_of("organizer"), Some(8));
/// ```
///
/// By default every string and the mapping count are checked against
/// [`DecodeLimits::default`]. [`unchecked`](Self::unchecked) turns the
/// checks off, which is how the tests build hostile buffers.
pub struct EventEncoder<'r> {
    record: &'r EventRecord,
    discriminator: [u8; layout::DISCRIMINATOR_LEN],
    timings: EventTimings,
    status: u8,
    pricing: u8,
    total_tickets_refunded: u32,
    total_tickets_resale_available: u32,
    trailer: Option<AccountTrailer>,
    limits: Option<DecodeLimits>,
}

impl<'r> EventEncoder<'r> {
    #[must_use]
    pub fn new(record: &'r EventRecord) -> Self {
        Self {
            record,
            discriminator: EVENT_ACCOUNT_DISCRIMINATOR,
            timings: EventTimings::default(),
            status: EventStatus::default().to_wire_byte(),
            pricing: PricingStrategyType::default().to_wire_byte(),
            total_tickets_refunded: 0,
            total_tickets_resale_available: 0,
            trailer: None,
            limits: Some(DecodeLimits::default()),
        }
    }

    // ── Skipped-field setters ───────────────────────────────────────────

    pub fn discriminator(&mut self, bytes: [u8; layout::DISCRIMINATOR_LEN]) -> &mut Self {
        self.discriminator = bytes;
        self
    }

    pub fn timings(&mut self, timings: EventTimings) -> &mut Self {
        self.timings = timings;
        self
    }

    pub fn status(&mut self, status: EventStatus) -> &mut Self {
        self.status = status.to_wire_byte();
        self
    }

    /// Write an arbitrary status byte, including ones no variant uses.
    pub fn raw_status(&mut self, byte: u8) -> &mut Self {
        self.status = byte;
        self
    }

    pub fn pricing(&mut self, pricing: PricingStrategyType) -> &mut Self {
        self.pricing = pricing.to_wire_byte();
        self
    }

    /// Write an arbitrary pricing byte, including ones no variant uses.
    pub fn raw_pricing(&mut self, byte: u8) -> &mut Self {
        self.pricing = byte;
        self
    }

    pub fn refunded(&mut self, count: u32) -> &mut Self {
        self.total_tickets_refunded = count;
        self
    }

    pub fn resale_available(&mut self, count: u32) -> &mut Self {
        self.total_tickets_resale_available = count;
        self
    }

    /// Append bump seed and creation/update timestamps after the mappings.
    pub fn trailer(&mut self, trailer: AccountTrailer) -> &mut Self {
        self.trailer = Some(trailer);
        self
    }

    // ── Limits ──────────────────────────────────────────────────────────

    pub fn limits(&mut self, limits: DecodeLimits) -> &mut Self {
        self.limits = Some(limits);
        self
    }

    /// Skip every check, including mapping canonicality.
    pub fn unchecked(&mut self) -> &mut Self {
        self.limits = None;
        self
    }

    /// Serialize the account.
    ///
    /// # Errors
    ///
    /// [`EncodeError::StringTooLong`] or [`EncodeError::TooManyMappings`]
    /// when a value is over the configured limits, and
    /// [`EncodeError::NonCanonicalMapping`] for a mapping that would not
    /// decode back to itself.
    pub fn encode(&self) -> Result<EncodedEvent, EncodeError> {
        self.check()?;

        let r = self.record;
        let t = &self.timings;
        let mut w = Writer::default();

        w.mark(layout::DISCRIMINATOR);
        put_fixed(&mut w.buf, &self.discriminator);
        w.mark(layout::ORGANIZER);
        r.organizer.write_to(&mut w.buf);
        w.string(layout::EVENT_NAME, &r.event_name);
        w.string(layout::EVENT_DESCRIPTION_HASH, &r.event_description_hash);
        w.string(layout::EVENT_POSTER_IMAGE_HASH, &r.event_poster_image_hash);
        w.i64(layout::EVENT_START_TIME, t.event_start_time);
        w.i64(layout::EVENT_END_TIME, t.event_end_time);
        w.i64(layout::TICKET_SALE_START_TIME, t.ticket_sale_start_time);
        w.i64(layout::TICKET_SALE_END_TIME, t.ticket_sale_end_time);
        w.mark(layout::VENUE_ACCOUNT);
        r.venue_account.write_to(&mut w.buf);
        w.mark(layout::SEAT_MAP_HASH);
        encode_option(&mut w.buf, r.seat_map_hash.as_deref(), encode_string);
        w.string(layout::EVENT_CATEGORY, &r.event_category);
        w.string(layout::PERFORMER_DETAILS_HASH, &r.performer_details_hash);
        w.string(layout::CONTACT_INFO_HASH, &r.contact_info_hash);
        w.u8(layout::EVENT_STATUS, self.status);
        w.string(layout::REFUND_POLICY_HASH, &r.refund_policy_hash);
        w.u8(layout::PRICING_STRATEGY_TYPE, self.pricing);
        w.u32(layout::TOTAL_TICKETS_MINTED, r.total_tickets_minted);
        w.u32(layout::TOTAL_TICKETS_SOLD, r.total_tickets_sold);
        w.u32(layout::TOTAL_TICKETS_REFUNDED, self.total_tickets_refunded);
        w.u32(
            layout::TOTAL_TICKETS_RESALE_AVAILABLE,
            self.total_tickets_resale_available,
        );
        w.i64(layout::TOTAL_REVENUE, r.total_revenue);
        w.u8(layout::TICKET_TYPES_COUNT, r.ticket_types_count);

        w.mark(layout::TICKET_AREA_MAPPINGS);
        #[allow(clippy::cast_possible_truncation)]
        put_u32_le(&mut w.buf, r.ticket_area_mappings.len() as u32);
        for mapping in &r.ticket_area_mappings {
            encode_string(&mut w.buf, &mapping.to_wire_string());
        }

        let record_end = w.buf.len();
        if let Some(trailer) = &self.trailer {
            put_u8(&mut w.buf, trailer.bump);
            put_i64_le(&mut w.buf, trailer.created_at);
            put_i64_le(&mut w.buf, trailer.updated_at);
        }

        Ok(EncodedEvent {
            bytes: w.buf,
            field_offsets: w.offsets,
            record_end,
        })
    }

    fn check(&self) -> Result<(), EncodeError> {
        let Some(limits) = &self.limits else {
            return Ok(());
        };
        let r = self.record;

        let strings = [
            (layout::EVENT_NAME, r.event_name.as_str()),
            (layout::EVENT_DESCRIPTION_HASH, r.event_description_hash.as_str()),
            (layout::EVENT_POSTER_IMAGE_HASH, r.event_poster_image_hash.as_str()),
            (layout::SEAT_MAP_HASH, r.seat_map_hash.as_deref().unwrap_or("")),
            (layout::EVENT_CATEGORY, r.event_category.as_str()),
            (layout::PERFORMER_DETAILS_HASH, r.performer_details_hash.as_str()),
            (layout::CONTACT_INFO_HASH, r.contact_info_hash.as_str()),
            (layout::REFUND_POLICY_HASH, r.refund_policy_hash.as_str()),
        ];
        for (field, value) in strings {
            check_len(field, value.len(), limits)?;
        }

        let count = r.ticket_area_mappings.len();
        if count > limits.max_vector_len as usize {
            return Err(EncodeError::TooManyMappings {
                count,
                limit: limits.max_vector_len,
            });
        }
        for (index, mapping) in r.ticket_area_mappings.iter().enumerate() {
            let value = mapping.to_wire_string();
            check_len(layout::TICKET_AREA_MAPPINGS, value.len(), limits)?;
            if !mapping.is_canonical() {
                return Err(EncodeError::NonCanonicalMapping { index, value });
            }
        }
        Ok(())
    }
}

fn check_len(field: &'static str, len: usize, limits: &DecodeLimits) -> Result<(), EncodeError> {
    if len > limits.max_string_len as usize {
        return Err(EncodeError::StringTooLong {
            field,
            len,
            limit: limits.max_string_len,
        });
    }
    Ok(())
}

/// Output buffer that remembers where each field started.
#[derive(Default)]
struct Writer {
    buf: Vec<u8>,
    offsets: Vec<(&'static str, usize)>,
}

impl Writer {
    fn mark(&mut self, field: &'static str) {
        self.offsets.push((field, self.buf.len()));
    }

    fn string(&mut self, field: &'static str, value: &str) {
        self.mark(field);
        encode_string(&mut self.buf, value);
    }

    fn u8(&mut self, field: &'static str, value: u8) {
        self.mark(field);
        put_u8(&mut self.buf, value);
    }

    fn u32(&mut self, field: &'static str, value: u32) {
        self.mark(field);
        put_u32_le(&mut self.buf, value);
    }

    fn i64(&mut self, field: &'static str, value: i64) {
        self.mark(field);
        put_i64_le(&mut self.buf, value);
    }
}
