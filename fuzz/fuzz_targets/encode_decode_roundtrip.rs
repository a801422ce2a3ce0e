#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use dtix_decoder::decode_event;
use dtix_encoder::{EventEncoder, EventTimings};
use dtix_types::{EventRecord, Pubkey, TicketAreaMapping};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzEvent {
    organizer: [u8; 32],
    event_name: String,
    event_description_hash: String,
    event_poster_image_hash: String,
    timings: [i64; 4],
    venue_account: [u8; 32],
    seat_map_hash: Option<String>,
    event_category: String,
    performer_details_hash: String,
    contact_info_hash: String,
    status: u8,
    refund_policy_hash: String,
    pricing: u8,
    total_tickets_minted: u32,
    total_tickets_sold: u32,
    total_tickets_refunded: u32,
    total_tickets_resale_available: u32,
    total_revenue: i64,
    ticket_types_count: u8,
    ticket_area_mappings: Vec<String>,
}

// Fuzz target: EventEncoder -> decode_event roundtrip.
//
// Anything the checked encoder accepts must decode back to the same
// record, with the skipped fields consumed at their full width.
fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(input) = FuzzEvent::arbitrary(&mut u) else {
        return;
    };

    let record = EventRecord {
        organizer: Pubkey::new(input.organizer),
        event_name: input.event_name,
        event_description_hash: input.event_description_hash,
        event_poster_image_hash: input.event_poster_image_hash,
        venue_account: Pubkey::new(input.venue_account),
        seat_map_hash: input.seat_map_hash,
        event_category: input.event_category,
        performer_details_hash: input.performer_details_hash,
        contact_info_hash: input.contact_info_hash,
        refund_policy_hash: input.refund_policy_hash,
        total_tickets_minted: input.total_tickets_minted,
        total_tickets_sold: input.total_tickets_sold,
        total_revenue: input.total_revenue,
        ticket_types_count: input.ticket_types_count,
        ticket_area_mappings: input
            .ticket_area_mappings
            .into_iter()
            .map(TicketAreaMapping::from)
            .collect(),
    };

    let [event_start_time, event_end_time, ticket_sale_start_time, ticket_sale_end_time] =
        input.timings;
    let mut encoder = EventEncoder::new(&record);
    encoder
        .timings(EventTimings {
            event_start_time,
            event_end_time,
            ticket_sale_start_time,
            ticket_sale_end_time,
        })
        .raw_status(input.status)
        .raw_pricing(input.pricing)
        .refunded(input.total_tickets_refunded)
        .resale_available(input.total_tickets_resale_available);

    let Ok(encoded) = encoder.encode() else {
        return;
    };

    let decoded = decode_event(&encoded.bytes);
    assert!(decoded.is_ok(), "decoder failed on valid encoder output: {:?}", decoded.err());

    let decoded = decoded.unwrap();
    assert_eq!(decoded.record, record);
    assert_eq!(decoded.consumed, encoded.bytes.len());
    assert_eq!(decoded.field_offsets, encoded.field_offsets);
});
