//! Text and JSON rendering shared by `inspect` and `validate`.

use dtix_decoder::{DecodeError, DecodedEvent, PartialEvent};
use dtix_types::layout;
use dtix_types::{EventRecord, TicketAreaMapping};
use serde_json::{Map, Value, json};

pub const DRIFT_HINT: &str = "the account layout may have drifted from the field sequence this \
     decoder assumes; compare it with the program's current account struct";

// ── Text ──────────────────────────────────────────────────────────────────────

/// `(name, value)` rows for every surfaced field, in wire order.
pub fn record_rows(record: &EventRecord) -> Vec<(&'static str, String)> {
    vec![
        (layout::ORGANIZER, record.organizer.to_string()),
        (layout::EVENT_NAME, format!("{:?}", record.event_name)),
        (layout::EVENT_DESCRIPTION_HASH, record.event_description_hash.clone()),
        (layout::EVENT_POSTER_IMAGE_HASH, record.event_poster_image_hash.clone()),
        (layout::VENUE_ACCOUNT, record.venue_account.to_string()),
        (layout::SEAT_MAP_HASH, optional(record.seat_map_hash.as_deref())),
        (layout::EVENT_CATEGORY, record.event_category.clone()),
        (layout::PERFORMER_DETAILS_HASH, record.performer_details_hash.clone()),
        (layout::CONTACT_INFO_HASH, record.contact_info_hash.clone()),
        (layout::REFUND_POLICY_HASH, record.refund_policy_hash.clone()),
        (layout::TOTAL_TICKETS_MINTED, record.total_tickets_minted.to_string()),
        (layout::TOTAL_TICKETS_SOLD, record.total_tickets_sold.to_string()),
        (layout::TOTAL_REVENUE, record.total_revenue.to_string()),
        (layout::TICKET_TYPES_COUNT, record.ticket_types_count.to_string()),
    ]
}

/// Rows for the fields a failed run captured.
pub fn partial_rows(partial: &PartialEvent) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    let mut push = |name: &'static str, value: Option<String>| {
        if let Some(value) = value {
            rows.push((name, value));
        }
    };

    push(layout::ORGANIZER, partial.organizer.map(|k| k.to_string()));
    push(layout::EVENT_NAME, partial.event_name.as_ref().map(|s| format!("{s:?}")));
    push(layout::EVENT_DESCRIPTION_HASH, partial.event_description_hash.clone());
    push(layout::EVENT_POSTER_IMAGE_HASH, partial.event_poster_image_hash.clone());
    push(layout::VENUE_ACCOUNT, partial.venue_account.map(|k| k.to_string()));
    push(
        layout::SEAT_MAP_HASH,
        partial.seat_map_hash.as_ref().map(|s| optional(s.as_deref())),
    );
    push(layout::EVENT_CATEGORY, partial.event_category.clone());
    push(layout::PERFORMER_DETAILS_HASH, partial.performer_details_hash.clone());
    push(layout::CONTACT_INFO_HASH, partial.contact_info_hash.clone());
    push(layout::REFUND_POLICY_HASH, partial.refund_policy_hash.clone());
    push(layout::TOTAL_TICKETS_MINTED, partial.total_tickets_minted.map(|n| n.to_string()));
    push(layout::TOTAL_TICKETS_SOLD, partial.total_tickets_sold.map(|n| n.to_string()));
    push(layout::TOTAL_REVENUE, partial.total_revenue.map(|n| n.to_string()));
    push(layout::TICKET_TYPES_COUNT, partial.ticket_types_count.map(|n| n.to_string()));
    rows
}

pub fn print_rows(rows: &[(&'static str, String)]) {
    for (name, value) in rows {
        println!("  {name:<26} {value}");
    }
}

pub fn print_offsets(offsets: &[(&'static str, usize)]) {
    for (name, offset) in offsets {
        let note = if layout::is_skipped(name) { "  (skipped)" } else { "" };
        println!("  {offset:>6}  0x{offset:04X}  {name}{note}");
    }
}

/// Print a failed run: what broke, where, and what was read before it.
pub fn print_failure(error: &DecodeError, show_offsets: bool) {
    println!("✗ Decode failed at `{}`: {}", error.field, error.source);
    println!("  kind:     {}", error.kind());
    println!("  offset:   {}", error.offset());
    println!("  cursor:   {}", error.position);

    let rows = partial_rows(&error.partial);
    if rows.is_empty() {
        println!("  captured: nothing");
    } else {
        println!("  captured:");
        print_rows(&rows);
    }

    if show_offsets {
        println!("  offsets:");
        print_offsets(&error.partial.field_offsets);
    }
    println!("  hint:     {DRIFT_HINT}");
}

fn optional(value: Option<&str>) -> String {
    value.map_or_else(|| "(none)".to_string(), str::to_string)
}

// ── JSON ──────────────────────────────────────────────────────────────────────

pub fn mapping_json(mapping: &TicketAreaMapping) -> Value {
    json!({
        "raw": mapping.to_wire_string(),
        "ticket_type": mapping.ticket_type(),
        "area": mapping.area(),
    })
}

pub fn record_json(record: &EventRecord) -> Value {
    json!({
        "organizer": record.organizer.to_string(),
        "event_name": record.event_name,
        "event_description_hash": record.event_description_hash,
        "event_poster_image_hash": record.event_poster_image_hash,
        "venue_account": record.venue_account.to_string(),
        "seat_map_hash": record.seat_map_hash,
        "event_category": record.event_category,
        "performer_details_hash": record.performer_details_hash,
        "contact_info_hash": record.contact_info_hash,
        "refund_policy_hash": record.refund_policy_hash,
        "total_tickets_minted": record.total_tickets_minted,
        "total_tickets_sold": record.total_tickets_sold,
        "total_revenue": record.total_revenue,
        "ticket_types_count": record.ticket_types_count,
        "ticket_area_mappings": record
            .ticket_area_mappings
            .iter()
            .map(mapping_json)
            .collect::<Vec<_>>(),
        "ticket_types": record.ticket_types(),
    })
}

pub fn offsets_json(offsets: &[(&'static str, usize)]) -> Value {
    let map: Map<String, Value> = offsets
        .iter()
        .map(|(name, offset)| ((*name).to_string(), json!(offset)))
        .collect();
    Value::Object(map)
}

pub fn decoded_json(decoded: &DecodedEvent, show_offsets: bool) -> Value {
    let mut out = json!({
        "record": record_json(&decoded.record),
        "diagnostics": decoded
            .diagnostics
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        "consumed": decoded.consumed,
    });
    if show_offsets {
        out["field_offsets"] = offsets_json(&decoded.field_offsets);
    }
    out
}

pub fn failure_json(error: &DecodeError, show_offsets: bool) -> Value {
    let captured: Map<String, Value> = partial_rows(&error.partial)
        .into_iter()
        .map(|(name, value)| (name.to_string(), Value::String(value)))
        .collect();

    let mut out = json!({
        "error": {
            "kind": error.kind().to_string(),
            "field": error.field,
            "offset": error.offset(),
            "position": error.position,
            "message": error.source.to_string(),
        },
        "captured": captured,
        "hint": DRIFT_HINT,
    });
    if show_offsets {
        out["field_offsets"] = offsets_json(&error.partial.field_offsets);
    }
    out
}
