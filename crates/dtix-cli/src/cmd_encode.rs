/// Implementation of `dtix encode`.
///
/// Builds event-account bytes from a JSON manifest. Useful for producing
/// fixtures, or for reproducing an account seen on chain with one field
/// changed to see where decoding breaks.
///
/// # Manifest format
///
/// ```json
/// {
///   "organizer": "5zzsbHTkm4ymKhWZH78zXn7T4kZtqhogMCKZK8KLHesK",
///   "event_name": "Summer Fest",
///   "event_description_hash": "QmDescription",
///   "event_poster_image_hash": "QmPoster",
///   "event_start_time": 1767225600,
///   "event_end_time": 1767240000,
///   "ticket_sale_start_time": 1764547200,
///   "ticket_sale_end_time": 1767222000,
///   "venue_account": "9NwekLkGKyq6JE1w63Sw5YhbGh5xWt8gHbeNE8ZHeJzf",
///   "seat_map_hash": null,
///   "event_category": "music",
///   "performer_details_hash": "QmPerformers",
///   "contact_info_hash": "QmContact",
///   "event_status": "on_sale",
///   "refund_policy_hash": "QmRefund",
///   "pricing_strategy": "fixed_price",
///   "total_tickets_minted": 1000,
///   "total_tickets_sold": 250,
///   "total_revenue": 25000000000,
///   "ticket_types_count": 2,
///   "ticket_area_mappings": ["VIP-A1", "GA-B2"]
/// }
/// ```
///
/// ```text
/// ┌─────────────────────────────┬──────────────────────────────────────────┐
/// │ Key                         │ Default when absent                      │
/// ├─────────────────────────────┼──────────────────────────────────────────┤
/// │ organizer, venue_account    │ all-zero key (base58 "1111…")            │
/// │ string fields               │ ""                                       │
/// │ seat_map_hash               │ null (absent)                            │
/// │ timestamps, counters        │ 0                                        │
/// │ event_status                │ upcoming                                 │
/// │ pricing_strategy            │ fixed_price                              │
/// │ ticket_types_count          │ number of distinct ticket types          │
/// │ ticket_area_mappings        │ []                                       │
/// │ bump, created_at, updated_at│ no trailer written                       │
/// └─────────────────────────────┴──────────────────────────────────────────┘
/// ```
use std::fs;

use anyhow::{Context, Result, bail};
use dtix_encoder::{AccountTrailer, EncodedEvent, EventEncoder, EventTimings};
use dtix_types::{EventRecord, EventStatus, PricingStrategyType, Pubkey, TicketAreaMapping};

use crate::EncodeArgs;
use crate::input::encode_output;

// ── Manifest serde types ──────────────────────────────────────────────────────

#[derive(serde::Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct Manifest {
    organizer: Option<String>,
    event_name: String,
    event_description_hash: String,
    event_poster_image_hash: String,
    event_start_time: i64,
    event_end_time: i64,
    ticket_sale_start_time: i64,
    ticket_sale_end_time: i64,
    venue_account: Option<String>,
    seat_map_hash: Option<String>,
    event_category: String,
    performer_details_hash: String,
    contact_info_hash: String,
    event_status: Option<String>,
    refund_policy_hash: String,
    pricing_strategy: Option<String>,
    total_tickets_minted: u32,
    total_tickets_sold: u32,
    total_tickets_refunded: u32,
    total_tickets_resale_available: u32,
    total_revenue: i64,
    ticket_types_count: Option<u8>,
    ticket_area_mappings: Vec<String>,
    /// Any of these set writes the post-mapping trailer.
    bump: Option<u8>,
    created_at: Option<i64>,
    updated_at: Option<i64>,
}

/// Run the `dtix encode` command.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or parsed, names an
/// unknown status or pricing strategy, holds a malformed key, exceeds the
/// decode limits (without `--unchecked`), or the output cannot be written.
pub fn run(args: &EncodeArgs) -> Result<()> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;
    let manifest: Manifest = serde_json::from_str(&text)
        .with_context(|| format!("invalid manifest {}", args.input.display()))?;

    let encoded = encode_manifest(&manifest, args.unchecked)?;
    fs::write(&args.output, encode_output(&encoded.bytes, args.encoding))
        .with_context(|| format!("cannot write {}", args.output.display()))?;

    tracing::info!(
        "wrote {} ({} bytes, {} encoding)",
        args.output.display(),
        encoded.bytes.len(),
        args.encoding
    );
    println!(
        "Wrote {} bytes to {} ({})",
        encoded.bytes.len(),
        args.output.display(),
        args.encoding
    );
    Ok(())
}

fn encode_manifest(manifest: &Manifest, unchecked: bool) -> Result<EncodedEvent> {
    let record = build_record(manifest)?;

    let mut encoder = EventEncoder::new(&record);
    encoder
        .timings(EventTimings {
            event_start_time: manifest.event_start_time,
            event_end_time: manifest.event_end_time,
            ticket_sale_start_time: manifest.ticket_sale_start_time,
            ticket_sale_end_time: manifest.ticket_sale_end_time,
        })
        .refunded(manifest.total_tickets_refunded)
        .resale_available(manifest.total_tickets_resale_available);
    if let Some(status) = &manifest.event_status {
        encoder.status(parse_status(status)?);
    }
    if let Some(pricing) = &manifest.pricing_strategy {
        encoder.pricing(parse_pricing(pricing)?);
    }
    if manifest.bump.is_some() || manifest.created_at.is_some() || manifest.updated_at.is_some() {
        encoder.trailer(AccountTrailer {
            bump: manifest.bump.unwrap_or(0),
            created_at: manifest.created_at.unwrap_or(0),
            updated_at: manifest.updated_at.unwrap_or(0),
        });
    }
    if unchecked {
        encoder.unchecked();
    }

    encoder.encode().context("manifest does not fit the decode limits")
}

fn build_record(manifest: &Manifest) -> Result<EventRecord> {
    let ticket_area_mappings: Vec<TicketAreaMapping> = manifest
        .ticket_area_mappings
        .iter()
        .map(|raw| TicketAreaMapping::from(raw.clone()))
        .collect();

    let mut record = EventRecord {
        organizer: parse_key("organizer", manifest.organizer.as_deref())?,
        event_name: manifest.event_name.clone(),
        event_description_hash: manifest.event_description_hash.clone(),
        event_poster_image_hash: manifest.event_poster_image_hash.clone(),
        venue_account: parse_key("venue_account", manifest.venue_account.as_deref())?,
        seat_map_hash: manifest.seat_map_hash.clone(),
        event_category: manifest.event_category.clone(),
        performer_details_hash: manifest.performer_details_hash.clone(),
        contact_info_hash: manifest.contact_info_hash.clone(),
        refund_policy_hash: manifest.refund_policy_hash.clone(),
        total_tickets_minted: manifest.total_tickets_minted,
        total_tickets_sold: manifest.total_tickets_sold,
        total_revenue: manifest.total_revenue,
        ticket_types_count: 0,
        ticket_area_mappings,
    };

    record.ticket_types_count = match manifest.ticket_types_count {
        Some(count) => count,
        None => u8::try_from(record.ticket_types().len())
            .context("more than 255 distinct ticket types; set ticket_types_count")?,
    };
    Ok(record)
}

fn parse_key(field: &str, value: Option<&str>) -> Result<Pubkey> {
    match value {
        None => Ok(Pubkey::default()),
        Some(text) => text
            .parse()
            .with_context(|| format!("`{field}` is not a base58 public key: {text:?}")),
    }
}

fn parse_status(name: &str) -> Result<EventStatus> {
    Ok(match name {
        "upcoming" => EventStatus::Upcoming,
        "on_sale" => EventStatus::OnSale,
        "sold_out" => EventStatus::SoldOut,
        "cancelled" => EventStatus::Cancelled,
        "postponed" => EventStatus::Postponed,
        "completed" => EventStatus::Completed,
        other => bail!(
            "unknown event_status {other:?} (expected upcoming, on_sale, sold_out, \
             cancelled, postponed or completed)"
        ),
    })
}

fn parse_pricing(name: &str) -> Result<PricingStrategyType> {
    Ok(match name {
        "fixed_price" => PricingStrategyType::FixedPrice,
        "dynamic_pricing" => PricingStrategyType::DynamicPricing,
        other => bail!("unknown pricing_strategy {other:?} (expected fixed_price or dynamic_pricing)"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_manifest_uses_defaults() {
        let manifest: Manifest = serde_json::from_str("{}").unwrap();
        let record = build_record(&manifest).unwrap();
        assert_eq!(record, EventRecord::default());
    }

    #[test]
    fn ticket_types_count_defaults_to_distinct_types() {
        let manifest: Manifest = serde_json::from_str(
            r#"{ "ticket_area_mappings": ["VIP-A1", "VIP-A2", "GA-B1", "LOOSE"] }"#,
        )
        .unwrap();
        let record = build_record(&manifest).unwrap();
        assert_eq!(record.ticket_types_count, 2);
        assert_eq!(record.ticket_area_mappings[3], TicketAreaMapping::Opaque("LOOSE".into()));
    }

    #[test]
    fn rejects_bad_key_and_unknown_names() {
        let manifest: Manifest = serde_json::from_str(r#"{ "organizer": "0OIl" }"#).unwrap();
        assert!(build_record(&manifest).is_err());
        assert!(parse_status("paused").is_err());
        assert_eq!(parse_pricing("dynamic_pricing").unwrap(), PricingStrategyType::DynamicPricing);
    }

    #[test]
    fn golden_manifest_reproduces_golden_account() {
        let manifest: Manifest =
            serde_json::from_str(include_str!("../../dtix-tests/tests/golden/summer_fest.json"))
                .unwrap();
        let golden: String = include_str!("../../dtix-tests/tests/golden/summer_fest.hex")
            .split_whitespace()
            .collect();

        let encoded = encode_manifest(&manifest, false).unwrap();
        assert_eq!(hex::encode(&encoded.bytes), golden);
    }

    #[test]
    fn unknown_manifest_keys_are_rejected() {
        assert!(serde_json::from_str::<Manifest>(r#"{ "event_nmae": "typo" }"#).is_err());
    }
}
