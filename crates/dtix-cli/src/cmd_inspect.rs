/// Implementation of `dtix inspect`.
///
/// Decodes one event account and prints the captured fields, the
/// ticket-area mappings and any diagnostics. With `--json` the same
/// information is printed as a single JSON object.
///
/// # Output format
///
/// ```text
/// Event account: 412 bytes, 395 decoded
///   organizer                  5zzsbHTkm4ymKhWZH78zXn7T4kZtqhogMCKZK8KLHesK
///   event_name                 "Summer Fest"
///   ...
///   ticket_types_count         2
/// Ticket areas (2):
///   VIP  → A1
///   GA   → B2
/// Ticket types: GA, VIP
/// Warnings:
///   ⚠ unknown EventStatus tag 0x09 for `event_status` at offset 201
/// ```
///
/// A failed decode prints what was captured, the failing field and a
/// layout-drift hint, then exits with code 1.
use anyhow::{Result, bail};
use dtix_decoder::{DecodedEvent, EventDecoder};
use dtix_types::TicketAreaMapping;

use crate::InspectArgs;
use crate::input::read_account;
use crate::report;

/// Run the `dtix inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid input for the
/// chosen encoding, or the account fails to decode.
pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes = read_account(&args.file, args.encoding)?;
    let decoder = EventDecoder::with_limits(args.limits.to_limits());

    match decoder.decode(&bytes) {
        Ok(decoded) => {
            if args.json {
                println!("{:#}", report::decoded_json(&decoded, args.offsets));
            } else {
                print_decoded(&decoded, bytes.len(), args.offsets);
            }
            Ok(())
        }
        Err(e) => {
            if args.json {
                println!("{:#}", report::failure_json(&e, args.offsets));
            } else {
                report::print_failure(&e, args.offsets);
            }
            bail!("failed to decode {}", args.file.display())
        }
    }
}

fn print_decoded(decoded: &DecodedEvent, total: usize, show_offsets: bool) {
    let record = &decoded.record;
    println!("Event account: {total} bytes, {} decoded", decoded.consumed);
    report::print_rows(&report::record_rows(record));

    println!("Ticket areas ({}):", record.ticket_area_mappings.len());
    let width = record
        .ticket_area_mappings
        .iter()
        .filter_map(TicketAreaMapping::ticket_type)
        .map(str::len)
        .max()
        .unwrap_or(0);
    for mapping in &record.ticket_area_mappings {
        match mapping {
            TicketAreaMapping::Split { ticket_type, area } => {
                println!("  {ticket_type:<width$} → {area}");
            }
            TicketAreaMapping::Opaque(raw) => println!("  {raw} (unsplit)"),
        }
    }

    let types = record.ticket_types();
    if !types.is_empty() {
        println!("Ticket types: {}", types.join(", "));
    }

    if show_offsets {
        println!("Offsets:");
        report::print_offsets(&decoded.field_offsets);
    }

    if !decoded.diagnostics.is_empty() {
        println!("Warnings:");
        for diagnostic in &decoded.diagnostics {
            println!("  ⚠ {diagnostic}");
        }
    }
}
