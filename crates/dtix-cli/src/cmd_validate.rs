/// Implementation of `dtix validate`.
///
/// Runs one full decode and reports the outcome as check lines.
///
/// # Success output
///
/// ```text
/// ✓ Discriminator: EventAccount
/// ✓ Fields: 24 fields decoded (395 of 412 bytes)
/// ✓ Mappings: 2 ticket-area mappings, 2 ticket types
/// ```
///
/// Diagnostics and a discriminator that is not `EventAccount`'s are shown
/// as `⚠` lines. They fail the command only with `--strict`.
///
/// # Failure output
///
/// ```text
/// ✗ Decode failed at `seat_map_hash`: invalid option tag 0x02 at offset 141, expected 0x00 or 0x01
///   kind:     InvalidOptionTag
///   ...
/// ```
use anyhow::{Result, anyhow};
use dtix_decoder::EventDecoder;
use dtix_types::layout::{DISCRIMINATOR_LEN, EVENT_ACCOUNT_DISCRIMINATOR, FIELD_ORDER};

use crate::ValidateArgs;
use crate::input::read_account;
use crate::report;

/// Run the `dtix validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the account fails to
/// decode, or `--strict` is set and any warning was printed.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let bytes = read_account(&args.file, args.encoding)?;
    let mut warnings = 0usize;

    match bytes.get(..DISCRIMINATOR_LEN) {
        Some(prefix) if prefix == EVENT_ACCOUNT_DISCRIMINATOR => {
            println!("✓ Discriminator: EventAccount");
        }
        Some(prefix) => {
            warnings += 1;
            println!(
                "⚠ Discriminator: {} is not EventAccount's ({})",
                hex::encode(prefix),
                hex::encode(EVENT_ACCOUNT_DISCRIMINATOR)
            );
        }
        // Too short to hold one; the decode below reports it.
        None => {}
    }

    let decoder = EventDecoder::with_limits(args.limits.to_limits());
    let decoded = match decoder.decode(&bytes) {
        Ok(decoded) => decoded,
        Err(e) => {
            report::print_failure(&e, false);
            return Err(anyhow!("validation failed"));
        }
    };
    tracing::debug!("{} diagnostics", decoded.diagnostics.len());

    println!(
        "✓ Fields: {} fields decoded ({} of {} bytes)",
        FIELD_ORDER.len(),
        decoded.consumed,
        bytes.len()
    );
    let record = &decoded.record;
    println!(
        "✓ Mappings: {} ticket-area mapping{}, {} ticket type{}",
        record.ticket_area_mappings.len(),
        plural(record.ticket_area_mappings.len()),
        record.ticket_types().len(),
        plural(record.ticket_types().len()),
    );

    for diagnostic in &decoded.diagnostics {
        warnings += 1;
        println!("⚠ Warning: {diagnostic}");
    }

    if args.strict && warnings > 0 {
        return Err(anyhow!("validation failed: {warnings} warning(s) in strict mode"));
    }
    Ok(())
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
