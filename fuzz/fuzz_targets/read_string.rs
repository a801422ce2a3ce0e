#![no_main]

use dtix_types::fields::{read_option, read_string};
use dtix_types::vector::read_ticket_area_mappings;
use dtix_types::DecodeLimits;
use dtix_wire::Cursor;
use libfuzzer_sys::fuzz_target;

// Fuzz target: the variable-length readers in dtix-types.
//
// The first byte picks the reader, the second the string bound, so small
// inputs still reach the bound checks.
//
// Catches bugs in:
// - Length prefixes over the bound
// - Truncated payloads
// - Invalid UTF-8
// - Option tags other than 0 / 1
fuzz_target!(|data: &[u8]| {
    let [selector, bound, rest @ ..] = data else {
        return;
    };
    let limits = DecodeLimits::new(u32::from(*bound) * 4, 16);
    let mut cursor = Cursor::new(rest);

    let ok = match selector % 3 {
        0 => read_string(&mut cursor, &limits).is_ok(),
        1 => read_option(&mut cursor, |c| read_string(c, &limits)).is_ok(),
        _ => read_ticket_area_mappings(&mut cursor, &limits).is_ok(),
    };
    if ok {
        assert!(cursor.position() <= rest.len());
    }
});
