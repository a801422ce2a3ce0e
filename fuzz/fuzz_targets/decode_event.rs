#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: full event-account decode on arbitrary bytes.
//
// Catches bugs in:
// - Cursor positions past the buffer end
// - Length and count prefixes that allocate before being bounded
// - Partial records that disagree with the reported field
fuzz_target!(|data: &[u8]| {
    match dtix_decoder::decode_event(data) {
        Ok(decoded) => {
            assert!(decoded.consumed <= data.len());
            assert_eq!(decoded.field_offsets.len(), dtix_types::layout::FIELD_ORDER.len());
        }
        Err(e) => {
            assert!(e.position <= data.len());
            assert_eq!(e.partial.field_offsets.last().map(|(f, _)| *f), Some(e.field));
        }
    }
});
