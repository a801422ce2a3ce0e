#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use dtix_wire::Cursor;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    U8,
    U32,
    U64,
    I64,
    Bool,
    Skip(u16),
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    buf: Vec<u8>,
    ops: Vec<Op>,
}

// Fuzz target: sequences of primitive reads on one cursor.
//
// A failed read must leave the cursor where it was; a successful one
// must advance it by exactly the read width.
fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(input) = FuzzInput::arbitrary(&mut u) else {
        return;
    };

    let mut cursor = Cursor::new(&input.buf);
    let mut diagnostics = Vec::new();

    for op in &input.ops {
        let before = cursor.position();
        let (width, ok) = match op {
            Op::U8 => (1, cursor.read_u8().is_ok()),
            Op::U32 => (4, cursor.read_u32_le().is_ok()),
            Op::U64 => (8, cursor.read_u64_le().is_ok()),
            Op::I64 => (8, cursor.read_i64_le().is_ok()),
            Op::Bool => (1, cursor.read_bool("flag", &mut diagnostics).is_ok()),
            Op::Skip(n) => (usize::from(*n), cursor.skip(usize::from(*n)).is_ok()),
        };

        if ok {
            assert_eq!(cursor.position(), before + width);
        } else {
            assert_eq!(cursor.position(), before);
            assert!(cursor.remaining() < width);
        }
        assert_eq!(cursor.position() + cursor.remaining(), input.buf.len());
    }
});
