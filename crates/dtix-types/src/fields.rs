use dtix_wire::Cursor;
use dtix_wire::writer::{put_fixed, put_u32_le, put_u8};

use crate::error::TypeError;
use crate::limits::DecodeLimits;

// ── Decoding ──────────────────────────────────────────────────────────
//
// Each reader takes the run's cursor, consumes exactly the bytes of one
// field and returns the value. On error the cursor is left wherever the
// last successful primitive read put it, so the caller can report how far
// the run got.

/// Read a length-prefixed UTF-8 string.
///
/// Wire layout:
/// ```text
///   length (u32 LE) │ bytes [length]
/// ```
///
/// The length is checked against `limits.max_string_len` before anything
/// else happens. An out-of-bound length fails immediately, without
/// looking at the payload, even when the payload would also run past the
/// end of the buffer.
///
/// # Errors
///
/// - [`TypeError::InvalidLength`] if the declared length is over the bound.
/// - [`TypeError::Wire`] if the prefix or payload runs past the buffer.
/// - [`TypeError::TextDecode`] if the payload is not UTF-8.
pub fn read_string(cursor: &mut Cursor<'_>, limits: &DecodeLimits) -> Result<String, TypeError> {
    let offset = cursor.position();
    let declared = cursor.read_u32_le()?;

    if declared > limits.max_string_len {
        return Err(TypeError::InvalidLength {
            offset,
            declared,
            bound: limits.max_string_len,
        });
    }

    let bytes = cursor.read_fixed(declared as usize)?;
    let text = std::str::from_utf8(bytes).map_err(|_| TypeError::TextDecode {
        offset,
        length: declared,
    })?;

    Ok(text.to_owned())
}

/// Read a Borsh `Option<T>` using `read` for the inner value.
///
/// ```text
///   0x00               → None   (1 byte consumed)
///   0x01 │ inner ...   → Some   (1 byte + whatever `read` consumes)
///   anything else      → InvalidOptionTag
/// ```
///
/// The tag decides whether any further bytes belong to this field, so an
/// unexpected tag is fatal rather than guessed at.
///
/// # Errors
///
/// - [`TypeError::InvalidOptionTag`] for a tag other than 0 or 1, reported
///   at the tag's offset.
/// - [`TypeError::Wire`] if the tag byte is missing.
/// - Whatever `read` returns.
pub fn read_option<'a, T, F>(cursor: &mut Cursor<'a>, read: F) -> Result<Option<T>, TypeError>
where
    F: FnOnce(&mut Cursor<'a>) -> Result<T, TypeError>,
{
    let offset = cursor.position();
    match cursor.read_u8()? {
        0 => Ok(None),
        1 => read(cursor).map(Some),
        tag => Err(TypeError::InvalidOptionTag { offset, tag }),
    }
}

// ── Encoding helpers ──────────────────────────────────────────────────
//
// Used by the synthetic encoder and by tests that need hand-built
// buffers. They write exactly what the readers above expect.

/// Append a length-prefixed string.
///
/// The caller is responsible for keeping `value` under `u32::MAX` bytes;
/// the encoder crate checks this against its own limits first.
#[allow(clippy::cast_possible_truncation)]
pub fn encode_string(buf: &mut Vec<u8>, value: &str) {
    put_u32_le(buf, value.len() as u32);
    put_fixed(buf, value.as_bytes());
}

/// Append a Borsh `Option<T>`, using `encode` for the inner value.
pub fn encode_option<T, F>(buf: &mut Vec<u8>, value: Option<&T>, encode: F)
where
    T: ?Sized,
    F: FnOnce(&mut Vec<u8>, &T),
{
    match value {
        None => put_u8(buf, 0),
        Some(inner) => {
            put_u8(buf, 1);
            encode(buf, inner);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use dtix_wire::WireError;

    fn limits() -> DecodeLimits {
        DecodeLimits::default()
    }

    #[test]
    fn reads_string_and_advances_past_payload() {
        let mut buf = Vec::new();
        encode_string(&mut buf, "Summer Fest");
        buf.push(0xAA); // next field

        let mut cursor = Cursor::new(&buf);
        assert_eq!(read_string(&mut cursor, &limits()).unwrap(), "Summer Fest");
        assert_eq!(cursor.position(), 4 + 11);
    }

    #[test]
    fn reads_empty_string() {
        let buf = 0u32.to_le_bytes();
        let mut cursor = Cursor::new(&buf);
        assert_eq!(read_string(&mut cursor, &limits()).unwrap(), "");
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn string_at_exact_bound_is_accepted() {
        let text = "x".repeat(16);
        let mut buf = Vec::new();
        encode_string(&mut buf, &text);

        let mut cursor = Cursor::new(&buf);
        let limits = DecodeLimits::new(16, 100);
        assert_eq!(read_string(&mut cursor, &limits).unwrap(), text);
    }

    #[test]
    fn oversized_length_fails_before_payload() {
        // Declared length is over the bound *and* past the end of the
        // buffer; only the bound check may fire.
        let buf = 5000u32.to_le_bytes();
        let mut cursor = Cursor::new(&buf);

        let err = read_string(&mut cursor, &limits()).unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidLength {
                offset: 0,
                declared: 5000,
                bound: 1024
            }
        );
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn length_within_bound_but_past_buffer_underruns() {
        let mut buf = 10u32.to_le_bytes().to_vec();
        buf.extend_from_slice(b"abc");
        let mut cursor = Cursor::new(&buf);

        let err = read_string(&mut cursor, &limits()).unwrap_err();
        assert_eq!(
            err,
            TypeError::Wire(WireError::BufferUnderrun {
                offset: 4,
                needed: 10,
                available: 3
            })
        );
    }

    #[test]
    fn malformed_utf8_fails() {
        let mut buf = 2u32.to_le_bytes().to_vec();
        buf.extend_from_slice(&[0xC3, 0x28]);
        let mut cursor = Cursor::new(&buf);

        let err = read_string(&mut cursor, &limits()).unwrap_err();
        assert_eq!(err, TypeError::TextDecode { offset: 0, length: 2 });
        assert_eq!(err.kind(), ErrorKind::TextDecodeError);
    }

    #[test]
    fn truncated_length_prefix_underruns() {
        let buf = [0x01, 0x00];
        let mut cursor = Cursor::new(&buf);
        assert_eq!(
            read_string(&mut cursor, &limits()).unwrap_err().kind(),
            ErrorKind::BufferUnderrun
        );
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn option_absent_consumes_one_byte() {
        let buf = [0x00, 0xFF, 0xFF];
        let mut cursor = Cursor::new(&buf);

        let value = read_option(&mut cursor, |c| read_string(c, &limits())).unwrap();
        assert_eq!(value, None);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn option_present_delegates_to_inner() {
        let mut buf = Vec::new();
        encode_option(&mut buf, Some("QmSeatMap"), encode_string);
        let mut cursor = Cursor::new(&buf);

        let value = read_option(&mut cursor, |c| read_string(c, &limits())).unwrap();
        assert_eq!(value.as_deref(), Some("QmSeatMap"));
        assert_eq!(cursor.position(), 1 + 4 + 9);
    }

    #[test]
    fn option_rejects_unknown_tag() {
        let buf = [0x00, 0x02, 0x00, 0x00, 0x00, 0x00];
        let mut cursor = Cursor::new(&buf);
        cursor.skip(1).unwrap();

        let err = read_option(&mut cursor, |c| read_string(c, &limits())).unwrap_err();
        assert_eq!(err, TypeError::InvalidOptionTag { offset: 1, tag: 2 });
    }

    #[test]
    fn encode_option_none_is_single_zero() {
        let mut buf = Vec::new();
        encode_option::<str, _>(&mut buf, None, encode_string);
        assert_eq!(buf, [0x00]);
    }
}
