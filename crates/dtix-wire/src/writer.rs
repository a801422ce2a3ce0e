//! Little-endian writers mirroring the [`Cursor`](crate::Cursor) reads.
//!
//! The decoder never needs these. They exist so fixtures and the
//! synthetic encoder lay bytes out exactly the way the reader expects.

pub fn put_u8(buf: &mut Vec<u8>, value: u8) {
    buf.push(value);
}

pub fn put_bool(buf: &mut Vec<u8>, value: bool) {
    buf.push(u8::from(value));
}

pub fn put_u32_le(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

pub fn put_u64_le(buf: &mut Vec<u8>, value: u64) {
    buf.extend_from_slice(&value.to_le_bytes());
}

pub fn put_i64_le(buf: &mut Vec<u8>, value: i64) {
    buf.extend_from_slice(&value.to_le_bytes());
}

pub fn put_fixed(buf: &mut Vec<u8>, bytes: &[u8]) {
    buf.extend_from_slice(bytes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cursor;

    #[test]
    fn writers_match_reader_layout() {
        let mut buf = Vec::new();
        put_u8(&mut buf, 9);
        put_bool(&mut buf, true);
        put_u32_le(&mut buf, 70_000);
        put_u64_le(&mut buf, u64::MAX);
        put_i64_le(&mut buf, i64::MIN);
        put_fixed(&mut buf, &[0xEE; 3]);

        let mut cursor = Cursor::new(&buf);
        let mut diagnostics = Vec::new();
        assert_eq!(cursor.read_u8().unwrap(), 9);
        assert!(cursor.read_bool("flag", &mut diagnostics).unwrap());
        assert_eq!(cursor.read_u32_le().unwrap(), 70_000);
        assert_eq!(cursor.read_u64_le().unwrap(), u64::MAX);
        assert_eq!(cursor.read_i64_le().unwrap(), i64::MIN);
        assert_eq!(cursor.read_fixed(3).unwrap(), &[0xEE; 3]);
        assert!(cursor.is_empty());
    }
}
