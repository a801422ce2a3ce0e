use crate::diagnostic::Diagnostic;
use crate::error::WireError;

/// Bounds-checked, forward-only reader over an account's raw bytes.
///
/// A `Cursor` is created for a single decode run and dropped with it. It
/// borrows the buffer immutably and only ever moves forward: every read
/// first checks that enough bytes remain and fails *before* touching the
/// position if they don't, so after an error [`position`](Self::position)
/// still points at the start of the read that failed.
///
/// All multi-byte integers are little-endian, matching the Borsh layout
/// the on-chain program writes.
///
/// ```text
///   buf:  [ consumed ........ | remaining ............ ]
///                             ^ pos
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at offset 0.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of bytes consumed so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes left between the cursor and the end of the buffer.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// `true` once every byte has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Take the next `n` bytes.
    ///
    /// # Errors
    ///
    /// [`WireError::BufferUnderrun`] if fewer than `n` bytes remain. The
    /// cursor does not move in that case.
    pub fn read_fixed(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        let available = self.remaining();
        if n > available {
            return Err(WireError::BufferUnderrun {
                offset: self.pos,
                needed: n,
                available,
            });
        }

        let bytes = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Take the next `N` bytes as an owned array.
    ///
    /// # Errors
    ///
    /// [`WireError::BufferUnderrun`] if fewer than `N` bytes remain.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], WireError> {
        let bytes = self.read_fixed(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Advance past `n` bytes without capturing them.
    ///
    /// Used for fields the caller does not surface (discriminator,
    /// timestamps, some counters).
    ///
    /// # Errors
    ///
    /// [`WireError::BufferUnderrun`] if fewer than `n` bytes remain.
    pub fn skip(&mut self, n: usize) -> Result<(), WireError> {
        self.read_fixed(n).map(|_| ())
    }

    /// # Errors
    ///
    /// [`WireError::BufferUnderrun`] at end of input.
    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        let [b] = self.read_array::<1>()?;
        Ok(b)
    }

    /// # Errors
    ///
    /// [`WireError::BufferUnderrun`] if fewer than 4 bytes remain.
    pub fn read_u32_le(&mut self) -> Result<u32, WireError> {
        self.read_array::<4>().map(u32::from_le_bytes)
    }

    /// # Errors
    ///
    /// [`WireError::BufferUnderrun`] if fewer than 8 bytes remain.
    pub fn read_u64_le(&mut self) -> Result<u64, WireError> {
        self.read_array::<8>().map(u64::from_le_bytes)
    }

    /// # Errors
    ///
    /// [`WireError::BufferUnderrun`] if fewer than 8 bytes remain.
    pub fn read_i64_le(&mut self) -> Result<i64, WireError> {
        self.read_array::<8>().map(i64::from_le_bytes)
    }

    /// Read a one-byte boolean.
    ///
    /// `0x00` is `false` and `0x01` is `true`. Any other byte is still read
    /// as `true`, but a [`Diagnostic::SuspiciousTag`] naming `field` is
    /// pushed onto `diagnostics`. A stray flag byte does not change how
    /// many bytes follow it, so this does not abort the run.
    ///
    /// # Errors
    ///
    /// [`WireError::BufferUnderrun`] at end of input.
    pub fn read_bool(
        &mut self,
        field: &'static str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<bool, WireError> {
        let offset = self.pos;
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            value => {
                diagnostics.push(Diagnostic::SuspiciousTag {
                    field,
                    offset,
                    value,
                });
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_integers() {
        let mut buf = Vec::new();
        buf.push(0xAB);
        buf.extend_from_slice(&0x0102_0304u32.to_le_bytes());
        buf.extend_from_slice(&(-42i64).to_le_bytes());

        let mut cursor = Cursor::new(&buf);
        assert_eq!(cursor.read_u8().unwrap(), 0xAB);
        assert_eq!(cursor.read_u32_le().unwrap(), 0x0102_0304);
        assert_eq!(cursor.read_i64_le().unwrap(), -42);
        assert_eq!(cursor.position(), buf.len());
        assert!(cursor.is_empty());
    }

    #[test]
    fn underrun_leaves_cursor_in_place() {
        let buf = [0u8; 6];
        let mut cursor = Cursor::new(&buf);
        cursor.skip(4).unwrap();

        let err = cursor.read_u32_le().unwrap_err();
        assert_eq!(
            err,
            WireError::BufferUnderrun {
                offset: 4,
                needed: 4,
                available: 2
            }
        );
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.remaining(), 2);
    }

    #[test]
    fn empty_buffer_underruns_at_zero() {
        let mut cursor = Cursor::new(&[]);
        assert!(matches!(
            cursor.skip(8),
            Err(WireError::BufferUnderrun {
                offset: 0,
                needed: 8,
                available: 0
            })
        ));
    }

    #[test]
    fn read_fixed_borrows_from_buffer() {
        let buf = *b"abcdef";
        let mut cursor = Cursor::new(&buf);
        cursor.skip(2).unwrap();
        assert_eq!(cursor.read_fixed(3).unwrap(), b"cde");
        assert_eq!(cursor.read_array::<1>().unwrap(), [b'f']);
    }

    #[test]
    fn zero_width_read_at_end_succeeds() {
        let buf = [1u8];
        let mut cursor = Cursor::new(&buf);
        cursor.skip(1).unwrap();
        assert_eq!(cursor.read_fixed(0).unwrap(), b"");
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn bool_strict_values() {
        let buf = [0x00, 0x01];
        let mut cursor = Cursor::new(&buf);
        let mut diagnostics = Vec::new();
        assert!(!cursor.read_bool("a", &mut diagnostics).unwrap());
        assert!(cursor.read_bool("b", &mut diagnostics).unwrap());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn bool_tolerates_drift_with_diagnostic() {
        let buf = [0x07, 0x00];
        let mut cursor = Cursor::new(&buf);
        let mut diagnostics = Vec::new();

        assert!(cursor.read_bool("is_fixed_price", &mut diagnostics).unwrap());
        assert_eq!(cursor.position(), 1);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::SuspiciousTag {
                field: "is_fixed_price",
                offset: 0,
                value: 0x07
            }]
        );
    }

    #[test]
    fn bool_at_end_of_input_fails() {
        let mut cursor = Cursor::new(&[]);
        let mut diagnostics = Vec::new();
        assert!(cursor.read_bool("flag", &mut diagnostics).is_err());
        assert!(diagnostics.is_empty());
    }
}
