use std::fmt;
use std::str::FromStr;

use dtix_wire::{Cursor, WireError};

/// Width of an account address on the wire.
pub const PUBKEY_LEN: usize = 32;

/// A 32-byte account address (organizer, venue, ...).
///
/// Displayed and parsed as plain base58, the form wallets and explorers
/// show. Unlike checksummed identifiers there is no version byte or
/// checksum, so any 32 bytes are a valid `Pubkey`.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pubkey([u8; PUBKEY_LEN]);

impl Pubkey {
    #[must_use]
    pub const fn new(bytes: [u8; PUBKEY_LEN]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; PUBKEY_LEN] {
        &self.0
    }

    /// Read a raw 32-byte address at the cursor.
    ///
    /// # Errors
    ///
    /// [`WireError::BufferUnderrun`] if fewer than 32 bytes remain.
    pub fn read_from(cursor: &mut Cursor<'_>) -> Result<Self, WireError> {
        cursor.read_array::<PUBKEY_LEN>().map(Self)
    }

    pub fn write_to(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.0);
    }
}

impl From<[u8; PUBKEY_LEN]> for Pubkey {
    fn from(bytes: [u8; PUBKEY_LEN]) -> Self {
        Self(bytes)
    }
}

/// A string could not be parsed as a [`Pubkey`].
#[derive(Debug, thiserror::Error)]
pub enum ParsePubkeyError {
    #[error("invalid base58: {0}")]
    Base58(#[from] bs58::decode::Error),

    #[error("decoded address is {len} bytes, expected 32")]
    WrongLength { len: usize },
}

impl FromStr for Pubkey {
    type Err = ParsePubkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(s).into_vec()?;
        let arr: [u8; PUBKEY_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| ParsePubkeyError::WrongLength { len: bytes.len() })?;
        Ok(Self(arr))
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(&self.0).into_string())
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_key_is_system_program() {
        let key = Pubkey::default();
        assert_eq!(key.to_string(), "11111111111111111111111111111111");
    }

    #[test]
    fn base58_roundtrip() {
        let text = "4RmJgJPUEkBJu8etoeMSt6B62RGvMR7iviNQEyHThJHG";
        let key: Pubkey = text.parse().unwrap();
        assert_eq!(key.to_string(), text);
    }

    #[test]
    fn rejects_short_address() {
        let err = "3yZe7d".parse::<Pubkey>().unwrap_err();
        assert!(matches!(err, ParsePubkeyError::WrongLength { .. }));
    }

    #[test]
    fn rejects_non_base58() {
        // '0' and 'O' are not in the bitcoin alphabet.
        assert!(matches!(
            "0OOO".parse::<Pubkey>(),
            Err(ParsePubkeyError::Base58(_))
        ));
    }

    #[test]
    fn read_from_cursor() {
        let mut buf = vec![7u8; PUBKEY_LEN];
        buf.push(0xFF);
        let mut cursor = Cursor::new(&buf);

        let key = Pubkey::read_from(&mut cursor).unwrap();
        assert_eq!(key.as_bytes(), &[7u8; PUBKEY_LEN]);
        assert_eq!(cursor.position(), PUBKEY_LEN);
    }

    #[test]
    fn read_from_short_buffer_underruns() {
        let buf = [0u8; 31];
        let mut cursor = Cursor::new(&buf);
        assert!(matches!(
            Pubkey::read_from(&mut cursor),
            Err(WireError::BufferUnderrun {
                offset: 0,
                needed: 32,
                available: 31
            })
        ));
    }
}
