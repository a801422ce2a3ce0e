use std::fmt;

use dtix_wire::WireError;

/// Errors raised by the variable-length readers (strings, options,
/// vectors).
///
/// These sit one level above [`WireError`]: the wire layer only knows a
/// read ran out of bytes, while a `TypeError` knows a length prefix looked
/// wrong, a tag was not a valid option tag, and so on. Every variant is
/// fatal to a decode run.
///
/// ```text
/// ┌─────────────────────────────────────────────────────────┐
/// │ TypeError (this crate)                                  │
/// │   ├── InvalidLength     string length over its bound    │
/// │   ├── TextDecode        payload is not UTF-8            │
/// │   ├── InvalidOptionTag  option tag other than 0 / 1     │
/// │   ├── ImplausibleCount  vector count over its bound     │
/// │   ├── VectorElement     an element failed (wraps cause) │
/// │   └── Wire              buffer underrun                 │
/// └─────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
  /// A string's declared length exceeds the configured bound.
  ///
  /// The payload is never read: an absurd length is itself the sign that
  /// the cursor has drifted. `offset` points at the length prefix.
  #[error("declared string length {declared} at offset {offset} exceeds bound {bound}")]
  InvalidLength { offset: usize, declared: u32, bound: u32 },

  /// A string payload was not valid UTF-8. `offset` points at the
  /// length prefix, `length` is the payload length.
  #[error("invalid UTF-8 in {length}-byte string at offset {offset}")]
  TextDecode { offset: usize, length: u32 },

  /// An `Option` tag byte other than `0x00` or `0x01`.
  #[error("invalid option tag {tag:#04X} at offset {offset}, expected 0x00 or 0x01")]
  InvalidOptionTag { offset: usize, tag: u8 },

  /// A vector's element count exceeds the configured bound. No elements
  /// were read.
  #[error("implausible vector count {declared} at offset {offset}, bound is {bound}")]
  ImplausibleCount { offset: usize, declared: u32, bound: u32 },

  /// One element of a vector failed; the whole vector is abandoned.
  #[error("element {index} of vector at offset {vector_offset}: {source}")]
  VectorElement {
    vector_offset: usize,
    index: u32,
    source: Box<TypeError>,
  },

  #[error(transparent)]
  Wire(#[from] WireError),
}

impl TypeError {
  /// The innermost error, with any vector-element wrapping removed.
  #[must_use]
  pub fn root(&self) -> &TypeError {
    match self {
      Self::VectorElement { source, .. } => source.root(),
      other => other,
    }
  }

  /// Which entry of the error taxonomy this is.
  #[must_use]
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::InvalidLength { .. } => ErrorKind::InvalidLength,
      Self::TextDecode { .. } => ErrorKind::TextDecodeError,
      Self::InvalidOptionTag { .. } => ErrorKind::InvalidOptionTag,
      Self::ImplausibleCount { .. } => ErrorKind::ImplausibleCount,
      Self::Wire(WireError::BufferUnderrun { .. }) => ErrorKind::BufferUnderrun,
      Self::VectorElement { source, .. } => source.kind(),
    }
  }

  /// Offset of the bytes that triggered the innermost error.
  #[must_use]
  pub fn offset(&self) -> usize {
    match self {
      Self::InvalidLength { offset, .. }
      | Self::TextDecode { offset, .. }
      | Self::InvalidOptionTag { offset, .. }
      | Self::ImplausibleCount { offset, .. } => *offset,
      Self::Wire(wire) => wire.offset(),
      Self::VectorElement { source, .. } => source.offset(),
    }
  }
}

/// Flat taxonomy of fatal decode failures, independent of nesting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  BufferUnderrun,
  InvalidLength,
  TextDecodeError,
  InvalidOptionTag,
  ImplausibleCount,
}

impl fmt::Display for ErrorKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::BufferUnderrun => "BufferUnderrun",
      Self::InvalidLength => "InvalidLength",
      Self::TextDecodeError => "TextDecodeError",
      Self::InvalidOptionTag => "InvalidOptionTag",
      Self::ImplausibleCount => "ImplausibleCount",
    })
  }
}
