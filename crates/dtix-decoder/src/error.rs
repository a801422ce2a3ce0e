use dtix_types::{ErrorKind, TypeError};

use crate::record::PartialEvent;

/// A decode run that stopped before the end of the field sequence.
///
/// Every fatal condition lands here. The error names the field being read,
/// where the cursor stood when the run gave up, and everything captured
/// before that field, so a caller can show how far the layout held.
///
/// ```text
///   DecodeError
///   ├── field     ← field the pipeline was reading
///   ├── position  ← cursor at abort (never past the buffer end)
///   ├── partial   ← fields 1..k-1, fully captured
///   └── source    ← TypeError, with its own offset
///         ├── InvalidLength / TextDecode / InvalidOptionTag
///         ├── ImplausibleCount / VectorElement
///         └── Wire(BufferUnderrun)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to decode `{field}` (cursor at {position}): {source}")]
pub struct DecodeError {
    pub field: &'static str,
    pub position: usize,
    pub partial: Box<PartialEvent>,
    #[source]
    pub source: TypeError,
}

impl DecodeError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }

    /// Offset of the offending bytes. For vector element failures this is
    /// the element's own offset, not the vector's.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.source.offset()
    }
}
