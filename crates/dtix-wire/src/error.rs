/// Errors raised by the primitive reader.
///
/// The cursor layer only knows about byte counts, so the only thing that
/// can go wrong here is running out of input. Every higher layer wraps
/// this type rather than re-describing underruns itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// A fixed-width read needed more bytes than remain in the buffer.
    ///
    /// `offset` is the cursor position at the time of the read (the cursor
    /// is left there), `needed` is the requested width and `available` is
    /// `buffer.len() - offset`.
    #[error("buffer underrun at offset {offset}: needed {needed} bytes, {available} available")]
    BufferUnderrun {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

impl WireError {
    /// Offset at which the failing read started.
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            Self::BufferUnderrun { offset, .. } => *offset,
        }
    }
}
