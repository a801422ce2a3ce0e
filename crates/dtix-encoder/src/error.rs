/// Errors raised while building a synthetic event account.
///
/// The encoder refuses to produce bytes the decoder would reject under the
/// limits it was given, unless the caller switched the checks off with
/// [`EventEncoder::unchecked`](crate::EventEncoder::unchecked).
///
/// ```text
///   EncodeError
///   ├── StringTooLong       ← a string field is over max_string_len
///   ├── TooManyMappings     ← the mapping vector is over max_vector_len
///   └── NonCanonicalMapping ← a mapping would decode to a different value
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("`{field}` is {len} bytes, limit {limit}")]
    StringTooLong {
        field: &'static str,
        len: usize,
        limit: u32,
    },

    #[error("{count} ticket-area mappings, limit {limit}")]
    TooManyMappings { count: usize, limit: u32 },

    /// The mapping's wire string splits differently on the way back in, so
    /// the decoded record would not equal the one encoded.
    #[error("ticket-area mapping {index} ({value:?}) does not decode to itself")]
    NonCanonicalMapping { index: usize, value: String },
}
