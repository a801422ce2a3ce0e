/// Default upper bound for a string's declared length, in bytes.
pub const DEFAULT_MAX_STRING_LEN: u32 = 1024;

/// Default upper bound for a vector's declared element count.
pub const DEFAULT_MAX_VECTOR_LEN: u32 = 100;

/// Plausibility bounds applied to every length and count prefix.
///
/// A prefix above its bound is treated as evidence that the cursor has
/// drifted out of alignment, and the read fails before any payload is
/// touched. The bounds also cap how much a corrupt or hostile buffer can
/// make the decoder allocate.
///
/// ```text
/// ┌────────────────┬─────────┬──────────────────────────────────────┐
/// │ Field          │ Default │ Checked by                           │
/// ├────────────────┼─────────┼──────────────────────────────────────┤
/// │ max_string_len │ 1024    │ every length-prefixed string         │
/// │ max_vector_len │ 100     │ every count-prefixed vector          │
/// └────────────────┴─────────┴──────────────────────────────────────┘
/// ```
///
/// Both bounds are inclusive: a string of exactly `max_string_len` bytes
/// is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeLimits {
    pub max_string_len: u32,
    pub max_vector_len: u32,
}

impl DecodeLimits {
    #[must_use]
    pub fn new(max_string_len: u32, max_vector_len: u32) -> Self {
        Self {
            max_string_len,
            max_vector_len,
        }
    }
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_STRING_LEN, DEFAULT_MAX_VECTOR_LEN)
    }
}
