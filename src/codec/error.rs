use thiserror::Error;

/// Error type for decoding failures.
///
/// Offsets and lengths are measured in characters (Unicode scalar values),
/// matching the unit the codec uses for length prefixes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Input ended while a length prefix was still being scanned.
    #[error("Decoding error: input ended before a delimiter at offset {offset}")]
    MissingDelimiter { offset: usize },

    /// The length field was empty, contained a non-digit, or was too large
    /// to represent.
    #[error("Decoding error: invalid length prefix at offset {offset}")]
    InvalidLength { offset: usize },

    /// The declared entry length exceeds the characters remaining.
    #[error("Decoding error: entry declares {declared} characters but only {available} remain")]
    Truncated { declared: usize, available: usize },
}
