//! Length-prefixed string list codec.
//!
//! Reversibly serializes an ordered sequence of strings into one string and
//! back. Each entry is written as its decimal character count, a `#`
//! delimiter, then the raw content, so arbitrary content (including digits
//! and delimiter characters) round-trips losslessly.
//!
//! Lengths count characters (Unicode scalar values), not bytes, so multi-byte
//! content is handled uniformly by both directions.

mod error;

pub use error::FormatError;

/// Character separating a length prefix from its entry's content.
pub const DELIMITER: char = '#';

/// Encode an ordered sequence of strings into a single string.
///
/// Each entry contributes its decimal character count, the [`DELIMITER`], and
/// its raw content, in input order. An empty input produces an empty string;
/// an empty entry produces `"0#"`. Encoding cannot fail.
///
/// # Examples
///
/// ```
/// use neetkit::codec::encode;
///
/// assert_eq!(encode(&["ab", "cde", ""]), "2#ab3#cde0#");
/// assert_eq!(encode(&["a#b"]), "3#a#b");
/// assert_eq!(encode::<&str>(&[]), "");
/// ```
pub fn encode<S: AsRef<str>>(entries: &[S]) -> String {
    let mut encoded = String::new();
    for entry in entries {
        let entry = entry.as_ref();
        encoded.push_str(&entry.chars().count().to_string());
        encoded.push(DELIMITER);
        encoded.push_str(entry);
    }
    encoded
}

/// Decode a string produced by [`encode`] back into the original sequence.
///
/// Scans from the start: reads decimal digits up to the delimiter as the
/// entry length, then consumes exactly that many characters as content.
/// Content is read by count, never by delimiter search, so embedded
/// delimiters and digits are recovered intact.
///
/// Returns a [`FormatError`] when the input does not conform to the
/// length-prefix grammar; this never happens for output of [`encode`].
///
/// # Examples
///
/// ```
/// use neetkit::codec::decode;
///
/// assert_eq!(decode("2#ab3#cde0#").unwrap(), vec!["ab", "cde", ""]);
/// assert_eq!(decode("3#a#b").unwrap(), vec!["a#b"]);
/// assert!(decode("5#ab").is_err());
/// ```
pub fn decode(encoded: &str) -> Result<Vec<String>, FormatError> {
    let mut entries = Vec::new();
    let mut chars = encoded.chars().peekable();
    let mut offset = 0;

    while chars.peek().is_some() {
        let prefix_start = offset;
        let mut length: usize = 0;
        let mut digits = 0;

        loop {
            let c = chars
                .next()
                .ok_or(FormatError::MissingDelimiter { offset })?;
            offset += 1;
            if c == DELIMITER {
                break;
            }
            let digit = c
                .to_digit(10)
                .ok_or(FormatError::InvalidLength { offset: prefix_start })?;
            length = length
                .checked_mul(10)
                .and_then(|l| l.checked_add(digit as usize))
                .ok_or(FormatError::InvalidLength { offset: prefix_start })?;
            digits += 1;
        }
        if digits == 0 {
            return Err(FormatError::InvalidLength { offset: prefix_start });
        }

        let mut entry = String::new();
        for consumed in 0..length {
            let c = chars.next().ok_or(FormatError::Truncated {
                declared: length,
                available: consumed,
            })?;
            offset += 1;
            entry.push(c);
        }
        entries.push(entry);
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_empty_sequence() {
        assert_eq!(encode::<&str>(&[]), "");
    }

    #[test]
    fn test_encode_empty_entry() {
        assert_eq!(encode(&[""]), "0#");
    }

    #[test]
    fn test_encode_mixed_entries() {
        assert_eq!(encode(&["ab", "cde", ""]), "2#ab3#cde0#");
    }

    #[test]
    fn test_decode_empty_input() {
        assert_eq!(decode("").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_decode_empty_entry() {
        assert_eq!(decode("0#").unwrap(), vec![""]);
    }

    #[test]
    fn test_delimiter_in_content_read_by_count() {
        assert_eq!(encode(&["a#b"]), "3#a#b");
        assert_eq!(decode("3#a#b").unwrap(), vec!["a#b"]);
    }

    #[test]
    fn test_entries_resembling_prefixes() {
        let entries = ["3#ab", "0"];
        assert_eq!(decode(&encode(&entries)).unwrap(), entries);
    }

    #[test]
    fn test_non_digit_length_rejected() {
        assert_eq!(
            decode("x#abc"),
            Err(FormatError::InvalidLength { offset: 0 })
        );
    }

    #[test]
    fn test_truncated_content_rejected() {
        assert_eq!(
            decode("5#ab"),
            Err(FormatError::Truncated {
                declared: 5,
                available: 2
            })
        );
    }

    #[test]
    fn test_missing_delimiter_rejected() {
        assert_eq!(decode("12"), Err(FormatError::MissingDelimiter { offset: 2 }));
    }

    #[test]
    fn test_empty_length_prefix_rejected() {
        assert_eq!(decode("#ab"), Err(FormatError::InvalidLength { offset: 0 }));
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        let entries = ["héllo", "日本語"];
        let encoded = encode(&entries);
        assert_eq!(encoded, "5#héllo3#日本語");
        assert_eq!(decode(&encoded).unwrap(), entries);
    }

    #[test]
    fn test_error_offset_past_first_entry() {
        // Second prefix starts at character 3.
        assert_eq!(
            decode("1#ay#b"),
            Err(FormatError::InvalidLength { offset: 3 })
        );
    }
}
