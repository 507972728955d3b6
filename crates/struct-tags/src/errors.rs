//! Error types for reading raw struct tags.

use thiserror::Error;

/// Malformed syntax found while scanning a raw struct tag with
/// [`StructTag::entries`](crate::StructTag::entries).
///
/// Offsets are zero-based byte positions into the raw tag text.
///
/// # Examples
/// ```
/// use struct_tags::{StructTag, StructTagError};
///
/// let err = StructTag::new(r#"json "id""#).entries().unwrap_err();
/// assert_eq!(err, StructTagError::MissingColon { offset: 4 });
/// assert_eq!(err.to_string(), "expected `:` after tag key at byte 4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StructTagError {
    /// A pair starts with a character that cannot begin a key.
    #[error("expected tag key at byte {offset}")]
    MissingKey {
        /// Position of the offending character.
        offset: usize,
    },
    /// The key is not followed by a colon.
    #[error("expected `:` after tag key at byte {offset}")]
    MissingColon {
        /// Position where the colon was expected.
        offset: usize,
    },
    /// The colon is not followed by an opening quote.
    #[error("expected `\"` after `:` at byte {offset}")]
    MissingOpeningQuote {
        /// Position where the quote was expected.
        offset: usize,
    },
    /// The quoted value runs to the end of the input.
    #[error("unterminated tag value starting at byte {offset}")]
    UnterminatedValue {
        /// Position of the opening quote.
        offset: usize,
    },
    /// A backslash escape is unknown or incomplete.
    #[error("invalid escape sequence at byte {offset}")]
    InvalidEscape {
        /// Position of the backslash.
        offset: usize,
    },
    /// A quoted value contains a literal line break.
    #[error("line break inside tag value at byte {offset}")]
    UnexpectedNewline {
        /// Position of the line break.
        offset: usize,
    },
    /// Byte escapes produced text that is not valid UTF-8.
    #[error("tag value starting at byte {offset} is not valid UTF-8")]
    InvalidUtf8 {
        /// Position of the opening quote.
        offset: usize,
    },
}
