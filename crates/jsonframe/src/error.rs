//! Failure taxonomy of the matcher.
//!
//! Structural syntax errors and string content errors are hard failures in
//! both matching modes; running out of data is a hard failure only when the
//! caller declared the buffer complete. Matchers never report "incomplete"
//! through these types — a truncated buffer in incomplete mode is a
//! successful match with no boundary.

use thiserror::Error;

/// A hard matching failure. The buffer does not contain, and can never grow
/// into, a valid JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The buffer was empty. There is nothing to evaluate, in either mode.
    #[error("empty input")]
    EmptyInput,

    /// A value started with a byte that cannot begin any JSON value.
    #[error("invalid value start byte 0x{byte:02x} at offset {offset}")]
    InvalidValueStart {
        /// Offset of the offending byte.
        offset: usize,
        /// The offending byte.
        byte: u8,
    },

    /// An object member began with something other than a string key.
    #[error("expected object key at offset {offset}, found byte 0x{byte:02x}")]
    ExpectedKey {
        /// Offset of the offending byte.
        offset: usize,
        /// The offending byte.
        byte: u8,
    },

    /// The `:` separator between an object key and its value was missing.
    #[error("expected ':' at offset {offset}, found byte 0x{byte:02x}")]
    ExpectedColon {
        /// Offset of the offending byte.
        offset: usize,
        /// The offending byte.
        byte: u8,
    },

    /// After a member or element, the next byte was neither `,` nor the
    /// matching closing bracket.
    #[error("expected ',' or closing bracket at offset {offset}, found byte 0x{byte:02x}")]
    ExpectedSeparator {
        /// Offset of the offending byte.
        offset: usize,
        /// The offending byte.
        byte: u8,
    },

    /// A `null`, `true` or `false` keyword diverged from its spelling.
    #[error("invalid literal at offset {offset}")]
    InvalidLiteral {
        /// Offset of the keyword's first byte.
        offset: usize,
    },

    /// A number diverged from the JSON number grammar in a way no further
    /// input could repair.
    #[error("invalid number at offset {offset}")]
    InvalidNumber {
        /// Offset of the offending byte.
        offset: usize,
    },

    /// A string failed content validation.
    #[error("{source} at offset {offset}")]
    String {
        /// Offset of the string within the buffer.
        offset: usize,
        /// The underlying content error.
        source: StringError,
    },

    /// Objects and arrays were nested deeper than the configured bound.
    #[error("nesting deeper than the limit of {max_depth} at offset {offset}")]
    DepthLimit {
        /// Offset at which the bound was exceeded.
        offset: usize,
        /// The configured bound.
        max_depth: usize,
    },

    /// Complete mode only: open objects or arrays remained at the end of the
    /// buffer.
    #[error("unbalanced objects or arrays at end of input")]
    Unbalanced,

    /// Complete mode only: the buffer ended in the middle of a string, number
    /// or literal.
    #[error("unexpected end of input")]
    UnexpectedEnd,
}

/// A string content violation, reported by [`validate_string`] and wrapped
/// with an offset in [`MatchError::String`] by the matchers.
///
/// [`validate_string`]: crate::validate_string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StringError {
    /// The span was empty. An unquoted span must hold at least one byte.
    #[error("empty string content")]
    Empty,

    /// The span was not valid UTF-8.
    #[error("invalid utf-8 in string")]
    InvalidUtf8,

    /// `quotes` was requested but the span was not wrapped in `"` bytes.
    #[error("missing surrounding quotes")]
    MissingQuotes,

    /// A raw control byte (`< 0x20`) appeared without escaping.
    #[error("unescaped control byte 0x{0:02x}")]
    UnescapedControl(u8),

    /// A raw `"` appeared without escaping.
    #[error("unescaped quote")]
    UnescapedQuote,

    /// A backslash introduced an escape JSON does not define.
    #[error("invalid escape byte 0x{0:02x} after backslash")]
    InvalidEscape(u8),

    /// The span ended in the middle of an escape sequence.
    #[error("truncated escape sequence")]
    TruncatedEscape,

    /// A `\u` escape was not followed by four hex digits.
    #[error("invalid unicode escape")]
    InvalidUnicodeEscape,

    /// No unescaped closing quote was found.
    #[error("unterminated string")]
    Unterminated,
}

/// Failure of the stream framing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FramingError {
    /// The accumulated bytes are not, and can never become, valid JSON. The
    /// peer is protocol-violating and the connection should be dropped.
    #[error(transparent)]
    Match(#[from] MatchError),

    /// Accepting the pushed bytes would exceed the configured buffer bound.
    #[error("frame buffer limit of {limit} bytes exceeded")]
    BufferLimit {
        /// The configured bound in bytes.
        limit: usize,
    },
}
