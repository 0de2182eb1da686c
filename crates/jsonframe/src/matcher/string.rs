//! String content validation and location.
//!
//! Three entry points with distinct contracts:
//!
//! - [`validate_string`] checks a span's content: UTF-8, escapes, no raw
//!   control bytes or quotes. It never scans for boundaries.
//! - [`locate_string`] finds a complete quoted string at the head of a buffer
//!   (after leading whitespace) and validates it. It fails on an
//!   unterminated string; it is not a streaming matcher.
//! - [`match_string_token`] is the structural matcher used by the recursive
//!   descent: an unterminated string consumes the rest of the buffer and is
//!   tolerated as truncation, because the closing quote may simply not have
//!   arrived yet. Content is validated only once the terminator is seen.
//!
//! Whether a `"` terminates the string is decided by the parity of the run
//! of backslashes immediately before it; a single-byte lookback would
//! misread content ending in an escaped backslash.

use bstr::ByteSlice;

use super::MatchState;
use crate::{
    cursor::Cursor,
    error::{MatchError, StringError},
};

const BACKSLASH: u8 = b'\\';
const QUOTE: u8 = b'"';

/// Validates JSON string content.
///
/// With `quotes = true` the span must begin and end with `"` and only the
/// interior is checked; with `quotes = false` the span is the bare content
/// and must be at least one byte long (so `validate_string(b"", false)`
/// fails while the two-byte quoted empty string passes).
///
/// Rejected content: invalid UTF-8, raw control bytes below `0x20`, raw
/// unescaped quotes, a trailing lone backslash, unknown escapes, and `\u`
/// escapes whose following four bytes are not ASCII hex digits.
///
/// # Errors
///
/// Returns the first [`StringError`] encountered.
pub fn validate_string(bytes: &[u8], quotes: bool) -> Result<(), StringError> {
    if bytes.is_empty() {
        return Err(StringError::Empty);
    }
    if bytes.to_str().is_err() {
        return Err(StringError::InvalidUtf8);
    }

    let content = if quotes {
        if bytes.len() < 2 || bytes[0] != QUOTE || bytes[bytes.len() - 1] != QUOTE {
            return Err(StringError::MissingQuotes);
        }
        &bytes[1..bytes.len() - 1]
    } else {
        bytes
    };

    let mut i = 0;
    while i < content.len() {
        match content[i] {
            BACKSLASH => {
                let Some(&escape) = content.get(i + 1) else {
                    return Err(StringError::TruncatedEscape);
                };
                match escape {
                    b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => i += 2,
                    b'u' => {
                        let Some(hex) = content.get(i + 2..i + 6) else {
                            return Err(StringError::TruncatedEscape);
                        };
                        if !hex.iter().all(u8::is_ascii_hexdigit) {
                            return Err(StringError::InvalidUnicodeEscape);
                        }
                        i += 6;
                    }
                    other => return Err(StringError::InvalidEscape(other)),
                }
            }
            byte if byte < 0x20 => return Err(StringError::UnescapedControl(byte)),
            QUOTE => return Err(StringError::UnescapedQuote),
            _ => i += 1,
        }
    }
    Ok(())
}

/// Locates a complete quoted string at the head of `buf`, skipping leading
/// whitespace, and returns the interior span (quotes excluded).
///
/// The located content is validated with [`validate_string`]; an empty
/// string therefore does not locate (there is no interior content to hand
/// to a caller).
///
/// # Errors
///
/// Fails if the first non-whitespace byte is not `"`, if no unescaped
/// closing quote exists in the buffer, or if the content is invalid.
pub fn locate_string(buf: &[u8]) -> Result<core::ops::Range<usize>, MatchError> {
    let mut cursor = Cursor::new(buf);
    cursor.skip_whitespace();

    match cursor.peek() {
        Some(QUOTE) => cursor.bump(),
        _ => {
            return Err(MatchError::String {
                offset: cursor.pos(),
                source: StringError::MissingQuotes,
            });
        }
    }

    let open = cursor.pos() - 1;
    match scan_terminator(&mut cursor) {
        Some(close) => {
            let interior = open + 1..close;
            validate_string(&buf[interior.clone()], false).map_err(|source| {
                MatchError::String {
                    offset: interior.start,
                    source,
                }
            })?;
            Ok(interior)
        }
        None => Err(MatchError::String {
            offset: open,
            source: StringError::Unterminated,
        }),
    }
}

/// Structural string matcher for the recursive descent.
///
/// The cursor must point at the opening quote. A terminated string is
/// validated (quotes included) and the cursor lands one past the closing
/// quote. An unterminated string consumes the remainder of the buffer and
/// marks the match truncated; its content is only checked once the
/// terminator arrives on a later re-scan.
pub(super) fn match_string_token<'a>(
    mut cursor: Cursor<'a>,
    state: &mut MatchState,
) -> Result<Cursor<'a>, MatchError> {
    let open = cursor.pos();
    debug_assert_eq!(cursor.peek(), Some(QUOTE));
    cursor.bump();

    match scan_terminator(&mut cursor) {
        Some(close) => {
            validate_string(&cursor.buf()[open..=close], true).map_err(|source| {
                MatchError::String {
                    offset: open,
                    source,
                }
            })?;
            cursor.bump();
            Ok(cursor)
        }
        None => {
            state.truncated = true;
            Ok(cursor)
        }
    }
}

/// Scans forward for an unescaped closing quote, leaving the cursor on it,
/// and returns its offset. Consumes the whole tail when none exists.
fn scan_terminator(cursor: &mut Cursor<'_>) -> Option<usize> {
    let mut backslashes = 0usize;
    while let Some(byte) = cursor.peek() {
        match byte {
            BACKSLASH => backslashes += 1,
            QUOTE if backslashes % 2 == 0 => return Some(cursor.pos()),
            _ => backslashes = 0,
        }
        cursor.bump();
    }
    None
}
