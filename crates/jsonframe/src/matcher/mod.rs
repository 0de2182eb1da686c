//! Structural matching of JSON documents.
//!
//! This is the framing layer beneath a stream transport: given the bytes
//! accumulated so far, decide whether they hold one or more syntactically
//! valid concatenated JSON values, where the first complete value ends, and
//! whether the tail may simply be a value still arriving. No value tree is
//! built and nothing is allocated; the matchers walk the buffer once.
//!
//! The recursive descent lives here: [`match_value`] dispatches on the
//! first non-whitespace byte to the string, literal, number or container
//! matchers, and the container matchers call back into it for their
//! elements and member values. All state is transient per invocation: a
//! [`Cursor`], the open-scope counters and a truncation flag.
//!
//! Buffer exhaustion at any structural point is not an error — the next
//! read may complete the document. Whether it is *accepted* is decided once,
//! at the end of [`match_document_with`], by the `incomplete` flag. A byte
//! that breaks the grammar is a hard error in both modes.

mod literal;
mod numbers;
mod raw;
mod string;


pub use raw::{raw_array_span, raw_object_span};
pub use string::{locate_string, validate_string};

use crate::{cursor::Cursor, error::MatchError, options::MatchOptions};

/// Transient per-invocation matcher state: counters of currently-open
/// object and array scopes plus whether any leaf value ran out of buffer
/// mid-token.
#[derive(Debug, Default)]
pub(crate) struct MatchState {
    open_objects: usize,
    open_arrays: usize,
    truncated: bool,
    max_depth: usize,
}

impl MatchState {
    fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    fn balanced(&self) -> bool {
        self.open_objects == 0 && self.open_arrays == 0
    }
}

/// Matches a buffer of concatenated JSON values with default options.
///
/// Returns the offset of the last byte of the first complete top-level
/// value, or `None` when no value completed within the buffer (the buffer
/// may be whitespace, or one value still arriving).
///
/// With `incomplete = true` a buffer that is a truncated prefix of a valid
/// document is accepted; the transport keeps reading until a boundary
/// appears. With `incomplete = false` the buffer must hold nothing but
/// whole values and trailing whitespace.
///
/// # Errors
///
/// Hard syntax and string content errors fail in both modes; see
/// [`MatchError`]. An empty buffer is always an error. In complete mode,
/// running out of data mid-value is [`MatchError::UnexpectedEnd`] and
/// unclosed containers are [`MatchError::Unbalanced`].
///
/// # Examples
///
/// ```
/// use jsonframe::match_document;
///
/// // Two concatenated messages: the first ends at the first '}'.
/// assert_eq!(match_document(b"{\"a\":1}{\"b\"", true), Ok(Some(6)));
/// // A bare prefix: valid, but no boundary yet.
/// assert_eq!(match_document(b"{\"a\":", true), Ok(None));
/// // Garbage is an error regardless of mode.
/// assert!(match_document(b"{]", true).is_err());
/// ```
pub fn match_document(buf: &[u8], incomplete: bool) -> Result<Option<usize>, MatchError> {
    match_document_with(buf, incomplete, &MatchOptions::default())
}

/// [`match_document`] with explicit [`MatchOptions`].
///
/// # Errors
///
/// As [`match_document`].
pub fn match_document_with(
    buf: &[u8],
    incomplete: bool,
    options: &MatchOptions,
) -> Result<Option<usize>, MatchError> {
    if buf.is_empty() {
        return Err(MatchError::EmptyInput);
    }

    let mut state = MatchState::new(options.max_depth);
    let mut cursor = Cursor::new(buf);
    let mut first_value_end = None;

    loop {
        cursor.skip_whitespace();
        if cursor.at_end() {
            break;
        }
        cursor = match_value(cursor, &mut state, options.max_depth)?;
        if first_value_end.is_none() {
            first_value_end = Some(cursor.pos() - 1);
        }
    }

    if !incomplete {
        if state.truncated {
            return Err(MatchError::UnexpectedEnd);
        }
        if !state.balanced() {
            return Err(MatchError::Unbalanced);
        }
    }

    // The recorded boundary is only meaningful if that value actually
    // completed: when it coincides with the final parse position and the
    // match is unbalanced or cut short, the first value is still arriving.
    if let Some(end) = first_value_end {
        if (!state.balanced() || state.truncated) && end + 1 == cursor.pos() {
            first_value_end = None;
        }
    }

    Ok(first_value_end)
}

/// Matches one value at the cursor, after skipping leading whitespace.
///
/// Dispatches on the first content byte. A cursor that exhausts the buffer
/// while skipping whitespace is returned unchanged past the whitespace;
/// container matchers treat that as "element not yet arrived".
fn match_value<'a>(
    mut cursor: Cursor<'a>,
    state: &mut MatchState,
    depth: usize,
) -> Result<Cursor<'a>, MatchError> {
    cursor.skip_whitespace();
    match cursor.peek() {
        Some(b'{') => match_object(cursor, state, depth),
        Some(b'[') => match_array(cursor, state, depth),
        Some(b'"') => string::match_string_token(cursor, state),
        Some(b'n' | b't' | b'f') => literal::match_literal(cursor, state),
        Some(b'-' | b'0'..=b'9') => numbers::match_number(cursor, state),
        Some(byte) => Err(MatchError::InvalidValueStart {
            offset: cursor.pos(),
            byte,
        }),
        None => Ok(cursor),
    }
}

/// Matches an object. The cursor must point at `{`.
///
/// Alternates key / `:` / value / separator, recursing through
/// [`match_value`] for member values. Exhausting the buffer at any point
/// between tokens stops the walk with the object still counted open;
/// whether that is acceptable is the document matcher's decision.
fn match_object<'a>(
    mut cursor: Cursor<'a>,
    state: &mut MatchState,
    depth: usize,
) -> Result<Cursor<'a>, MatchError> {
    if depth == 0 {
        return Err(MatchError::DepthLimit {
            offset: cursor.pos(),
            max_depth: state.max_depth,
        });
    }
    debug_assert_eq!(cursor.peek(), Some(b'{'));
    cursor.bump();
    state.open_objects += 1;

    cursor.skip_whitespace();
    if cursor.peek() == Some(b'}') {
        cursor.bump();
        state.open_objects -= 1;
        return Ok(cursor);
    }

    loop {
        cursor.skip_whitespace();
        match cursor.peek() {
            None => return Ok(cursor),
            Some(b'"') => cursor = string::match_string_token(cursor, state)?,
            Some(byte) => {
                return Err(MatchError::ExpectedKey {
                    offset: cursor.pos(),
                    byte,
                });
            }
        }

        cursor.skip_whitespace();
        match cursor.peek() {
            None => return Ok(cursor),
            Some(b':') => cursor.bump(),
            Some(byte) => {
                return Err(MatchError::ExpectedColon {
                    offset: cursor.pos(),
                    byte,
                });
            }
        }

        cursor = match_value(cursor, state, depth - 1)?;

        cursor.skip_whitespace();
        match cursor.peek() {
            None => return Ok(cursor),
            Some(b',') => cursor.bump(),
            Some(b'}') => {
                cursor.bump();
                state.open_objects -= 1;
                return Ok(cursor);
            }
            Some(byte) => {
                return Err(MatchError::ExpectedSeparator {
                    offset: cursor.pos(),
                    byte,
                });
            }
        }
    }
}

/// Matches an array. The cursor must point at `[`. Symmetric with
/// [`match_object`], minus the key and `:` steps.
fn match_array<'a>(
    mut cursor: Cursor<'a>,
    state: &mut MatchState,
    depth: usize,
) -> Result<Cursor<'a>, MatchError> {
    if depth == 0 {
        return Err(MatchError::DepthLimit {
            offset: cursor.pos(),
            max_depth: state.max_depth,
        });
    }
    debug_assert_eq!(cursor.peek(), Some(b'['));
    cursor.bump();
    state.open_arrays += 1;

    cursor.skip_whitespace();
    if cursor.peek() == Some(b']') {
        cursor.bump();
        state.open_arrays -= 1;
        return Ok(cursor);
    }

    loop {
        cursor = match_value(cursor, state, depth - 1)?;

        cursor.skip_whitespace();
        match cursor.peek() {
            None => return Ok(cursor),
            Some(b',') => cursor.bump(),
            Some(b']') => {
                cursor.bump();
                state.open_arrays -= 1;
                return Ok(cursor);
            }
            Some(byte) => {
                return Err(MatchError::ExpectedSeparator {
                    offset: cursor.pos(),
                    byte,
                });
            }
        }
    }
}
