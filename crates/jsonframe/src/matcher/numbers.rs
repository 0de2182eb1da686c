//! Locale-independent JSON number scanning.
//!
//! The scanner consumes the strict JSON grammar
//! `-? (0 | [1-9][0-9]*) ('.' [0-9]+)? ([eE] [+-]? [0-9]+)?` and never reads
//! past the span it is given. A number that runs out of buffer in a state
//! that more digits could repair (after `-`, `.`, `e` or a lone exponent
//! sign) is reported as [`Scan::Truncated`] rather than an error, so that a
//! streaming caller can keep buffering; the same dangling state followed by
//! an actual byte is a hard error, since no further input can fix it.

use super::MatchState;
use crate::{cursor::Cursor, error::MatchError};

/// Outcome of scanning a numeric span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Scan {
    /// A complete number of this many bytes.
    Complete(usize),
    /// The span ended mid-number; all bytes were consumed.
    Truncated(usize),
}

/// Scans one number at the start of `bytes`.
///
/// `Err(offset)` names the first byte that breaks the grammar. The caller
/// guarantees the first byte is `-` or a digit.
pub(super) fn scan_number(bytes: &[u8]) -> Result<Scan, usize> {
    let mut i = 0;

    if bytes[i] == b'-' {
        i += 1;
        if i == bytes.len() {
            return Ok(Scan::Truncated(i));
        }
    }

    match bytes[i] {
        b'0' => {
            i += 1;
            // "00", "01" etc. cannot extend into a valid number.
            if bytes.get(i).is_some_and(u8::is_ascii_digit) {
                return Err(i);
            }
        }
        b'1'..=b'9' => {
            i += 1;
            while bytes.get(i).is_some_and(u8::is_ascii_digit) {
                i += 1;
            }
        }
        _ => return Err(i),
    }

    if bytes.get(i) == Some(&b'.') {
        i += 1;
        if i == bytes.len() {
            return Ok(Scan::Truncated(i));
        }
        if !bytes[i].is_ascii_digit() {
            return Err(i);
        }
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        if i == bytes.len() {
            return Ok(Scan::Truncated(i));
        }
        if !bytes[i].is_ascii_digit() {
            return Err(i);
        }
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
    }

    Ok(Scan::Complete(i))
}

/// Structural number matcher. The cursor must point at `-` or a digit.
pub(super) fn match_number<'a>(
    mut cursor: Cursor<'a>,
    state: &mut MatchState,
) -> Result<Cursor<'a>, MatchError> {
    let offset = cursor.pos();
    match scan_number(cursor.tail()) {
        Ok(Scan::Complete(consumed)) => {
            cursor.advance(consumed);
            Ok(cursor)
        }
        Ok(Scan::Truncated(consumed)) => {
            debug_assert_eq!(consumed, cursor.remaining());
            cursor.advance(consumed);
            state.truncated = true;
            Ok(cursor)
        }
        Err(at) => Err(MatchError::InvalidNumber {
            offset: offset + at,
        }),
    }
}
