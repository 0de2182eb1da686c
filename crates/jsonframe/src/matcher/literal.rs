//! The `null`, `true` and `false` keywords.

use super::MatchState;
use crate::{cursor::Cursor, error::MatchError};

/// Structural literal matcher. The cursor must point at `n`, `t` or `f`.
///
/// The comparison is clamped to the bytes available: a buffer ending in
/// `tru` matches as a truncated prefix and consumes to the end, so a
/// streaming caller can wait for the rest of the keyword. Any byte that
/// diverges from the expected spelling is a hard error.
pub(super) fn match_literal<'a>(
    mut cursor: Cursor<'a>,
    state: &mut MatchState,
) -> Result<Cursor<'a>, MatchError> {
    let offset = cursor.pos();
    let literal: &[u8] = match cursor.peek() {
        Some(b'n') => b"null",
        Some(b't') => b"true",
        _ => b"false",
    };

    let avail = cursor.remaining().min(literal.len());
    if cursor.tail()[..avail] != literal[..avail] {
        return Err(MatchError::InvalidLiteral { offset });
    }

    cursor.advance(avail);
    if avail < literal.len() {
        state.truncated = true;
    }
    Ok(cursor)
}
