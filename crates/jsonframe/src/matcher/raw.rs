//! Naive bracket-pair extraction.
//!
//! These matchers find a closing bracket by depth-counting bytes of the same
//! bracket kind and nothing else. They are NOT string-aware: a `]` inside a
//! string literal terminates [`raw_array_span`] early, and an `[` inside one
//! inflates the depth. They exist for callers that want cheap raw substring
//! extraction from input they already trust — handing an unparsed array body
//! to another component, for example — and deliberately do none of the
//! validation the structural matcher does. When correctness against
//! arbitrary content matters, frame with [`match_document`] instead.
//!
//! [`match_document`]: crate::match_document

use core::ops::Range;

use crate::cursor::Cursor;

/// Finds the interior span of the first array in `buf`.
///
/// Skips leading whitespace, requires `[` as the next byte and returns the
/// span between the brackets (exclusive on both sides; empty for `[]`).
/// Returns `None` when no opening bracket is found or the bracket never
/// closes within the buffer. Bytes after the matching `]` are ignored.
#[must_use]
pub fn raw_array_span(buf: &[u8]) -> Option<Range<usize>> {
    raw_span(buf, b'[', b']')
}

/// Finds the interior span of the first object in `buf`.
///
/// Same contract as [`raw_array_span`], for `{` and `}`.
#[must_use]
pub fn raw_object_span(buf: &[u8]) -> Option<Range<usize>> {
    raw_span(buf, b'{', b'}')
}

fn raw_span(buf: &[u8], open: u8, close: u8) -> Option<Range<usize>> {
    let mut cursor = Cursor::new(buf);
    cursor.skip_whitespace();

    if cursor.peek() != Some(open) {
        return None;
    }
    cursor.bump();
    let start = cursor.pos();

    let mut depth = 0usize;
    while let Some(byte) = cursor.peek() {
        if byte == open {
            depth += 1;
        } else if byte == close {
            if depth == 0 {
                return Some(start..cursor.pos());
            }
            depth -= 1;
        }
        cursor.bump();
    }
    None
}
