//! Byte cursor over a caller-owned buffer.
//!
//! Every matcher takes a [`Cursor`] by value and returns the advanced cursor
//! on success. Because `Cursor` is `Copy` and failures are reported through
//! `Err`, a failed matcher can never leave the caller with a half-advanced
//! position; the caller simply keeps the cursor it already had.

/// Returns `true` for exactly the four whitespace bytes of the JSON grammar:
/// space (`0x20`), horizontal tab (`0x09`), line feed (`0x0A`) and carriage
/// return (`0x0D`).
///
/// This is deliberately stricter than generic `is_ascii_whitespace`
/// predicates; vertical tab (`0x0B`) and form feed (`0x0C`) are not JSON
/// whitespace.
#[inline]
#[must_use]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, 0x20 | 0x09 | 0x0A | 0x0D)
}

/// Returns the offset of the first byte at or after `pos` that is not JSON
/// whitespace, clamped to `buf.len()`.
#[inline]
#[must_use]
pub fn skip_whitespace(buf: &[u8], pos: usize) -> usize {
    let mut cursor = Cursor { buf, pos: pos.min(buf.len()) };
    cursor.skip_whitespace();
    cursor.pos
}

/// Position plus remaining-length view into a borrowed byte buffer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current offset into the underlying buffer.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// The whole underlying buffer, independent of the current position.
    #[inline]
    pub(crate) fn buf(&self) -> &'a [u8] {
        self.buf
    }

    /// The unread remainder of the buffer.
    #[inline]
    pub(crate) fn tail(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub(crate) fn at_end(&self) -> bool {
        self.pos == self.buf.len()
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Advances past one byte. Saturates at the end of the buffer.
    #[inline]
    pub(crate) fn bump(&mut self) {
        if self.pos < self.buf.len() {
            self.pos += 1;
        }
    }

    /// Advances past `n` bytes, clamped to the end of the buffer.
    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.buf.len());
    }

    /// Advances past a maximal run of JSON whitespace.
    #[inline]
    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if !is_whitespace(b) {
                break;
            }
            self.pos += 1;
        }
    }
}
