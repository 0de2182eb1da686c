//! Stream accumulation and message extraction.
//!
//! [`FrameBuffer`] is the glue between a byte transport and the matcher: the
//! transport pushes whatever it read, then drains complete messages. The
//! buffer re-scans its accumulated bytes on every extraction rather than
//! keeping parser state between calls; that keeps the matcher trivially
//! restartable at the cost of O(n²) scanning if a peer dribbles one enormous
//! document byte by byte. Callers facing untrusted peers should set a buffer
//! bound, which also bounds per-call matching time.

use alloc::vec::Vec;

use log::{debug, trace};

use crate::{
    error::FramingError,
    matcher::match_document_with,
    options::MatchOptions,
};

/// Accumulates stream bytes and splits off complete JSON messages.
///
/// # Examples
///
/// ```
/// use jsonframe::FrameBuffer;
///
/// let mut frames = FrameBuffer::new();
/// frames.push(b"{\"id\":1}{\"id\"")?;
///
/// let message = frames.next_message()?;
/// assert_eq!(message.as_deref(), Some(&b"{\"id\":1}"[..]));
/// // The second message is still arriving.
/// assert_eq!(frames.next_message()?, None);
///
/// frames.push(b":2}")?;
/// assert_eq!(frames.next_message()?.as_deref(), Some(&b"{\"id\":2}"[..]));
/// # Ok::<(), jsonframe::FramingError>(())
/// ```
#[derive(Debug, Default)]
pub struct FrameBuffer {
    buf: Vec<u8>,
    max_buffer: Option<usize>,
    options: MatchOptions,
}

impl FrameBuffer {
    /// Creates an unbounded frame buffer with default [`MatchOptions`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a frame buffer that refuses to grow beyond `limit` bytes.
    ///
    /// A peer that sends more than `limit` bytes without completing a
    /// message gets [`FramingError::BufferLimit`] from [`push`](Self::push).
    #[must_use]
    pub fn with_max_buffer(limit: usize) -> Self {
        Self {
            max_buffer: Some(limit),
            ..Self::default()
        }
    }

    /// Replaces the matcher options used for extraction.
    #[must_use]
    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Appends received bytes to the accumulation buffer.
    ///
    /// # Errors
    ///
    /// [`FramingError::BufferLimit`] when a configured bound would be
    /// exceeded; the buffer is left unchanged.
    pub fn push(&mut self, bytes: &[u8]) -> Result<(), FramingError> {
        if let Some(limit) = self.max_buffer {
            if self.buf.len().saturating_add(bytes.len()) > limit {
                return Err(FramingError::BufferLimit { limit });
            }
        }
        self.buf.extend_from_slice(bytes);
        trace!(
            "buffered {} bytes, {} pending",
            bytes.len(),
            self.buf.len()
        );
        Ok(())
    }

    /// Extracts the next complete message, if one has fully arrived.
    ///
    /// The returned bytes run from the start of the buffer through the last
    /// byte of the first complete value, including any leading whitespace;
    /// the remainder stays buffered for subsequent calls.
    ///
    /// # Errors
    ///
    /// Any [`MatchError`](crate::MatchError) from the matcher: the
    /// accumulated bytes can never become valid JSON, so the caller should
    /// treat the peer as protocol-violating and drop the connection. The
    /// buffer keeps its contents so the offending bytes remain available
    /// for diagnostics.
    pub fn next_message(&mut self) -> Result<Option<Vec<u8>>, FramingError> {
        if self.buf.is_empty() {
            return Ok(None);
        }
        match match_document_with(&self.buf, true, &self.options)? {
            Some(end) => {
                let message: Vec<u8> = self.buf.drain(..=end).collect();
                debug!(
                    "framed {}-byte message, {} bytes retained",
                    message.len(),
                    self.buf.len()
                );
                Ok(Some(message))
            }
            None => Ok(None),
        }
    }

    /// Number of bytes currently buffered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the buffer holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Discards all buffered bytes.
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use test_log::test;

    use super::*;
    use crate::error::{FramingError, MatchError};

    #[test]
    fn drains_messages_in_arrival_order() {
        let mut frames = FrameBuffer::new();
        frames.push(b"{\"a\":1}{\"b\":2} {\"c\"").unwrap();

        assert_eq!(
            frames.next_message().unwrap().as_deref(),
            Some(&b"{\"a\":1}"[..])
        );
        assert_eq!(
            frames.next_message().unwrap().as_deref(),
            Some(&b"{\"b\":2}"[..])
        );
        // "{\"c\"" is an incomplete third message.
        assert_eq!(frames.next_message().unwrap(), None);
        assert_eq!(frames.len(), 5);
    }

    #[test]
    fn message_carries_its_leading_whitespace() {
        let mut frames = FrameBuffer::new();
        frames.push(b"\r\n{\"a\":1}").unwrap();
        assert_eq!(
            frames.next_message().unwrap().as_deref(),
            Some(&b"\r\n{\"a\":1}"[..])
        );
        assert!(frames.is_empty());
    }

    #[test]
    fn split_pushes_reassemble() {
        let document = b"{\"seq\":[1,2,3],\"done\":true}";
        for split in 1..document.len() {
            let mut frames = FrameBuffer::new();
            frames.push(&document[..split]).unwrap();
            assert_eq!(frames.next_message().unwrap(), None, "split {split}");
            frames.push(&document[split..]).unwrap();
            assert_eq!(
                frames.next_message().unwrap().as_deref(),
                Some(&document[..]),
                "split {split}"
            );
        }
    }

    #[test]
    fn protocol_violation_surfaces_and_preserves_buffer() {
        let mut frames = FrameBuffer::new();
        frames.push(b"{\"a\" 1}").unwrap();
        assert_eq!(
            frames.next_message(),
            Err(FramingError::Match(MatchError::ExpectedColon {
                offset: 5,
                byte: b'1'
            }))
        );
        assert_eq!(frames.len(), 7);
    }

    #[test]
    fn buffer_limit_rejects_push() {
        let mut frames = FrameBuffer::with_max_buffer(4);
        frames.push(b"{\"a").unwrap();
        assert_eq!(
            frames.push(b"\":1}"),
            Err(FramingError::BufferLimit { limit: 4 })
        );
        // The rejected bytes were not appended.
        assert_eq!(frames.len(), 3);
        frames.clear();
        assert!(frames.is_empty());
    }

    #[test]
    fn empty_buffer_is_not_an_error() {
        let mut frames = FrameBuffer::new();
        assert_eq!(frames.next_message().unwrap(), None);
    }

    #[test]
    fn non_object_messages_frame_too() {
        let mut frames = FrameBuffer::new();
        frames.push(b"[1,2][3").unwrap();
        assert_eq!(frames.next_message().unwrap(), Some(vec![b'[', b'1', b',', b'2', b']']));
        assert_eq!(frames.next_message().unwrap(), None);
    }
}
