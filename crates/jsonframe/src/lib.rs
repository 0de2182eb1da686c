//! Incremental structural matching and framing of JSON byte streams.
//!
//! A transport that carries concatenated JSON messages needs to answer one
//! question before it can hand anything to a parser: *do the bytes received
//! so far contain a complete value, and if so, where does it end?* This
//! crate answers that question without building a value tree and without
//! allocating: [`match_document`] walks a byte buffer once and reports the
//! offset of the last byte of the first complete top-level value, or that no
//! value has completed yet, or that the bytes can never become valid JSON.
//!
//! # Matching modes
//!
//! Every entry point takes an `incomplete` flag:
//!
//! - `incomplete = true` is the streaming mode. A buffer that ends in the
//!   middle of a value — an unclosed object, half a keyword, a string whose
//!   closing quote has not arrived — matches successfully with no boundary.
//!   The caller keeps reading and re-matches.
//! - `incomplete = false` demands that the buffer hold nothing but whole
//!   values and whitespace; truncation becomes
//!   [`MatchError::UnexpectedEnd`] and unclosed containers become
//!   [`MatchError::Unbalanced`].
//!
//! In both modes, a byte that breaks the JSON grammar is a hard error: no
//! amount of further input repairs `{]` or `[nUll]`.
//!
//! # Framing a stream
//!
//! [`FrameBuffer`] packages the accumulate-and-extract loop:
//!
//! ```
//! use jsonframe::FrameBuffer;
//!
//! let mut frames = FrameBuffer::new();
//! frames.push(b"{\"op\":\"ping\"}{\"op\":")?;
//!
//! assert_eq!(
//!     frames.next_message()?.as_deref(),
//!     Some(&b"{\"op\":\"ping\"}"[..])
//! );
//! assert_eq!(frames.next_message()?, None);
//! # Ok::<(), jsonframe::FramingError>(())
//! ```
//!
//! # Guarantees
//!
//! - Single pass, no allocation in the matcher itself; `alloc` is used only
//!   by [`FrameBuffer`].
//! - A reported boundary always denotes a genuinely complete value: slicing
//!   the buffer at the boundary yields a document that matches in complete
//!   mode.
//! - Recursion is bounded by [`MatchOptions::max_depth`], so adversarial
//!   nesting cannot exhaust the stack.
//!
//! The crate is `no_std` (with `alloc`) and has no unsafe code.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod cursor;
mod error;
mod framing;
mod matcher;
mod options;

pub use cursor::{is_whitespace, skip_whitespace};
pub use error::{FramingError, MatchError, StringError};
pub use framing::FrameBuffer;
pub use matcher::{
    locate_string, match_document, match_document_with, raw_array_span, raw_object_span,
    validate_string,
};
pub use options::MatchOptions;
