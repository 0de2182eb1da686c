#![expect(missing_docs)]

mod common;

use jsonframe::{FrameBuffer, FramingError, MatchError, MatchOptions, StringError};
use test_log::test;

use crate::common::{chunks, expected_frames, stream};

#[test]
fn whole_stream_frames_into_three_messages() {
    let mut frames = FrameBuffer::new();
    frames.push(&stream()).unwrap();

    for expected in expected_frames() {
        assert_eq!(frames.next_message().unwrap(), Some(expected));
    }
    assert_eq!(frames.next_message().unwrap(), None);
    // The trailing CRLF never becomes a message.
    assert_eq!(frames.len(), 2);
}

#[test]
fn chunked_stream_frames_identically() {
    let mut frames = FrameBuffer::new();
    let mut collected = Vec::new();

    for chunk in chunks() {
        frames.push(chunk).unwrap();
        while let Some(message) = frames.next_message().unwrap() {
            collected.push(message);
        }
    }

    assert_eq!(collected, expected_frames());
}

#[test]
fn byte_by_byte_delivery_frames_identically() {
    let mut frames = FrameBuffer::new();
    let mut collected = Vec::new();

    for byte in stream() {
        frames.push(&[byte]).unwrap();
        while let Some(message) = frames.next_message().unwrap() {
            collected.push(message);
        }
    }

    assert_eq!(collected, expected_frames());
}

#[test]
fn every_frame_parses_downstream() {
    let mut frames = FrameBuffer::new();
    frames.push(&stream()).unwrap();

    while let Some(message) = frames.next_message().unwrap() {
        serde_json::from_slice::<serde_json::Value>(&message)
            .expect("framed message must be valid JSON");
    }
}

#[test]
fn custom_options_flow_through_to_extraction() {
    let mut frames = FrameBuffer::new().with_options(MatchOptions { max_depth: 1 });
    frames.push(br#"{"payload":{"nested":true}}"#).unwrap();

    assert_eq!(
        frames.next_message(),
        Err(FramingError::Match(MatchError::DepthLimit {
            offset: 11,
            max_depth: 1,
        }))
    );
}

#[test]
fn corrupt_stream_reports_the_match_error() {
    let mut frames = FrameBuffer::new();
    let stream = b"{\"ok\":true}\r\n{\"bad\" \"x\"}";
    frames.push(stream).unwrap();

    // Extraction scans the whole accumulated buffer, so the malformed tail
    // poisons the very first call even though a complete message leads it.
    assert_eq!(
        frames.next_message(),
        Err(FramingError::Match(MatchError::ExpectedColon {
            offset: 20,
            byte: b'"',
        }))
    );
    // Nothing was drained; the offending bytes stay available.
    assert_eq!(frames.len(), stream.len());
    assert!(matches!(
        frames.next_message(),
        Err(FramingError::Match(MatchError::ExpectedColon { .. }))
    ));
}

#[test]
fn oversized_message_hits_the_buffer_bound() {
    let mut frames = FrameBuffer::with_max_buffer(16);
    frames.push(b"{\"data\":\"0123").unwrap();
    assert_eq!(frames.next_message().unwrap(), None);
    assert_eq!(
        frames.push(b"456789abcdef"),
        Err(FramingError::BufferLimit { limit: 16 })
    );
}

#[test]
fn invalid_utf8_in_a_string_poisons_the_stream() {
    let mut frames = FrameBuffer::new();
    frames.push(b"{\"name\":\"a\xffb\"}").unwrap();

    assert_eq!(
        frames.next_message(),
        Err(FramingError::Match(MatchError::String {
            offset: 8,
            source: StringError::InvalidUtf8,
        }))
    );
}
