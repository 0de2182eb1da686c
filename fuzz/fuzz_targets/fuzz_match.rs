#![no_main]
use arbitrary::Arbitrary;
use jsonframe::{FrameBuffer, FramingError, MatchError, match_document};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    data: &'a [u8],
    split: usize,
}

fuzz_target!(|input: Input<'_>| {
    let Input { data, split } = input;

    // Neither mode may panic on arbitrary bytes.
    let streamed = match_document(data, true);
    let complete = match_document(data, false);

    // A reported boundary always frames a document that matches complete.
    if let Ok(Some(end)) = streamed {
        assert!(match_document(&data[..=end], false).is_ok());
    }

    // Complete acceptance is strictly stronger than streamed acceptance.
    if let Ok(boundary) = complete {
        assert_eq!(streamed, Ok(boundary));
    }

    // A full parser's acceptance implies structural acceptance. The one
    // check structural matching applies more eagerly is the recursion
    // bound, which the two libraries draw at slightly different depths.
    if serde_json::from_slice::<serde_json::Value>(data).is_ok() {
        match complete {
            Ok(Some(_)) | Err(MatchError::DepthLimit { .. }) => {}
            other => panic!("full parse accepted, structural match said {other:?}"),
        }
    }

    // Delivering the bytes in two pushes must agree with direct matching.
    if !data.is_empty() {
        let split = split % (data.len() + 1);
        let mut frames = FrameBuffer::new();
        frames.push(&data[..split]).unwrap();
        frames.push(&data[split..]).unwrap();
        match frames.next_message() {
            Ok(Some(message)) => {
                assert_eq!(streamed, Ok(Some(message.len() - 1)));
            }
            Ok(None) => assert_eq!(streamed, Ok(None)),
            Err(FramingError::Match(error)) => assert_eq!(streamed, Err(error)),
            Err(FramingError::BufferLimit { .. }) => unreachable!("buffer is unbounded"),
        }
    }
});
