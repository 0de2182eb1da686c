/// Configuration for the document matcher.
///
/// The matcher itself is stateless; options are read per invocation.
///
/// # Default
///
/// `max_depth` defaults to [`MatchOptions::DEFAULT_MAX_DEPTH`].
#[derive(Debug, Clone, Copy)]
pub struct MatchOptions {
    /// Maximum nesting depth of objects and arrays.
    ///
    /// The structural matchers are mutually recursive, so unbounded nesting
    /// would translate adversarial input directly into stack growth. Input
    /// nesting deeper than this bound fails with
    /// [`MatchError::DepthLimit`](crate::MatchError::DepthLimit) instead.
    ///
    /// # Default
    ///
    /// `128`
    pub max_depth: usize,
}

impl MatchOptions {
    /// Default nesting bound, shared with `serde_json`'s recursion limit so
    /// that framed messages remain parseable downstream.
    pub const DEFAULT_MAX_DEPTH: usize = 128;
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
