// SPDX-License-Identifier: Apache-2.0

/// Nesting limit used by [`ParserConfig::default`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Runtime parser configuration.
///
/// The parser recurses once per nested object or array, so `max_depth`
/// bounds its stack use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum number of open containers. A document nested deeper fails
    /// with `ParseErrorKind::MaxDepthReached`.
    pub max_depth: usize,
}

impl ParserConfig {
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}
