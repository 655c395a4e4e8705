/// Default nesting limit.
///
/// Bounds how deeply groups, prefix operators and `^` chains may nest,
/// which is how deep the parser itself recurses.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Default limit on the height of the expression tree.
///
/// A flat chain such as `1 + 1 + ... + 1` nests nothing but still yields a
/// tree one level taller per operator, and evaluating, printing and dropping
/// a tree recurse once per level.
pub const DEFAULT_MAX_HEIGHT: usize = 2048;

/// Limits applied to a single pipeline run.
///
/// A `Config` carries no state between runs; the same configuration can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum nesting depth accepted by the parser. Must be at least `1`
    /// for any expression to parse.
    pub max_depth:  usize,
    /// Maximum height of the parsed tree, counting the literal leaves. Must
    /// be at least `1` for any expression to parse.
    pub max_height: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_depth:  DEFAULT_MAX_DEPTH,
               max_height: DEFAULT_MAX_HEIGHT, }
    }
}

impl Config {
    /// Returns a copy of this configuration with a different nesting limit.
    ///
    /// # Example
    /// ```
    /// use arithmo::config::Config;
    ///
    /// let config = Config::default().with_max_depth(8);
    /// assert_eq!(config.max_depth, 8);
    /// ```
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns a copy of this configuration with a different tree height
    /// limit.
    #[must_use]
    pub const fn with_max_height(mut self, max_height: usize) -> Self {
        self.max_height = max_height;
        self
    }
}
