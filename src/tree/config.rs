//! Configuration types for directory scanning

/// Filters applied while scanning a directory tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanFilter {
    pub include_hidden: bool,
    /// Entry names to leave out. `*` is a wildcard, anything else must match exactly.
    pub exclude_patterns: Vec<String>,
    /// Deepest level to descend into, counted from the scan root at 0.
    /// `None` means unlimited.
    pub max_depth: Option<usize>,
}

impl ScanFilter {
    pub fn with_exclude_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }
}
