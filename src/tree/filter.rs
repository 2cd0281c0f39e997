//! Name-based exclusion shared by the scanner and the renderer

use regex::Regex;

/// One compiled exclude pattern.
#[derive(Debug, Clone)]
enum Pattern {
    Exact(String),
    /// `None` when the translated expression failed to compile; such a
    /// pattern never matches.
    Wildcard(String, Option<Regex>),
}

impl Pattern {
    fn new(raw: &str) -> Self {
        if raw.contains('*') {
            let source = format!("^{}$", raw.replace('.', "\\.").replace('*', ".*"));
            Pattern::Wildcard(raw.to_string(), Regex::new(&source).ok())
        } else {
            Pattern::Exact(raw.to_string())
        }
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            Pattern::Exact(exact) => exact == name,
            Pattern::Wildcard(raw, regex) => {
                raw == name || regex.as_ref().is_some_and(|re| re.is_match(name))
            }
        }
    }
}

/// Matches entry names against the configured exclude patterns.
///
/// Patterns are compiled once so a scan or render does not rebuild a regex
/// per entry.
#[derive(Debug, Clone, Default)]
pub struct ExcludeMatcher {
    patterns: Vec<Pattern>,
}

impl ExcludeMatcher {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        Self {
            patterns: patterns.iter().map(|p| Pattern::new(p.as_ref())).collect(),
        }
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Entries whose name starts with a dot are hidden.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}
