//! Scanner - builds the classified tree in memory

use std::path::Path;

use tracing::{debug, warn};

use super::config::ScanFilter;
use super::filter::{ExcludeMatcher, is_hidden_name};
use super::node::{Classifier, FileNode};
use super::source::{DirSource, LocalFs};

/// Depth-first directory scanner.
///
/// Exclusion and hidden rules are applied the same way to a scan root and to
/// any child directory. The difference is only in the result: a filtered root
/// becomes a leaf stub, a filtered child is left out of its parent.
#[derive(Debug, Clone)]
pub struct Scanner<S = LocalFs> {
    filter: ScanFilter,
    matcher: ExcludeMatcher,
    classifier: Classifier,
    source: S,
}

impl Scanner<LocalFs> {
    pub fn new(filter: ScanFilter) -> Self {
        Self::with_source(filter, LocalFs)
    }
}

impl<S: DirSource> Scanner<S> {
    pub fn with_source(filter: ScanFilter, source: S) -> Self {
        Self {
            matcher: ExcludeMatcher::new(&filter.exclude_patterns),
            filter,
            classifier: Classifier::default(),
            source,
        }
    }

    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn filter(&self) -> &ScanFilter {
        &self.filter
    }

    /// Scan every root, returning one node per root in the given order.
    pub fn scan<P: AsRef<Path>>(&self, roots: &[P]) -> Vec<FileNode> {
        roots.iter().map(|r| self.scan_root(r.as_ref())).collect()
    }

    /// Scan a single root directory.
    pub fn scan_root(&self, root: &Path) -> FileNode {
        let name = root_name(root);
        match self.scan_dir(&name, root, 0) {
            Some(node) => node,
            None => {
                warn!(root = %root.display(), "scan root is not readable");
                FileNode::stub(name, root)
            }
        }
    }

    fn at_max_depth(&self, depth: usize) -> bool {
        self.filter.max_depth.is_some_and(|max| depth >= max)
    }

    fn is_filtered_out(&self, name: &str) -> bool {
        self.matcher.is_excluded(name) || (!self.filter.include_hidden && is_hidden_name(name))
    }

    /// Returns `None` when the directory cannot be listed.
    fn scan_dir(&self, name: &str, path: &Path, depth: usize) -> Option<FileNode> {
        if self.at_max_depth(depth) || self.is_filtered_out(name) {
            return Some(FileNode::stub(name, path));
        }

        let entries = match self.source.read_dir(path) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "skipping unreadable directory");
                return None;
            }
        };

        let mut children = Vec::with_capacity(entries.len());
        for entry in entries {
            if self.is_filtered_out(&entry.name) {
                continue;
            }

            if entry.is_dir {
                // Following directory links can loop forever
                if entry.is_symlink {
                    debug!(path = %entry.path.display(), "skipping symlinked directory");
                    continue;
                }
                if let Some(child) = self.scan_dir(&entry.name, &entry.path, depth + 1) {
                    children.push(child);
                }
            } else {
                children.push(FileNode::file(entry.name, entry.path, &self.classifier));
            }
        }

        Some(FileNode::dir(name, path, children))
    }
}

/// Base name of a root, falling back to the full path for `/` and `.` for
/// an empty path.
fn root_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None if path.as_os_str().is_empty() => ".".to_string(),
        None => path.to_string_lossy().to_string(),
    }
}
