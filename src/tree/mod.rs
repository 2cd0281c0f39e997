//! Directory scanning and classification
//!
//! The scanner walks one or more root directories through a [`DirSource`],
//! drops excluded and hidden entries, stops at the depth limit and returns a
//! sorted tree of [`FileNode`]s with module/package classification.

mod config;
mod filter;
mod node;
mod scanner;
mod source;

use std::path::Path;

pub use config::ScanFilter;
pub use filter::{ExcludeMatcher, is_hidden_name};
pub use node::{Classifier, FileNode, sort_children};
pub use scanner::Scanner;
pub use source::{DirEntryInfo, DirSource, LocalFs};

/// Scan each root on the local filesystem with the default classifier.
pub fn scan<P: AsRef<Path>>(roots: &[P], filter: &ScanFilter) -> Vec<FileNode> {
    Scanner::new(filter.clone()).scan(roots)
}
