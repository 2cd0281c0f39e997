//! dirdoc - document a project's directory structure as text or markdown
//!
//! Scan one or more roots into a classified tree, then render it as a
//! simple, box-drawing or ASCII tree in plain text or markdown.

pub mod config;
pub mod error;
pub mod generate;
pub mod logging;
pub mod output;
pub mod stats;
pub mod tree;
pub mod watch;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{SETTINGS_FILE_NAME, Settings};
pub use error::{Error, Result};
pub use generate::Generator;
pub use output::{Dialect, DocumentRenderer, GenerationSettings, TreeFormatter, TreeStyle, render};
pub use stats::TreeStats;
pub use tree::{Classifier, DirSource, FileNode, LocalFs, ScanFilter, Scanner, scan};
pub use watch::{Debouncer, WatchConfig, watch};
