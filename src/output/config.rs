//! Output configuration types

use std::path::Path;

use serde::Deserialize;

use crate::tree::ScanFilter;

/// Connector and indentation convention for the tree body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeStyle {
    /// `+`/`-` markers with four-space indentation.
    #[default]
    Simple,
    /// Unicode box characters (`├──`, `└──`, `│`).
    BoxDrawing,
    /// ASCII connectors (`+---`, `\---`, `|`).
    AsciiExtended,
}

/// Output format of the whole document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dialect {
    #[default]
    Text,
    Markdown,
}

impl Dialect {
    /// `.md` files get markdown, everything else plain text.
    pub fn from_path(path: &Path) -> Self {
        if path.extension().is_some_and(|ext| ext == "md") {
            Dialect::Markdown
        } else {
            Dialect::Text
        }
    }
}

/// Settings for one render.
///
/// The filter fields repeat those of [`ScanFilter`] because a tree may come
/// from a scan made with different settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSettings {
    pub include_hidden: bool,
    pub exclude_patterns: Vec<String>,
    /// Deepest rendered level. `None` and `Some(0)` both render every level.
    pub max_depth: Option<usize>,
    /// Only show modules, packages and nodes with children.
    pub include_module_files_only: bool,
    pub include_timestamp: bool,
    pub include_file_count: bool,
    pub include_empty_dirs: bool,
    pub tree_style: TreeStyle,
}

impl GenerationSettings {
    /// The scan filter matching these settings.
    pub fn scan_filter(&self) -> ScanFilter {
        ScanFilter {
            include_hidden: self.include_hidden,
            exclude_patterns: self.exclude_patterns.clone(),
            max_depth: self.max_depth,
        }
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            include_hidden: false,
            exclude_patterns: Vec::new(),
            max_depth: None,
            include_module_files_only: false,
            include_timestamp: true,
            include_file_count: true,
            include_empty_dirs: true,
            tree_style: TreeStyle::Simple,
        }
    }
}
