//! Settings file support
//!
//! Settings live in a `dirdoc.toml` file, usually at the project root. Every
//! key is optional; missing keys take the defaults below.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::output::{Dialect, GenerationSettings, TreeStyle};
use crate::tree::ScanFilter;

/// Name of the settings file looked up in the first scan root.
pub const SETTINGS_FILE_NAME: &str = "dirdoc.toml";

const DEFAULT_OUTPUT_FILE_NAME: &str = "directory-structure.md";
const DEFAULT_EXCLUDE_PATTERNS: &str = "__pycache__, *.pyc, .git, .idea, venv";

/// Persisted generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Regenerate the document whenever the project changes.
    pub auto_update: bool,
    /// Output directory or full output file path. Empty means project root.
    pub output_path: String,
    pub output_file_name: String,
    pub include_hidden: bool,
    pub python_files_only: bool,
    pub include_timestamp: bool,
    pub include_file_count: bool,
    pub include_empty_dirs: bool,
    /// Comma separated exclude patterns.
    pub exclude_patterns: String,
    /// Negative means unlimited.
    pub max_depth: i64,
    pub tree_style: TreeStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_update: false,
            output_path: String::new(),
            output_file_name: DEFAULT_OUTPUT_FILE_NAME.to_string(),
            include_hidden: false,
            python_files_only: true,
            include_timestamp: true,
            include_file_count: true,
            include_empty_dirs: true,
            exclude_patterns: DEFAULT_EXCLUDE_PATTERNS.to_string(),
            max_depth: -1,
            tree_style: TreeStyle::Simple,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&content, path)
    }

    /// Parse settings from TOML text. `origin` is only used in errors.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load `dirdoc.toml` from `dir` if it exists.
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(SETTINGS_FILE_NAME);
        if path.is_file() {
            Self::load(&path).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn exclude_pattern_list(&self) -> Vec<String> {
        parse_patterns(&self.exclude_patterns)
    }

    pub fn max_depth(&self) -> Option<usize> {
        usize::try_from(self.max_depth).ok()
    }

    pub fn scan_filter(&self) -> ScanFilter {
        ScanFilter {
            include_hidden: self.include_hidden,
            exclude_patterns: self.exclude_pattern_list(),
            max_depth: self.max_depth(),
        }
    }

    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            include_hidden: self.include_hidden,
            exclude_patterns: self.exclude_pattern_list(),
            max_depth: self.max_depth(),
            include_module_files_only: self.python_files_only,
            include_timestamp: self.include_timestamp,
            include_file_count: self.include_file_count,
            include_empty_dirs: self.include_empty_dirs,
            tree_style: self.tree_style,
        }
    }

    /// Where the document is written for a project rooted at `project_root`.
    ///
    /// `output_path` may name a directory or the output file itself. A
    /// relative `output_path` is taken from the project root.
    pub fn output_file(&self, project_root: &Path) -> PathBuf {
        if self.output_path.is_empty() {
            return project_root.join(&self.output_file_name);
        }
        let output_path = project_root.join(&self.output_path);
        if self.output_path.ends_with(&self.output_file_name) {
            output_path
        } else {
            output_path.join(&self.output_file_name)
        }
    }

    /// Markdown for `.md` output files, text otherwise.
    pub fn dialect(&self) -> Dialect {
        Dialect::from_path(Path::new(&self.output_file_name))
    }
}

/// Split a comma separated pattern list, trimming entries and dropping
/// empty ones.
pub fn parse_patterns(patterns: &str) -> Vec<String> {
    patterns
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
