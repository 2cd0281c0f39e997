//! Test utilities for building directory fixtures.
//!
//! This module is only compiled for tests, benchmarks and the `test-utils`
//! feature.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::tree::{DirEntryInfo, DirSource};

/// A temporary project directory for testing.
///
/// The directory name never starts with a dot, so it is not treated as a
/// hidden scan root. It is removed when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = tempfile::Builder::new()
            .prefix("project-")
            .tempdir()
            .expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Name of the temporary directory, as the scanner reports it.
    pub fn name(&self) -> String {
        self.dir
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .expect("temp dir has a name")
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory `DirSource` for exercising the scanner without touching disk.
///
/// Entries are listed in insertion order. Directories marked unreadable
/// fail with `PermissionDenied`.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    dirs: HashSet<PathBuf>,
    entries: Vec<(PathBuf, DirEntryInfo)>,
    unreadable: HashSet<PathBuf>,
}

impl MemorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let mut source = Self::default();
        source.dirs.insert(root.into());
        source
    }

    pub fn dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.push(&path, true, false);
        self.dirs.insert(path);
        self
    }

    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.push(&path.into(), false, false);
        self
    }

    pub fn symlink_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.push(&path.into(), true, true);
        self
    }

    pub fn unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.insert(path.into());
        self
    }

    fn push(&mut self, path: &Path, is_dir: bool, is_symlink: bool) {
        let parent = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        self.entries.push((
            parent,
            DirEntryInfo {
                name,
                path: path.to_path_buf(),
                is_dir,
                is_symlink,
            },
        ));
    }
}

impl DirSource for MemorySource {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>> {
        if self.unreadable.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "unreadable"));
        }
        if !self.dirs.contains(path) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such directory"));
        }
        Ok(self
            .entries
            .iter()
            .filter(|(parent, _)| parent == path)
            .map(|(_, entry)| entry.clone())
            .collect())
    }
}
