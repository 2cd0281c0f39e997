//! Read-only filesystem access used by the scanner

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A directory entry as seen by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub is_symlink: bool,
}

/// Lists the direct children of a directory.
///
/// Entries are returned in the source's own order; the scanner sorts them.
pub trait DirSource {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>>;
}

/// `DirSource` backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl DirSource for LocalFs {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            // A single bad entry does not spoil the listing
            let Ok(entry) = entry else { continue };
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            let entry_path = entry.path();
            let is_symlink = file_type.is_symlink();
            let is_dir = if is_symlink {
                entry_path.is_dir()
            } else {
                file_type.is_dir()
            };
            entries.push(DirEntryInfo {
                name: entry.file_name().to_string_lossy().to_string(),
                path: entry_path,
                is_dir,
                is_symlink,
            });
        }
        Ok(entries)
    }
}

impl<S: DirSource + ?Sized> DirSource for &S {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>> {
        (**self).read_dir(path)
    }
}
