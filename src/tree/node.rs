//! Scanned tree nodes and file classification

use std::path::{Path, PathBuf};

use super::filter::is_hidden_name;

/// Rule deciding which files are modules and which file turns a directory
/// into a package. Defaults to Python (`*.py`, `__init__.py`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    pub module_extension: String,
    pub initializer_name: String,
    /// Label used in annotations, e.g. "Python" in `[Python Package]`.
    pub language: String,
}

impl Classifier {
    pub fn python() -> Self {
        Self {
            module_extension: "py".to_string(),
            initializer_name: "__init__.py".to_string(),
            language: "Python".to_string(),
        }
    }

    pub fn is_module(&self, name: &str) -> bool {
        Path::new(name)
            .extension()
            .is_some_and(|ext| ext == self.module_extension.as_str())
    }

    pub fn is_initializer(&self, name: &str) -> bool {
        name == self.initializer_name
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::python()
    }
}

/// One filesystem entry after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub name: String,
    pub path: PathBuf,
    pub is_module: bool,
    pub is_initializer: bool,
    /// Set when a direct child is the initializer file. Never derived from
    /// grandchildren.
    pub is_package: bool,
    pub is_hidden: bool,
    pub children: Vec<FileNode>,
}

impl FileNode {
    /// A directory whose descent stopped: depth limit, exclusion or hidden.
    pub fn stub(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let name = name.into();
        Self {
            is_hidden: is_hidden_name(&name),
            name,
            path: path.into(),
            is_module: false,
            is_initializer: false,
            is_package: false,
            children: Vec::new(),
        }
    }

    /// A classified file.
    pub fn file(name: impl Into<String>, path: impl Into<PathBuf>, classifier: &Classifier) -> Self {
        let name = name.into();
        Self {
            is_module: classifier.is_module(&name),
            is_initializer: classifier.is_initializer(&name),
            is_hidden: is_hidden_name(&name),
            name,
            path: path.into(),
            is_package: false,
            children: Vec::new(),
        }
    }

    /// A directory with already scanned children.
    ///
    /// Children are sorted and package status is derived from them, so the
    /// caller only passes accepted entries.
    pub fn dir(name: impl Into<String>, path: impl Into<PathBuf>, mut children: Vec<FileNode>) -> Self {
        sort_children(&mut children);
        let is_package = children.iter().any(|c| c.is_initializer);
        let mut node = Self::stub(name, path);
        node.is_package = is_package;
        node.children = children;
        node
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Nodes with children first, then by name. The sort is stable so equal
/// entries keep their listing order.
pub fn sort_children(children: &mut [FileNode]) {
    children.sort_by(|a, b| {
        b.has_children()
            .cmp(&a.has_children())
            .then_with(|| a.name.cmp(&b.name))
    });
}
