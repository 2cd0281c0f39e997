//! Shared helpers for line rendering: node kinds, annotations and glyphs

use crate::tree::{Classifier, FileNode};

use super::config::TreeStyle;

/// How a node is presented, in annotation priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Package,
    Directory,
    Initializer,
    Module,
    Plain,
}

impl NodeKind {
    pub fn of(node: &FileNode) -> Self {
        if node.is_package {
            NodeKind::Package
        } else if node.has_children() {
            NodeKind::Directory
        } else if node.is_initializer {
            NodeKind::Initializer
        } else if node.is_module {
            NodeKind::Module
        } else {
            NodeKind::Plain
        }
    }

    /// Annotation text without brackets, e.g. `Python Package`.
    pub fn label(self, classifier: &Classifier) -> Option<String> {
        match self {
            NodeKind::Package => Some(format!("{} Package", classifier.language)),
            NodeKind::Initializer => Some("Module Initializer".to_string()),
            NodeKind::Module => Some(format!("{} Module", classifier.language)),
            NodeKind::Directory | NodeKind::Plain => None,
        }
    }

    /// Marker used in markdown lists.
    pub fn emoji(self) -> Option<&'static str> {
        match self {
            NodeKind::Package => Some("📦"),
            NodeKind::Directory => Some("📁"),
            NodeKind::Initializer => Some("🔧"),
            NodeKind::Module => Some("📄"),
            NodeKind::Plain => None,
        }
    }
}

/// Plain-text annotation suffix, including the leading space.
pub fn annotation_suffix(node: &FileNode, classifier: &Classifier) -> String {
    NodeKind::of(node)
        .label(classifier)
        .map(|label| format!(" [{}]", label))
        .unwrap_or_default()
}

/// Connector and indent tokens for the connector-based styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub branch: &'static str,
    pub last_branch: &'static str,
    pub pipe: &'static str,
    pub blank: &'static str,
}

const BOX_GLYPHS: Glyphs = Glyphs {
    branch: "├── ",
    last_branch: "└── ",
    pipe: "│   ",
    blank: "    ",
};

const ASCII_GLYPHS: Glyphs = Glyphs {
    branch: "+--- ",
    last_branch: "\\--- ",
    pipe: "|    ",
    blank: "     ",
};

impl TreeStyle {
    /// `None` for the simple style, which has no connectors.
    pub fn glyphs(self) -> Option<Glyphs> {
        match self {
            TreeStyle::Simple => None,
            TreeStyle::BoxDrawing => Some(BOX_GLYPHS),
            TreeStyle::AsciiExtended => Some(ASCII_GLYPHS),
        }
    }
}

impl Glyphs {
    /// Indent for a node whose ancestors (below the root) still have pending
    /// siblings where the flag is `true`, followed by its own connector.
    pub fn prefix(&self, ancestors: &[bool], is_last: bool) -> String {
        let mut prefix = String::new();
        for &continues in ancestors {
            prefix.push_str(if continues { self.pipe } else { self.blank });
        }
        prefix.push_str(if is_last { self.last_branch } else { self.branch });
        prefix
    }
}
