//! Tree body formatter
//!
//! Walks scanned nodes, applies the per-node render filter and writes one
//! line per visible node in the configured style. Visibility is decided
//! before a sibling list is drawn, so "last child" always refers to the last
//! visible child.

use crate::tree::{Classifier, ExcludeMatcher, FileNode, is_hidden_name};

use super::config::{Dialect, GenerationSettings, TreeStyle};
use super::markdown::simple_list_line;
use super::utils::annotation_suffix;

const SIMPLE_INDENT: &str = "    ";

/// Formatter for the tree part of a document.
pub struct TreeFormatter<'a> {
    settings: &'a GenerationSettings,
    classifier: &'a Classifier,
    dialect: Dialect,
    matcher: ExcludeMatcher,
}

impl<'a> TreeFormatter<'a> {
    pub fn new(settings: &'a GenerationSettings, classifier: &'a Classifier, dialect: Dialect) -> Self {
        Self {
            matcher: ExcludeMatcher::new(&settings.exclude_patterns),
            settings,
            classifier,
            dialect,
        }
    }

    /// Format every root and its visible descendants.
    pub fn format(&self, nodes: &[FileNode]) -> String {
        let mut output = String::new();
        let roots = self.visible(nodes, 0);
        let count = roots.len();
        let mut ancestors = Vec::new();
        for (i, root) in roots.into_iter().enumerate() {
            self.format_node(root, 0, i + 1 == count, &mut ancestors, &mut output);
        }
        output
    }

    /// Whether a node at `depth` survives the render filter.
    pub fn is_visible(&self, node: &FileNode, depth: usize) -> bool {
        let s = self.settings;

        if self.matcher.is_excluded(&node.name) {
            return false;
        }
        if !s.include_hidden && is_hidden_name(&node.name) {
            return false;
        }
        if s.include_module_files_only && !node.is_module && !node.is_package && !node.has_children() {
            return false;
        }
        // Looser by one than the scanner, which stops descending at max_depth
        if s.max_depth.is_some_and(|max| max > 0 && depth > max) {
            return false;
        }
        if !s.include_empty_dirs && !node.has_children() && !node.is_module {
            return false;
        }
        true
    }

    fn visible<'n>(&self, nodes: &'n [FileNode], depth: usize) -> Vec<&'n FileNode> {
        nodes.iter().filter(|n| self.is_visible(n, depth)).collect()
    }

    fn format_node(
        &self,
        node: &FileNode,
        depth: usize,
        is_last: bool,
        ancestors: &mut Vec<bool>,
        output: &mut String,
    ) {
        self.format_line(node, depth, is_last, ancestors, output);

        let children = self.visible(&node.children, depth + 1);
        if children.is_empty() {
            return;
        }

        // The root contributes no indent level
        if depth > 0 {
            ancestors.push(!is_last);
        }
        let count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            self.format_node(child, depth + 1, i + 1 == count, ancestors, output);
        }
        if depth > 0 {
            ancestors.pop();
        }
    }

    fn format_line(
        &self,
        node: &FileNode,
        depth: usize,
        is_last: bool,
        ancestors: &[bool],
        output: &mut String,
    ) {
        match self.settings.tree_style.glyphs() {
            None => {
                output.push_str(&SIMPLE_INDENT.repeat(depth));
                match self.dialect {
                    Dialect::Text => {
                        let marker = if node.has_children() || node.is_package {
                            "+ "
                        } else {
                            "- "
                        };
                        output.push_str(marker);
                        output.push_str(&node.name);
                        output.push_str(&annotation_suffix(node, self.classifier));
                    }
                    Dialect::Markdown => {
                        output.push_str(&simple_list_line(node, self.classifier));
                    }
                }
            }
            Some(_) if depth == 0 => {
                output.push_str(&node.name);
                // A filesystem root is already named "/"
                if !node.name.ends_with('/') {
                    output.push('/');
                }
            }
            Some(glyphs) => {
                output.push_str(&glyphs.prefix(ancestors, is_last));
                output.push_str(&node.name);
                output.push_str(&annotation_suffix(node, self.classifier));
            }
        }
        output.push('\n');
    }
}
