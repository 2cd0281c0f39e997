//! Markdown output formatting
//!
//! The simple style writes list items with emphasis and emoji markers. In
//! markdown every tree body, whatever its style, goes inside a fenced code
//! block.

use crate::tree::{Classifier, FileNode};

use super::utils::NodeKind;

const FENCE: &str = "```";

/// One list item for the simple style, without indentation or newline.
///
/// Packages and directories are bold, initializers italic and modules in a
/// code span. The annotation follows in italics.
pub fn simple_list_line(node: &FileNode, classifier: &Classifier) -> String {
    let kind = NodeKind::of(node);
    let mut line = String::from("- ");

    if let Some(emoji) = kind.emoji() {
        line.push_str(emoji);
        line.push(' ');
    }

    match kind {
        NodeKind::Package | NodeKind::Directory => {
            line.push_str("**");
            line.push_str(&node.name);
            line.push_str("**");
        }
        NodeKind::Initializer => {
            line.push('*');
            line.push_str(&node.name);
            line.push('*');
        }
        NodeKind::Module => {
            line.push('`');
            line.push_str(&node.name);
            line.push('`');
        }
        NodeKind::Plain => line.push_str(&node.name),
    }

    if let Some(label) = kind.label(classifier) {
        line.push_str(" *[");
        line.push_str(&label);
        line.push_str("]*");
    }

    line
}

/// Wrap a rendered tree body in a fenced code block.
pub fn fenced(body: &str) -> String {
    let mut output = String::with_capacity(body.len() + 2 * FENCE.len() + 2);
    output.push_str(FENCE);
    output.push('\n');
    output.push_str(body);
    if !body.is_empty() && !body.ends_with('\n') {
        output.push('\n');
    }
    output.push_str(FENCE);
    output.push('\n');
    output
}
