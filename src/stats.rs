//! Directory and file counts for the document summary line

use crate::tree::FileNode;

/// Counts over a scanned tree.
///
/// A node with children counts as a directory, a childless node as a file.
/// Leaf stubs and empty directories therefore count as files, matching how
/// they render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub directories: usize,
    pub files: usize,
}

impl TreeStats {
    /// Count every node reachable from `nodes`, roots included.
    ///
    /// Render filters are not applied; the summary describes the scan.
    pub fn collect(nodes: &[FileNode]) -> Self {
        let mut collector = StatsCollector::default();
        for node in nodes {
            collector.record(node);
        }
        collector.finalize()
    }
}

/// Accumulates counts during a tree walk.
#[derive(Debug, Default)]
struct StatsCollector {
    directories: usize,
    files: usize,
}

impl StatsCollector {
    fn record(&mut self, node: &FileNode) {
        if node.has_children() {
            self.directories += 1;
            for child in &node.children {
                self.record(child);
            }
        } else {
            self.files += 1;
        }
    }

    fn finalize(self) -> TreeStats {
        TreeStats {
            directories: self.directories,
            files: self.files,
        }
    }
}
