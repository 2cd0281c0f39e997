//! One scan-render cycle, optionally written to a file

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::output::{Dialect, DocumentRenderer, GenerationSettings};
use crate::tree::{Classifier, Scanner};

/// Scans a fixed set of roots and renders them with fixed settings.
///
/// Each call to [`Generator::generate`] rescans from scratch.
#[derive(Debug, Clone)]
pub struct Generator {
    roots: Vec<PathBuf>,
    scanner: Scanner,
    renderer: DocumentRenderer,
}

impl Generator {
    pub fn new(roots: Vec<PathBuf>, settings: GenerationSettings, dialect: Dialect) -> Self {
        Self {
            roots,
            scanner: Scanner::new(settings.scan_filter()),
            renderer: DocumentRenderer::new(settings, dialect),
        }
    }

    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.scanner = self.scanner.with_classifier(classifier.clone());
        self.renderer = self.renderer.with_classifier(classifier);
        self
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn settings(&self) -> &GenerationSettings {
        self.renderer.settings()
    }

    /// Scan all roots and render the document.
    pub fn generate(&self) -> String {
        let nodes = self.scanner.scan(&self.roots);
        debug!(roots = self.roots.len(), "scan complete");
        self.renderer.render(&nodes)
    }

    /// Generate and write the document, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let content = self.generate();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        fs::write(path, content).map_err(|e| Error::io(path, e))?;
        info!(path = %path.display(), "directory structure written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::TreeStyle;
    use crate::test_utils::TestDir;

    fn settings() -> GenerationSettings {
        GenerationSettings {
            include_timestamp: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_generate_scans_and_renders() {
        let dir = TestDir::new();
        dir.add_file("a/__init__.py", "");
        dir.add_file("a/b.py", "");
        dir.add_file("c.txt", "");

        let output = Generator::new(vec![dir.path().to_path_buf()], settings(), Dialect::Text).generate();
        let name = dir.name();
        assert!(output.contains(&format!("+ {name}\n")));
        assert!(output.contains("    + a [Python Package]\n"));
        assert!(output.contains("        - __init__.py [Module Initializer]\n"));
        assert!(output.contains("    - c.txt\n"));
        assert!(output.contains("Summary: 2 directories, 3 files"));
    }

    #[test]
    fn test_generate_picks_up_changes() {
        let dir = TestDir::new();
        dir.add_file("first.py", "");
        let generator = Generator::new(vec![dir.path().to_path_buf()], settings(), Dialect::Text);
        assert!(!generator.generate().contains("second.py"));

        dir.add_file("second.py", "");
        assert!(generator.generate().contains("second.py"));
    }

    #[test]
    fn test_write_to_creates_parent_dirs() {
        let dir = TestDir::new();
        dir.add_file("pkg/__init__.py", "");
        let target = dir.path().join("docs/nested/structure.md");

        let generator = Generator::new(
            vec![dir.path().join("pkg")],
            GenerationSettings {
                tree_style: TreeStyle::BoxDrawing,
                ..settings()
            },
            Dialect::Markdown,
        );
        generator.write_to(&target).unwrap();

        let written = fs::read_to_string(&target).unwrap();
        assert!(written.starts_with("# Project Directory Structure"));
        assert!(written.contains("```\npkg/\n└── __init__.py [Module Initializer]\n```\n"));
    }

    #[test]
    fn test_write_to_reports_io_errors() {
        let dir = TestDir::new();
        let blocker = dir.add_file("blocker", "");
        let generator = Generator::new(vec![dir.path().to_path_buf()], settings(), Dialect::Text);

        let err = generator.write_to(&blocker.join("out.txt")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
