//! Full document rendering: header, metadata lines and tree body

use chrono::{Local, NaiveDateTime};

use crate::stats::TreeStats;
use crate::tree::{Classifier, FileNode};

use super::config::{Dialect, GenerationSettings};
use super::markdown::fenced;
use super::tree::TreeFormatter;

const TITLE: &str = "Project Directory Structure";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders scanned trees into a text or markdown document.
#[derive(Debug, Clone)]
pub struct DocumentRenderer {
    settings: GenerationSettings,
    dialect: Dialect,
    classifier: Classifier,
    generated_at: Option<NaiveDateTime>,
}

impl DocumentRenderer {
    pub fn new(settings: GenerationSettings, dialect: Dialect) -> Self {
        Self {
            settings,
            dialect,
            classifier: Classifier::default(),
            generated_at: None,
        }
    }

    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Use a fixed timestamp instead of the wall clock.
    pub fn with_timestamp(mut self, generated_at: NaiveDateTime) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn render(&self, nodes: &[FileNode]) -> String {
        let mut output = String::new();

        match self.dialect {
            Dialect::Text => {
                output.push_str(TITLE);
                output.push('\n');
                output.push_str(&"=".repeat(TITLE.len()));
                output.push_str("\n\n");
            }
            Dialect::Markdown => {
                output.push_str("# ");
                output.push_str(TITLE);
                output.push_str("\n\n");
            }
        }

        let meta = self.metadata_lines(nodes);
        if !meta.is_empty() {
            // Markdown would otherwise merge the lines into one paragraph
            let separator = match self.dialect {
                Dialect::Text => "\n",
                Dialect::Markdown => "\n\n",
            };
            output.push_str(&meta.join(separator));
            output.push_str("\n\n");
        }

        let body = TreeFormatter::new(&self.settings, &self.classifier, self.dialect).format(nodes);
        match self.dialect {
            Dialect::Markdown => output.push_str(&fenced(&body)),
            Dialect::Text => output.push_str(&body),
        }

        output
    }

    fn metadata_lines(&self, nodes: &[FileNode]) -> Vec<String> {
        let mut lines = Vec::new();
        if self.settings.include_timestamp {
            let at = self
                .generated_at
                .unwrap_or_else(|| Local::now().naive_local());
            lines.push(format!("Generated: {}", at.format(TIMESTAMP_FORMAT)));
        }
        if self.settings.include_file_count {
            let stats = TreeStats::collect(nodes);
            lines.push(format!(
                "Summary: {} directories, {} files",
                stats.directories, stats.files
            ));
        }
        lines
    }
}

/// Render with the default classifier and the current time.
pub fn render(nodes: &[FileNode], settings: &GenerationSettings, dialect: Dialect) -> String {
    DocumentRenderer::new(settings.clone(), dialect).render(nodes)
}
