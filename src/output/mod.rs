//! Document rendering
//!
//! This module turns scanned trees into text or markdown documents:
//! - Plain text with `+`/`-` markers, box-drawing or ASCII connectors
//! - Markdown, as a nested list (simple style) or a fenced tree
//!
//! # Module Structure
//!
//! - `config` - Render settings, tree styles and dialects
//! - `utils` - Node kinds, annotations and connector glyphs
//! - `tree` - Tree body formatter with the per-node render filter
//! - `markdown` - Markdown list items and code fences
//! - `document` - Header, timestamp and summary around the body

mod config;
mod document;
mod markdown;
mod tree;
mod utils;

pub use config::{Dialect, GenerationSettings, TreeStyle};
pub use document::{DocumentRenderer, render};
pub use tree::TreeFormatter;
pub use utils::{Glyphs, NodeKind, annotation_suffix};
