//! Formats decode results into the text artifacts handed to the I/O layer.

pub mod index;
pub mod source;

pub use index::render_index;
pub use source::{format_source, INDENT_WIDTH, TARGET_WIDTH};

use crate::decode::Decoded;

/// Format blurb shipped alongside the rendered index. Pass-through text,
/// not produced by the pipeline.
pub const INDEX_HELP: &str = include_str!("../../docs/index-format.md");

/// The four text artifacts produced per decode run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Pretty-printed recovered source.
    pub pretty_source: String,
    /// Raw, unformatted module-table text.
    pub module_table: String,
    /// Rendered reverse alias index.
    pub index: String,
    /// Static description of the index format.
    pub index_help: &'static str,
}

/// Render all artifacts for one decode run.
pub fn render(decoded: &Decoded) -> Artifacts {
    Artifacts {
        pretty_source: format_source(&decoded.source),
        module_table: decoded.table.text.clone(),
        index: render_index(&decoded.index),
        index_help: INDEX_HELP,
    }
}
