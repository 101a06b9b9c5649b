//! The extraction pipeline: raw bundle text in, typed module graph out.
//!
//! Stages run strictly left to right, each owning its output until handing
//! it to the next. The pipeline is synchronous, performs no I/O, and fails
//! fast with a typed [`DecodeError`](crate::error::DecodeError); partial
//! results are never exposed.

pub mod boundary;
pub mod literal;
pub mod modules;
pub mod quote;
pub mod reassemble;

pub use boundary::{locate_module_table, ModuleTableSpan, MIN_SPAN};
pub use literal::{LiteralError, Value};
pub use modules::{decode_modules, ModuleEntry, ModuleGraph, ModuleId, NameIndex, TargetAliases};
pub use quote::{scan_quote, QuotedSegment, ScanOutcome};
pub use reassemble::{reassemble, TRAILING_LINES_EXEMPT};

use crate::error::DecodeError;

/// Everything recovered from one bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    /// The reassembled source text.
    pub source: String,
    /// The raw module-table span inside `source`.
    pub table: ModuleTableSpan,
    /// Module identifier → factory and dependency aliases.
    pub graph: ModuleGraph,
    /// Reverse index: target id → alias → referencing modules.
    pub index: NameIndex,
}

/// Run the full pipeline over raw bundle text.
pub fn decode(raw: &str) -> Result<Decoded, DecodeError> {
    let source = reassemble(raw)?;
    let table = locate_module_table(&source)?;
    let (graph, index) = decode_modules(&table)?;
    Ok(Decoded {
        source,
        table,
        graph,
        index,
    })
}
