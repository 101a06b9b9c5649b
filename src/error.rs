use thiserror::Error;

/// Typed failures from the decode pipeline.
///
/// Every variant is fatal to the current run: a broken structural assumption
/// invalidates all downstream artifacts, so no stage recovers or retries.
/// Each variant carries enough context (line number, offsets, or module
/// identifier) to diagnose without re-running.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    /// An empty line anywhere except the very last line of the input.
    #[error("unexpected empty line at line {line}")]
    UnexpectedEmptyLine { line: usize },

    /// A non-empty line without a single quote character of either kind.
    #[error("cannot find quotes at line {line}")]
    NoQuoteFound { line: usize },

    /// The located quote did not parse as a terminated literal.
    #[error("parsing quote failed at line {line}")]
    QuoteParseFailed { line: usize },

    /// A second quoted segment on a line where only one is allowed.
    #[error("found multiple quotes at line {line}")]
    MultipleQuotesOnLine { line: usize },

    /// An escape sequence outside the closed table of supported escapes.
    #[error("unknown escape \\{escape} at line {line}")]
    UnknownEscape { line: usize, escape: char },

    /// The `}({` marker opening the module table is absent.
    #[error("cannot find start of module table")]
    StartMarkerMissing,

    /// The `},{},[` marker closing the module table is absent.
    #[error("cannot find end of module table")]
    EndMarkerMissing,

    /// The table does not open with a digit-keyed entry.
    #[error("module table opens with unexpected structure at offset {offset}")]
    UnexpectedStructure { offset: usize },

    /// The matched span is too small to be the real module table.
    #[error("module table span too short ({len} bytes, expected at least {min})")]
    SpanTooShort { len: usize, min: usize },

    /// The span text did not parse as a structural literal object.
    #[error("module table is not structured data: {reason}")]
    NotStructuredData { reason: String },

    /// One table entry violates the expected per-module shape.
    #[error("module {id} has unexpected shape: {reason}")]
    UnexpectedShape { id: String, reason: String },
}
