//! Locates the module table inside the reassembled source.
//!
//! The bundler emits `...}({1:[function...],2:[...],...},{},[entry])`; the
//! table literal sits between the end of the wrapper function and the
//! trailing empty cache object.

use crate::error::DecodeError;

/// Marker opening the module table: wrapper close followed by the call
/// argument that is the table literal.
const START_MARKER: &str = "}({";

/// Marker closing the table: table close, empty cache object, entry list.
const END_MARKER: &str = "},{},[";

/// Bytes to advance from the start-marker offset so the span begins at the
/// `{` opening the table literal itself.
const START_ADJUST: usize = 2;

/// Smallest plausible table size in bytes. A shorter span means a marker
/// matched some unrelated occurrence inside the code.
pub const MIN_SPAN: usize = 10_000;

/// The module-table substring of the reassembled source, with its byte
/// bounds. `text` covers `source[start..=end]` and is a balanced `{...}`
/// object literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleTableSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Find the module-table span, or fail when the encoding convention's
/// structural assumptions do not hold.
pub fn locate_module_table(source: &str) -> Result<ModuleTableSpan, DecodeError> {
    let marker = source
        .find(START_MARKER)
        .ok_or(DecodeError::StartMarkerMissing)?;
    let end = source.find(END_MARKER).ok_or(DecodeError::EndMarkerMissing)?;

    let start = marker + START_ADJUST;

    // First table key begins right after the opening brace; the bundler
    // numbers modules from 1, so expect a digit there.
    match source.get(start + 1..).and_then(|rest| rest.chars().next()) {
        Some(c) if c.is_ascii_digit() => {}
        _ => return Err(DecodeError::UnexpectedStructure { offset: start + 1 }),
    }

    let len = end.saturating_sub(start);
    if len < MIN_SPAN {
        return Err(DecodeError::SpanTooShort { len, min: MIN_SPAN });
    }

    Ok(ModuleTableSpan {
        start,
        end,
        text: source[start..=end].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Wraps a table literal in the bundler's surrounding call, padding the
    /// first factory body so the span clears [`MIN_SPAN`].
    fn bundle_around(table_body: &str) -> String {
        format!(
            "!function(){{wrapper}}({{{}}},{{}},[1]);",
            table_body
        )
    }

    fn padded_body() -> String {
        format!(
            "1:[function(e,t,n){{{}}},{{\"pad\":2}}],2:[function(e,t,n){{}},{{}}]",
            "p".repeat(MIN_SPAN)
        )
    }

    #[test]
    fn test_locates_span() {
        let source = bundle_around(&padded_body());
        let span = locate_module_table(&source).unwrap();
        assert!(span.text.starts_with("{1:[function"));
        assert!(span.text.ends_with('}'));
        assert_eq!(span.text, source[span.start..=span.end].to_string());
        // The span is the balanced table object up to the end marker.
        assert_eq!(&source[span.end..span.end + END_MARKER.len()], END_MARKER);
    }

    #[test]
    fn test_deterministic() {
        let source = bundle_around(&padded_body());
        assert_eq!(
            locate_module_table(&source).unwrap(),
            locate_module_table(&source).unwrap()
        );
    }

    #[test]
    fn test_start_marker_missing() {
        assert_eq!(
            locate_module_table("no markers at all"),
            Err(DecodeError::StartMarkerMissing)
        );
    }

    #[test]
    fn test_end_marker_missing() {
        let source = format!("f}}({{{}}})", padded_body());
        assert_eq!(
            locate_module_table(&source),
            Err(DecodeError::EndMarkerMissing)
        );
    }

    #[test]
    fn test_non_digit_opener() {
        let source = bundle_around(&format!("\"x\":[function(){{{}}},{{}}]", "p".repeat(MIN_SPAN)));
        assert!(matches!(
            locate_module_table(&source),
            Err(DecodeError::UnexpectedStructure { .. })
        ));
    }

    #[test]
    fn test_span_too_short() {
        let source = bundle_around("1:[function(){},{}]");
        assert!(matches!(
            locate_module_table(&source),
            Err(DecodeError::SpanTooShort { .. })
        ));
    }
}
