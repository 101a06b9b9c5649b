//! Reassembles the wrapped source from its line-split literal form.
//!
//! The bundle encodes its payload as one string literal per line; decoding
//! each literal and concatenating the pieces in line order yields the
//! original minified source.

use crate::decode::quote::{scan_quote, ScanOutcome};
use crate::error::DecodeError;

/// Number of trailing lines allowed to carry extra quote characters after
/// their first literal. The bundler closes the wrapping call over the last
/// lines, so those legitimately contain more than one quote.
pub const TRAILING_LINES_EXEMPT: usize = 2;

/// Decode every per-line literal of `raw` and concatenate the results.
///
/// Structural violations fail fast with a [`DecodeError`] naming the
/// offending 1-based line:
/// - an empty line anywhere but last,
/// - a line with no quote character of either kind,
/// - a literal that does not parse to a terminated segment,
/// - a second quote after the literal's end on any line except the final
///   [`TRAILING_LINES_EXEMPT`] lines.
pub fn reassemble(raw: &str) -> Result<String, DecodeError> {
    let lines: Vec<&str> = raw.split('\n').collect();
    let mut source = String::new();

    for (i, line) in lines.iter().enumerate() {
        let line_no = i + 1;

        if line.is_empty() {
            if i < lines.len() - 1 {
                return Err(DecodeError::UnexpectedEmptyLine { line: line_no });
            }
            break;
        }

        // First quote of either kind opens the line's literal.
        let start = match (line.find('\''), line.find('"')) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => return Err(DecodeError::NoQuoteFound { line: line_no }),
        };

        let outcome = scan_quote(line, start).map_err(|e| DecodeError::UnknownEscape {
            line: line_no,
            escape: e.0,
        })?;
        let segment = match outcome {
            ScanOutcome::Segment(segment) => segment,
            ScanOutcome::NotAQuote | ScanOutcome::Unterminated => {
                return Err(DecodeError::QuoteParseFailed { line: line_no });
            }
        };

        // At most one literal per line, except on the closing lines.
        if i + TRAILING_LINES_EXEMPT < lines.len() {
            let rest = &line[segment.end + 1..];
            if rest.contains('\'') || rest.contains('"') {
                return Err(DecodeError::MultipleQuotesOnLine { line: line_no });
            }
        }

        source.push_str(&segment.text);
    }

    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_line_concatenation() {
        let input = "\"a=1;\"\n\"b=2;\"";
        assert_eq!(reassemble(input).unwrap(), "a=1;b=2;");
    }

    #[test]
    fn test_surrounding_code_is_dropped() {
        let input = "var s = \"a=1;\" +\n    \"b=2;\";\n";
        assert_eq!(reassemble(input).unwrap(), "a=1;b=2;");
    }

    #[test]
    fn test_trailing_empty_line_tolerated() {
        let input = "\"a\"\n\"b\"\n";
        assert_eq!(reassemble(input).unwrap(), "ab");
    }

    #[test]
    fn test_empty_line_mid_input() {
        let input = "\"a\"\n\n\"b\"";
        assert_eq!(
            reassemble(input),
            Err(DecodeError::UnexpectedEmptyLine { line: 2 })
        );
    }

    #[test]
    fn test_no_quote_found() {
        let input = "\"a\"\nnothing here\n\"b\"\n\"c\"";
        assert_eq!(reassemble(input), Err(DecodeError::NoQuoteFound { line: 2 }));
    }

    #[test]
    fn test_unterminated_literal_fails() {
        let input = "\"a\n\"b\"\n\"c\"";
        assert_eq!(
            reassemble(input),
            Err(DecodeError::QuoteParseFailed { line: 1 })
        );
    }

    #[test]
    fn test_multiple_quotes_on_line() {
        let input = "\"a=1;\" \"again\"\n\"b\"\n\"c\"\n\"d\"";
        assert_eq!(
            reassemble(input),
            Err(DecodeError::MultipleQuotesOnLine { line: 1 })
        );
    }

    #[test]
    fn test_final_lines_exempt_from_quote_check() {
        // The closing call carries extra quoted arguments on the last lines.
        let input = "\"a\"\n\"b\", {}, [\"entry\"]\n\"c\");";
        assert_eq!(reassemble(input).unwrap(), "abc");
    }

    #[test]
    fn test_unknown_escape_names_line() {
        let input = "\"ok\"\n\"bad\\t\"\n\"x\"\n\"y\"";
        assert_eq!(
            reassemble(input),
            Err(DecodeError::UnknownEscape {
                line: 2,
                escape: 't'
            })
        );
    }

    #[test]
    fn test_round_trip_of_supported_escapes() {
        // Encode arbitrary text into the line-quoted form and decode back.
        let original = "var s = \"quoted\";\nvar t = 'single';\nback\\slash\n";
        let escaped: String = original
            .chars()
            .map(|c| match c {
                '"' => "\\\"".to_string(),
                '\\' => "\\\\".to_string(),
                '\n' => "\\n".to_string(),
                other => other.to_string(),
            })
            .collect();
        // Split the escaped payload over several lines.
        let mid = escaped.len() / 2;
        let split = (0..=mid)
            .rev()
            .find(|&i| escaped.is_char_boundary(i) && !escaped[..i].ends_with('\\'))
            .unwrap();
        let input = format!("\"{}\"\n\"{}\"", &escaped[..split], &escaped[split..]);
        assert_eq!(reassemble(&input).unwrap(), original);
    }
}
