//! Single quoted-literal scanner.
//!
//! Parses one `'...'` or `"..."` literal inside a line of the wrapped
//! bundle, resolving the encoding's closed escape table. Pure function of
//! its inputs; line-level policy lives in the reassembler.

use thiserror::Error;

/// One decoded literal: its text with escapes resolved, and the byte
/// offset of the closing delimiter within the scanned line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotedSegment {
    pub text: String,
    pub end: usize,
}

/// Result of scanning at a given offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A terminated literal was parsed.
    Segment(QuotedSegment),
    /// The character at the offset is not a quote. A normal negative
    /// result, not an error.
    NotAQuote,
    /// The line ended before the closing delimiter. The caller decides
    /// what malformed means.
    Unterminated,
}

/// An escaped character outside the supported table. The encoding
/// convention is closed, so this is never silently passed through.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown escape \\{0}")]
pub struct UnknownEscape(pub char);

/// Parse a single quoted literal starting at byte offset `pos`.
///
/// The character at `pos` fixes the delimiter for the literal. Supported
/// escapes: `\"` and `\'` (literal quote of either kind), `\\` (literal
/// backslash), `\n` (line feed). Anything else after a backslash is an
/// [`UnknownEscape`].
pub fn scan_quote(line: &str, pos: usize) -> Result<ScanOutcome, UnknownEscape> {
    let mut chars = line[pos..].char_indices();
    let delim = match chars.next() {
        Some((_, c @ ('"' | '\''))) => c,
        _ => return Ok(ScanOutcome::NotAQuote),
    };

    let mut text = String::new();
    while let Some((off, c)) = chars.next() {
        if c == delim {
            return Ok(ScanOutcome::Segment(QuotedSegment {
                text,
                end: pos + off,
            }));
        }

        if c == '\\' {
            match chars.next() {
                Some((_, q @ ('"' | '\''))) => text.push(q),
                Some((_, '\\')) => text.push('\\'),
                Some((_, 'n')) => text.push('\n'),
                Some((_, other)) => return Err(UnknownEscape(other)),
                // Dangling backslash at end of line: the literal cannot
                // terminate after it.
                None => break,
            }
        } else {
            text.push(c);
        }
    }

    Ok(ScanOutcome::Unterminated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(line: &str, pos: usize) -> QuotedSegment {
        match scan_quote(line, pos).unwrap() {
            ScanOutcome::Segment(seg) => seg,
            other => panic!("expected a segment, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_literal() {
        let seg = segment(r#"var x = "a=1;";"#, 8);
        assert_eq!(seg.text, "a=1;");
        assert_eq!(seg.end, 13);
        assert_eq!(&r#"var x = "a=1;";"#[seg.end..seg.end + 1], "\"");
    }

    #[test]
    fn test_single_quote_delimiter() {
        let seg = segment("'hello \"world\"'", 0);
        assert_eq!(seg.text, "hello \"world\"");
    }

    #[test]
    fn test_escape_table() {
        assert_eq!(segment(r#""a\"b""#, 0).text, "a\"b");
        assert_eq!(segment(r#""a\'b""#, 0).text, "a'b");
        assert_eq!(segment(r#""a\\b""#, 0).text, "a\\b");
        assert_eq!(segment(r#""a\nb""#, 0).text, "a\nb");
    }

    #[test]
    fn test_other_delimiter_is_plain_text() {
        // A single quote inside a double-quoted literal needs no escape.
        let seg = segment(r#""it's""#, 0);
        assert_eq!(seg.text, "it's");
    }

    #[test]
    fn test_unknown_escape_is_fatal() {
        assert_eq!(scan_quote(r#""a\tb""#, 0), Err(UnknownEscape('t')));
        assert_eq!(scan_quote(r#""a\qb""#, 0), Err(UnknownEscape('q')));
    }

    #[test]
    fn test_not_a_quote() {
        assert_eq!(scan_quote("abc", 0), Ok(ScanOutcome::NotAQuote));
        assert_eq!(scan_quote("", 0), Ok(ScanOutcome::NotAQuote));
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(scan_quote(r#""abc"#, 0), Ok(ScanOutcome::Unterminated));
        assert_eq!(scan_quote(r#""abc\"#, 0), Ok(ScanOutcome::Unterminated));
    }

    #[test]
    fn test_multibyte_content() {
        let seg = segment("\"héllo\" rest", 0);
        assert_eq!(seg.text, "héllo");
        assert_eq!(&"\"héllo\" rest"[seg.end..seg.end + 1], "\"");
    }
}
