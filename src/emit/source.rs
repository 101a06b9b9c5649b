//! Deterministic pretty-printer for the recovered source.
//!
//! The minified bundle comes back as one long line; this re-emits it with
//! structural line breaks and fixed-width indentation so repeated runs over
//! identical input produce byte-identical, diff-friendly output. Any
//! formatter with that property would satisfy the pipeline; this one is
//! string-literal aware and nothing more.

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Soft wrap target: lines longer than this break at the next comma.
pub const TARGET_WIDTH: usize = 80;

/// Hard ceiling: break anywhere (outside a string) past this column.
pub const HARD_WRAP: usize = 32_000;

/// Re-emit `source` with deterministic indentation and line breaks.
pub fn format_source(source: &str) -> String {
    let mut out = String::with_capacity(source.len() + source.len() / 4);
    let mut line = String::new();
    let mut depth: usize = 0;
    let mut line_indent: usize = 0;

    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            // Copy string literals verbatim.
            '"' | '\'' => {
                line.push(c);
                let mut escaped = false;
                for s in chars.by_ref() {
                    line.push(s);
                    if escaped {
                        escaped = false;
                    } else if s == '\\' {
                        escaped = true;
                    } else if s == c {
                        break;
                    }
                }
            }
            '{' => {
                line.push('{');
                flush(&mut out, &mut line, line_indent);
                depth += 1;
                line_indent = depth;
            }
            '}' => {
                flush(&mut out, &mut line, line_indent);
                depth = depth.saturating_sub(1);
                line_indent = depth;
                line.push('}');
                // Keep trailing separators on the same line as the brace.
                while matches!(chars.peek(), Some(&(';' | ',' | ')' | ']'))) {
                    line.push(chars.next().unwrap());
                }
                flush(&mut out, &mut line, line_indent);
            }
            ';' => {
                line.push(';');
                flush(&mut out, &mut line, line_indent);
            }
            ',' => {
                line.push(',');
                if line_indent * INDENT_WIDTH + line.len() > TARGET_WIDTH {
                    flush(&mut out, &mut line, line_indent);
                }
            }
            // Input newlines carry no structure of their own.
            '\n' | '\r' => {
                if !line.is_empty() && !line.ends_with(' ') {
                    line.push(' ');
                }
            }
            _ => {
                line.push(c);
                if line_indent * INDENT_WIDTH + line.len() > HARD_WRAP {
                    flush(&mut out, &mut line, line_indent);
                }
            }
        }
    }
    flush(&mut out, &mut line, line_indent);

    out
}

fn flush(out: &mut String, line: &mut String, indent: usize) {
    let text = line.trim();
    if !text.is_empty() {
        for _ in 0..indent * INDENT_WIDTH {
            out.push(' ');
        }
        out.push_str(text);
        out.push('\n');
    }
    line.clear();
}
