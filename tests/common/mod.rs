//! Shared fixtures: synthesizes a bundle in the wrapped-literal encoding.

/// A minified bundle with three modules and enough bulk to clear the
/// module-table plausibility threshold. Returns the source text that the
/// decoder should recover.
pub fn sample_source() -> String {
    let pad = "p".repeat(12_000);
    let table = format!(
        concat!(
            "{{1:[function(e,t,n){{var pad=\"{pad}\";t.exports=n(\"lodash\")}},",
            "{{\"lodash\":3,\"./util\":2}}],",
            "2:[function(e,t,n){{t.exports={{}}}},{{\"lodash\":3}}],",
            "3:[function(e,t,n){{t.exports=42}},{{}}]}}"
        ),
        pad = pad
    );
    format!("!function e(t,n,r){{use(t,n,r)}}({},{{}},[1]);", table)
}

/// Encode `source` into the line-split, escaped literal form the tool
/// consumes: escape the closed table, then emit one quoted segment per
/// line, never splitting an escape pair.
pub fn encode_bundle(source: &str) -> String {
    let escaped: String = source
        .chars()
        .map(|c| match c {
            '"' => "\\\"".to_string(),
            '\\' => "\\\\".to_string(),
            '\n' => "\\n".to_string(),
            c => c.to_string(),
        })
        .collect();

    let mut lines = Vec::new();
    let mut line = String::new();
    for c in escaped.chars() {
        line.push(c);
        if line.len() >= 500 && !line.ends_with('\\') {
            lines.push(format!("\"{}\"", line));
            line.clear();
        }
    }
    if !line.is_empty() {
        lines.push(format!("\"{}\"", line));
    }
    lines.join("\n")
}
