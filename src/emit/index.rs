//! Renders the reverse alias index as readable nested text.

use crate::decode::NameIndex;

/// Render the index as a nested JSON-like structure: outer keys are
/// dependency target ids, inner keys the aliases used for them, values the
/// ordered lists of referencing module ids. Key order is first-discovery
/// order at both levels, so identical input renders byte-identically.
pub fn render_index(index: &NameIndex) -> String {
    if index.is_empty() {
        return "{}".to_string();
    }

    let mut out = String::from("{\n");
    let targets: Vec<_> = index.iter().collect();

    for (ti, target) in targets.iter().enumerate() {
        out.push_str(&format!("  \"{}\":{{\n", target.target));

        for (ai, (alias, users)) in target.aliases.iter().enumerate() {
            out.push_str("    ");
            out.push_str(&json_text(alias));
            out.push_str(": ");
            out.push_str(&json_text(users));
            out.push_str(if ai + 1 < target.aliases.len() { ",\n" } else { "\n" });
        }

        out.push_str(if ti + 1 < targets.len() { "  },\n" } else { "  }\n" });
    }

    out.push('}');
    out
}

fn json_text<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}
