mod common;

use bundlelens::decode::{decode, MIN_SPAN};
use bundlelens::emit;
use bundlelens::error::DecodeError;

use common::{encode_bundle, sample_source};

#[test]
fn decodes_synthesized_bundle_end_to_end() {
    let source = sample_source();
    let raw = encode_bundle(&source);

    let decoded = decode(&raw).unwrap();

    // The reassembled source is the exact original text.
    assert_eq!(decoded.source, source);

    // The span covers the table literal and clears the plausibility bound.
    assert!(decoded.table.text.starts_with("{1:[function"));
    assert!(decoded.table.text.ends_with('}'));
    assert!(decoded.table.end - decoded.table.start >= MIN_SPAN);

    // Graph shape.
    assert_eq!(decoded.graph.len(), 3);
    let entry = decoded.graph.get(1).unwrap();
    assert!(entry.factory.starts_with("function(e,t,n)"));
    assert_eq!(
        entry.dependencies,
        vec![("lodash".to_string(), 3), ("./util".to_string(), 2)]
    );
    assert!(decoded.graph.get(3).unwrap().dependencies.is_empty());

    // Reverse index: target id → alias → users, table order.
    assert_eq!(decoded.index.users(3, "lodash"), Some(&[1, 2][..]));
    assert_eq!(decoded.index.users(2, "./util"), Some(&[1][..]));
    assert_eq!(decoded.index.users(1, "lodash"), None);
}

#[test]
fn artifacts_are_deterministic() {
    let raw = encode_bundle(&sample_source());
    let decoded = decode(&raw).unwrap();

    let first = emit::render(&decoded);
    let second = emit::render(&decoded);
    assert_eq!(first, second);

    assert_eq!(first.module_table, decoded.table.text);
    assert!(first.pretty_source.contains("!function e(t,n,r){"));
    assert!(first.index.contains("\"3\":{"));
    assert!(first.index.contains("\"lodash\": [1,2]"));
    assert!(first.index_help.contains("Module structure format"));
}

#[test]
fn stray_quote_fails_with_line_number() {
    let raw = encode_bundle(&sample_source());
    let mut lines: Vec<String> = raw.lines().map(str::to_string).collect();
    assert!(lines.len() > 3);
    lines[1].push_str(" \"stray\"");
    let tampered = lines.join("\n");

    assert_eq!(
        decode(&tampered),
        Err(DecodeError::MultipleQuotesOnLine { line: 2 })
    );
}

#[test]
fn truncated_bundle_fails_at_boundary() {
    let source = sample_source();
    // Drop the table's closing machinery so the end marker never appears.
    let cut = source.find(",{},[").unwrap();
    let raw = encode_bundle(&source[..cut]);

    assert_eq!(decode(&raw), Err(DecodeError::EndMarkerMissing));
}

#[test]
fn no_partial_results_on_failure() {
    // A valid literal wrapping with no module table at all: the pipeline
    // must fail before producing anything.
    let raw = encode_bundle("var tiny = 1;");
    assert_eq!(decode(&raw), Err(DecodeError::StartMarkerMissing));
}
