use lessonmark_engine::parsing::{blocks::BlockKind, parse_document, snapshot};

#[test]
fn fixture_lesson_basic() {
    assert_fixture("lesson_basic");
}

#[test]
fn fixture_fences_and_quotes() {
    assert_fixture("fences_and_quotes");
}

fn assert_fixture(name: &str) {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let doc = parse_document(&md);
    snapshot::invariants(&md, &doc);

    let snap = snapshot::normalize(&md, &doc);
    insta::assert_debug_snapshot!(name, snap);
}

/// Every block span slices back to text that starts the block.
#[test]
fn spans_slice_back_to_block_source() {
    let md = "# Title\n\npara\n\n- item\n\n> quote\n\n```rs\ncode\n```";
    let doc = parse_document(md);
    let starts: Vec<&str> = doc
        .iter()
        .map(|b| &md[b.span.start..b.span.end])
        .map(|s| s.lines().next().unwrap())
        .collect();
    assert_eq!(starts, vec!["# Title", "para", "- item", "> quote", "```rs"]);
}

#[test]
fn large_generated_input_holds_invariants() {
    let chunk = "## Section\n\nSome *text* with `code`.\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n- x\n1. y\n\n```\n| in | fence |\n```\n\n";
    let md = chunk.repeat(500);
    let doc = parse_document(&md);
    snapshot::invariants(&md, &doc);
    assert_eq!(doc.len(), 500 * 6);
    assert_eq!(
        doc.iter()
            .filter(|b| matches!(b.kind, BlockKind::Table { .. }))
            .count(),
        500
    );
}
