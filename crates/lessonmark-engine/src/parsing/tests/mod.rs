//! Behavioural tests for the block segmenter as a whole.
//!
//! Per-rule cases live next to each kind under `blocks::kinds`; these cover
//! how the rules interact across lines.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    Document,
    blocks::BlockKind,
    inline::InlineRun,
    parse_document, parse_inline_for_block,
    snapshot::invariants,
    source::Span,
};

fn parse_checked(src: &str) -> Document {
    let doc = parse_document(src);
    invariants(src, &doc);
    doc
}

fn para(text: &str) -> BlockKind {
    BlockKind::Paragraph {
        text: text.to_string(),
    }
}

fn list(ordered: bool, items: &[&str]) -> BlockKind {
    BlockKind::List {
        ordered,
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

fn strings(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|s| s.to_string()).collect()
}

#[test]
fn empty_input_is_empty_document() {
    assert!(parse_checked("").is_empty());
    assert!(parse_checked("\n\n   \n").is_empty());
}

#[test]
fn table_round_trip() {
    let doc = parse_checked("| a | b |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |");
    assert_eq!(
        doc.kinds(),
        vec![&BlockKind::Table {
            header: strings(&["a", "b"]),
            rows: vec![strings(&["1", "2"]), strings(&["3", "4"])],
        }]
    );
}

#[test]
fn table_span_covers_separator() {
    let src = "| a | b |\n|---|---|\n| 1 | 2 |";
    let doc = parse_checked(src);
    assert_eq!(doc.blocks[0].span, Span::new(0, src.len()));
}

#[rstest]
#[case::header_only("| a | b |\n|---|---|")]
#[case::no_separator("| a | b |\n| 1 | 2 |")]
#[case::lone_row("| a | b |")]
#[case::separator_first("|---|\n| a |\n| b |")]
#[case::separator_last("| a |\n| 1 |\n|---|")]
fn partial_tables_are_discarded(#[case] src: &str) {
    assert!(parse_checked(src).is_empty());
}

#[test]
fn stray_separator_after_body_rows_is_dropped() {
    let doc = parse_checked("| a |\n|---|\n| 1 |\n|---|\n| 2 |");
    assert_eq!(
        doc.kinds(),
        vec![&BlockKind::Table {
            header: strings(&["a"]),
            rows: vec![strings(&["1"]), strings(&["2"])],
        }]
    );
}

#[test]
fn partial_table_does_not_swallow_neighbours() {
    let doc = parse_checked("before\n| a | b |\nafter");
    assert_eq!(doc.kinds(), vec![&para("before"), &para("after")]);
}

#[test]
fn table_inside_fence_stays_verbatim() {
    let doc = parse_checked("```\n| a | b |\n|---|---|\n| 1 | 2 |\n```");
    assert_eq!(
        doc.kinds(),
        vec![&BlockKind::CodeFence {
            language: String::new(),
            text: "| a | b |\n|---|---|\n| 1 | 2 |".to_string(),
        }]
    );
}

#[test]
fn fence_keeps_headings_and_indentation() {
    let doc = parse_checked("```python\n# comment\n    indented\n\n```");
    assert_eq!(
        doc.kinds(),
        vec![&BlockKind::CodeFence {
            language: "python".to_string(),
            text: "# comment\n    indented\n".to_string(),
        }]
    );
}

#[test]
fn unterminated_fence_emits_buffered_content() {
    let doc = parse_checked("intro\n```js\nlet x = 1;\n| a |");
    assert_eq!(
        doc.kinds(),
        vec![
            &para("intro"),
            &BlockKind::CodeFence {
                language: "js".to_string(),
                text: "let x = 1;\n| a |".to_string(),
            },
        ]
    );
}

#[rstest]
#[case("mermaid")]
#[case("Mermaid")]
#[case("MERMAID")]
fn diagram_language_is_case_insensitive(#[case] tag: &str) {
    let src = format!("```{tag}\ngraph TD\n  A --> B\n```");
    let doc = parse_checked(&src);
    assert_eq!(
        doc.kinds(),
        vec![&BlockKind::Diagram {
            text: "graph TD\n  A --> B".to_string(),
        }]
    );
}

#[test]
fn fence_opener_flushes_open_paragraph() {
    let doc = parse_checked("text\n```\ncode\n```\nmore");
    assert_eq!(doc.len(), 3);
    assert_eq!(doc.kinds()[0], &para("text"));
    assert_eq!(doc.kinds()[2], &para("more"));
}

#[test]
fn heading_slug_and_level() {
    let doc = parse_checked("## Hello, World! 2024\n###### Deep");
    assert_eq!(
        doc.kinds(),
        vec![
            &BlockKind::Heading {
                level: 2,
                text: "Hello, World! 2024".to_string(),
                slug: "hello-world-2024".to_string(),
            },
            &BlockKind::Heading {
                level: 4,
                text: "Deep".to_string(),
                slug: "deep".to_string(),
            },
        ]
    );
}

#[test]
fn consecutive_quote_lines_are_separate_blocks() {
    let doc = parse_checked("> one\n> two");
    assert_eq!(
        doc.kinds(),
        vec![
            &BlockKind::BlockQuote {
                text: "one".to_string()
            },
            &BlockKind::BlockQuote {
                text: "two".to_string()
            },
        ]
    );
}

#[test]
fn list_kind_switch_starts_new_list() {
    let doc = parse_checked("- a\n- b\n1. one\n2. two\n* c");
    assert_eq!(
        doc.kinds(),
        vec![
            &list(false, &["a", "b"]),
            &list(true, &["one", "two"]),
            &list(false, &["c"]),
        ]
    );
}

#[test]
fn blank_line_splits_same_kind_lists() {
    let doc = parse_checked("- a\n\n- b");
    assert_eq!(doc.kinds(), vec![&list(false, &["a"]), &list(false, &["b"])]);
}

#[test]
fn plain_text_flushes_list() {
    let doc = parse_checked("- a\ncontinued\n- b");
    assert_eq!(
        doc.kinds(),
        vec![&list(false, &["a"]), &para("continued"), &list(false, &["b"])]
    );
}

#[test]
fn paragraph_lines_are_trimmed_and_space_joined() {
    let src = "  first line  \nsecond line\n\nnext";
    let doc = parse_checked(src);
    assert_eq!(
        doc.kinds(),
        vec![&para("first line second line"), &para("next")]
    );
    assert_eq!(doc.blocks[0].span, Span::new(0, 26));
}

#[test]
fn single_line_blocks_flush_paragraph() {
    let doc = parse_checked("text\n# Heading\ntext\n---\n![a](b.png)\ntext");
    let names: Vec<&str> = doc.iter().map(|b| b.kind.name()).collect();
    assert_eq!(
        names,
        vec![
            "Paragraph",
            "Heading",
            "Paragraph",
            "HorizontalRule",
            "Image",
            "Paragraph"
        ]
    );
}

#[test]
fn image_with_trailing_text_is_paragraph() {
    let doc = parse_checked("![a](b.png) caption");
    assert_eq!(doc.kinds(), vec![&para("![a](b.png) caption")]);
}

#[test]
fn crlf_input_parses_like_lf() {
    assert_eq!(
        parse_checked("# T\r\n\r\nbody\r\n").kinds(),
        parse_checked("# T\n\nbody\n").kinds()
    );
}

#[test]
fn inline_runs_for_text_blocks_only() {
    let doc = parse_checked("Some **bold** text\n\n```\n**not bold**\n```");
    assert_eq!(
        parse_inline_for_block(&doc.blocks[0]),
        vec![
            InlineRun::Literal {
                text: "Some ".to_string()
            },
            InlineRun::Bold {
                text: "bold".to_string()
            },
            InlineRun::Literal {
                text: " text".to_string()
            },
        ]
    );
    assert!(parse_inline_for_block(&doc.blocks[1]).is_empty());
}

#[test]
fn unclosed_bold_is_single_literal() {
    let doc = parse_checked("**bold without close");
    assert_eq!(
        parse_inline_for_block(&doc.blocks[0]),
        vec![InlineRun::Literal {
            text: "**bold without close".to_string()
        }]
    );
}

#[rstest]
#[case("# Title\n\nFirst para\nwraps here.\n\n## Part\n\nSecond *para*.")]
#[case("- a\n- b\n\n1. x\n\n> quote\n\ntext")]
#[case("one\n\n\n\ntwo\n---\n### three")]
fn reparsing_rendered_markdown_is_stable(#[case] src: &str) {
    let first = parse_checked(src);
    let rendered = first.to_markdown();
    let second = parse_checked(&rendered);
    assert_eq!(first.kinds(), second.kinds());
    assert_eq!(second.to_markdown(), rendered);
}
