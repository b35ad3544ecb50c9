use serde::Serialize;

use crate::parsing::{
    Document,
    blocks::{Block, BlockKind},
    inline::{InlineRun, parse_inline},
    source::preview,
};

/// Snapshot of a parsed document for testing with `insta`.
#[derive(Debug, Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

/// Snapshot of a single block.
#[derive(Debug, Serialize)]
pub struct BlockSnap {
    /// Block kind with its shape, e.g. "Heading(2)" or "Table(2x3)".
    pub kind: String,
    /// Byte span as (start, end).
    pub span: (usize, usize),
    /// Preview of the block's source text.
    pub source: String,
    /// Inline runs of every text the block carries, one label per run.
    pub inline: Vec<String>,
}

pub fn normalize(src: &str, doc: &Document) -> Snap {
    Snap {
        blocks: doc.iter().map(|b| block_snap(src, b)).collect(),
    }
}

fn block_snap(src: &str, b: &Block) -> BlockSnap {
    let kind = match &b.kind {
        BlockKind::Heading { level, .. } => format!("Heading({level})"),
        BlockKind::CodeFence { language, .. } => format!("CodeFence({language})"),
        BlockKind::List { ordered, items } => {
            let marker = if *ordered { "ordered" } else { "bullet" };
            format!("List({marker}, {})", items.len())
        }
        BlockKind::Table { header, rows } => format!("Table({}x{})", header.len(), rows.len()),
        other => other.name().to_string(),
    };

    let texts: Vec<&str> = match &b.kind {
        BlockKind::Heading { text, .. }
        | BlockKind::Paragraph { text }
        | BlockKind::BlockQuote { text } => vec![text],
        BlockKind::List { items, .. } => items.iter().map(String::as_str).collect(),
        _ => vec![],
    };

    BlockSnap {
        kind,
        span: (b.span.start, b.span.end),
        source: preview(src, b.span, 80),
        inline: texts
            .into_iter()
            .flat_map(parse_inline)
            .map(|run| label(&run))
            .collect(),
    }
}

fn label(run: &InlineRun) -> String {
    match run {
        InlineRun::Literal { text } => format!("Literal({text})"),
        InlineRun::Bold { text } => format!("Bold({text})"),
        InlineRun::Italic { text } => format!("Italic({text})"),
        InlineRun::Code { text } => format!("Code({text})"),
        InlineRun::Link { text, href } => format!("Link({text} -> {href})"),
    }
}
