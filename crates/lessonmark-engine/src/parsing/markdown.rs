//! Renders a [`Document`] back to normalized markdown.
//!
//! The output is the canonical form the parser would produce the same blocks
//! from: one blank line between blocks, paragraphs on a single line, `-` and
//! `1.` list markers, and a `---` separator row under every table header.

use super::{
    Document,
    blocks::{BlockKind, kinds::CodeFence},
};

impl Document {
    pub fn to_markdown(&self) -> String {
        let chunks: Vec<String> = self.blocks.iter().map(|b| render_block(&b.kind)).collect();
        chunks.join("\n\n")
    }
}

fn render_block(kind: &BlockKind) -> String {
    match kind {
        BlockKind::Heading { level, text, .. } => {
            format!("{} {}", "#".repeat(usize::from(*level)), text)
        }
        BlockKind::Paragraph { text } => text.clone(),
        BlockKind::CodeFence { language, text } => fence(language, text),
        BlockKind::Diagram { text } => fence(CodeFence::DIAGRAM_LANGUAGE, text),
        BlockKind::List { ordered, items } => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if *ordered {
                    format!("{}. {item}", i + 1)
                } else {
                    format!("- {item}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
        BlockKind::Table { header, rows } => {
            let mut lines = vec![row(header), separator(header.len())];
            lines.extend(rows.iter().map(|r| row(r)));
            lines.join("\n")
        }
        BlockKind::BlockQuote { text } => format!("> {text}"),
        BlockKind::Image { alt, src } => format!("![{alt}]({src})"),
        BlockKind::HorizontalRule => "---".to_string(),
    }
}

fn fence(language: &str, text: &str) -> String {
    if text.is_empty() {
        format!("{}{language}\n{}", CodeFence::BACKTICKS, CodeFence::BACKTICKS)
    } else {
        format!(
            "{}{language}\n{text}\n{}",
            CodeFence::BACKTICKS,
            CodeFence::BACKTICKS
        )
    }
}

fn row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}

fn separator(columns: usize) -> String {
    format!("|{}|", vec!["---"; columns.max(1)].join("|"))
}
