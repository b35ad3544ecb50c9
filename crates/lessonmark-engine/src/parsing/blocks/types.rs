use serde::Serialize;

use crate::parsing::source::Span;

/// The structural kind of an emitted block, with its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    /// An ATX heading; `level` is 1..=4.
    Heading { level: u8, text: String, slug: String },
    /// Consecutive plain lines joined with single spaces.
    Paragraph { text: String },
    /// A fenced code block; `language` is empty when none was declared.
    CodeFence { language: String, text: String },
    /// A fence tagged with the diagram language. Rendering is external.
    Diagram { text: String },
    /// A contiguous run of same-kind list items.
    List { ordered: bool, items: Vec<String> },
    /// A pipe table. Cell text is raw; inline parsing is up to the consumer.
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// A single `> ` line.
    BlockQuote { text: String },
    /// A standalone `![alt](src)` line.
    Image { alt: String, src: String },
    HorizontalRule,
}

impl BlockKind {
    /// Short, stable name of the variant.
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Heading { .. } => "Heading",
            BlockKind::Paragraph { .. } => "Paragraph",
            BlockKind::CodeFence { .. } => "CodeFence",
            BlockKind::Diagram { .. } => "Diagram",
            BlockKind::List { .. } => "List",
            BlockKind::Table { .. } => "Table",
            BlockKind::BlockQuote { .. } => "BlockQuote",
            BlockKind::Image { .. } => "Image",
            BlockKind::HorizontalRule => "HorizontalRule",
        }
    }

    /// The single inline-bearing text of this block, if it has one.
    ///
    /// Lists and tables carry several texts and are tokenized per item or
    /// cell by the consumer; fences are raw.
    pub fn inline_text(&self) -> Option<&str> {
        match self {
            BlockKind::Heading { text, .. }
            | BlockKind::Paragraph { text }
            | BlockKind::BlockQuote { text } => Some(text),
            _ => None,
        }
    }
}

/// One emitted block and the source lines it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    /// Byte span from the start of the first line to the end of the last
    /// line that contributed to the block (line terminators excluded).
    pub span: Span,
}
