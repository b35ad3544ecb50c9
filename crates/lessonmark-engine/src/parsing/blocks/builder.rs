use crate::parsing::slug::slugify;
use crate::parsing::source::{LineRef, Span};

use super::{
    classify::LineClass,
    kinds::{CodeFence, FenceKind, Paragraph, Table},
    types::{Block, BlockKind},
};

/// The single accumulator that may be open at any time.
///
/// Holding it in one enum keeps "at most one of fence/table/list/paragraph
/// is open" true by construction.
#[derive(Debug)]
enum LeafState {
    None,
    Paragraph {
        span: Span,
        text: String,
    },
    List {
        span: Span,
        ordered: bool,
        items: Vec<String>,
    },
    /// `seen` counts every table line, separators included.
    Table {
        span: Span,
        lines: Vec<String>,
        seen: usize,
        saw_separator: bool,
    },
    Fence {
        kind: FenceKind,
        language: String,
        span: Span,
        lines: Vec<String>,
    },
}

/// Stateful sweep that turns classified lines into blocks.
///
/// Every block opener flushes whatever accumulator is open first. A fence is
/// never flushed implicitly: it closes only on its own delimiter or at the
/// end of input.
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    /// The delimiter of the open fence, if any. The classifier needs this.
    pub fn open_fence(&self) -> Option<FenceKind> {
        match self.leaf {
            LeafState::Fence { kind, .. } => Some(kind),
            _ => None,
        }
    }

    pub fn push(&mut self, line: &LineRef<'_>, class: LineClass<'_>) {
        match class {
            LineClass::FenceOpen { kind, language } => {
                self.flush_open();
                self.leaf = LeafState::Fence {
                    kind,
                    language: language.to_string(),
                    span: line.span,
                    lines: vec![],
                };
            }
            LineClass::FenceContent => {
                if let LeafState::Fence { span, lines, .. } = &mut self.leaf {
                    *span = span.cover(line.span);
                    lines.push(line.text.to_string());
                }
            }
            LineClass::FenceClose => {
                if let LeafState::Fence { span, .. } = &mut self.leaf {
                    *span = span.cover(line.span);
                }
                self.close_fence();
            }
            LineClass::TableRow => self.extend_table(line, false),
            LineClass::TableSeparator => self.extend_table(line, true),
            LineClass::ListItem { ordered, text } => self.extend_list(line, ordered, text),
            LineClass::Plain { text } => self.extend_paragraph(line, text),
            LineClass::Blank => self.flush_open(),
            LineClass::HorizontalRule => self.emit(line.span, BlockKind::HorizontalRule),
            LineClass::Heading { level, text } => self.emit(
                line.span,
                BlockKind::Heading {
                    level,
                    text: text.to_string(),
                    slug: slugify(text),
                },
            ),
            LineClass::BlockQuote { text } => self.emit(
                line.span,
                BlockKind::BlockQuote {
                    text: text.to_string(),
                },
            ),
            LineClass::Image { alt, src } => self.emit(
                line.span,
                BlockKind::Image {
                    alt: alt.to_string(),
                    src: src.to_string(),
                },
            ),
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        if self.open_fence().is_some() {
            log::trace!("unterminated fence at end of input, emitting buffered content");
            self.close_fence();
        }
        self.flush_open();
        self.out
    }

    /// Emits a single-line block after flushing any open accumulator.
    fn emit(&mut self, span: Span, kind: BlockKind) {
        self.flush_open();
        self.out.push(Block { kind, span });
    }

    fn extend_paragraph(&mut self, line: &LineRef<'_>, text: &str) {
        if !matches!(self.leaf, LeafState::Paragraph { .. }) {
            self.flush_open();
            self.leaf = LeafState::Paragraph {
                span: line.span,
                text: String::new(),
            };
        }
        if let LeafState::Paragraph { span, text: buf } = &mut self.leaf {
            *span = span.cover(line.span);
            Paragraph::append(buf, text);
        }
    }

    fn extend_list(&mut self, line: &LineRef<'_>, ordered: bool, text: &str) {
        // A kind switch without a blank line still starts a new list.
        let continues = matches!(self.leaf, LeafState::List { ordered: o, .. } if o == ordered);
        if !continues {
            self.flush_open();
            self.leaf = LeafState::List {
                span: line.span,
                ordered,
                items: vec![],
            };
        }
        if let LeafState::List { span, items, .. } = &mut self.leaf {
            *span = span.cover(line.span);
            items.push(text.to_string());
        }
    }

    fn extend_table(&mut self, line: &LineRef<'_>, separator: bool) {
        if !matches!(self.leaf, LeafState::Table { .. }) {
            self.flush_open();
            self.leaf = LeafState::Table {
                span: line.span,
                lines: vec![],
                seen: 0,
                saw_separator: false,
            };
        }
        if let LeafState::Table {
            span,
            lines,
            seen,
            saw_separator,
        } = &mut self.leaf
        {
            *span = span.cover(line.span);
            // Only a separator directly under the header row counts; stray
            // ones elsewhere are dropped.
            if separator {
                *saw_separator |= *seen == 1;
            } else {
                lines.push(line.text.to_string());
            }
            *seen += 1;
        }
    }

    fn close_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence {
            language,
            span,
            lines,
            ..
        } = prev
        {
            let text = lines.join("\n");
            let kind = if CodeFence::is_diagram(&language) {
                BlockKind::Diagram { text }
            } else {
                BlockKind::CodeFence { language, text }
            };
            self.out.push(Block { kind, span });
        } else {
            self.leaf = prev;
        }
    }

    /// Flushes the open table, list or paragraph. An open fence is left alone.
    fn flush_open(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        match prev {
            LeafState::None => {}
            LeafState::Table {
                span,
                lines,
                saw_separator,
                ..
            } => self.flush_table(span, &lines, saw_separator),
            LeafState::List {
                span,
                ordered,
                items,
            } => self.out.push(Block {
                kind: BlockKind::List { ordered, items },
                span,
            }),
            LeafState::Paragraph { span, text } => self.out.push(Block {
                kind: BlockKind::Paragraph { text },
                span,
            }),
            fence @ LeafState::Fence { .. } => self.leaf = fence,
        }
    }

    fn flush_table(&mut self, span: Span, lines: &[String], saw_separator: bool) {
        let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
        let cells = if saw_separator {
            Table::split(&lines)
        } else {
            None
        };
        match cells {
            Some(cells) => self.out.push(Block {
                kind: BlockKind::Table {
                    header: cells.header,
                    rows: cells.rows,
                },
                span,
            }),
            None => log::trace!(
                "discarding partial table at {}..{} ({} rows, separator: {saw_separator})",
                span.start,
                span.end,
                lines.len()
            ),
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
