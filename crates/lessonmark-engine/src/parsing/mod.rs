pub mod blocks;
pub mod inline;
pub mod markdown;
pub mod slug;
pub mod snapshot;
pub mod source;

#[cfg(test)]
mod tests;

use serde::Serialize;

use blocks::{Block, BlockBuilder, BlockKind, MarkdownLineClassifier};
use source::lines_with_spans;

/// The ordered blocks parsed from one input string.
///
/// Blocks are in reading order and never change after parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Block kinds without their spans, for structural comparison.
    pub fn kinds(&self) -> Vec<&BlockKind> {
        self.blocks.iter().map(|b| &b.kind).collect()
    }
}

impl<'d> IntoIterator for &'d Document {
    type Item = &'d Block;
    type IntoIter = std::slice::Iter<'d, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

pub fn parse_document(src: &str) -> Document {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in lines_with_spans(src) {
        let class = classifier.classify(line.text, builder.open_fence());
        builder.push(&line, class);
    }

    Document {
        blocks: builder.finish(),
    }
}

/// Inline runs for a block's single text field (headings, paragraphs and
/// quotes). Other blocks yield no runs.
pub fn parse_inline_for_block(b: &Block) -> Vec<inline::InlineRun> {
    b.kind
        .inline_text()
        .map(inline::parse_inline)
        .unwrap_or_default()
}
