use serde::Serialize;

use crate::parsing::{Document, blocks::BlockKind};

/// One navigable heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub level: u8,
    pub slug: String,
    pub text: String,
}

/// Ordered headings of a document, present only above the heading threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableOfContents {
    pub entries: Vec<TocEntry>,
}

impl TableOfContents {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds a [`TableOfContents`] from level-2 and level-3 headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocBuilder {
    /// Fewer qualifying headings than this and no TOC is produced.
    pub min_headings: usize,
}

impl TocBuilder {
    pub const MIN_HEADINGS: usize = 3;
    pub const LEVELS: std::ops::RangeInclusive<u8> = 2..=3;

    pub fn new(min_headings: usize) -> Self {
        Self { min_headings }
    }

    /// Returns `None` when the document has too few level-2/3 headings to
    /// be worth navigating.
    pub fn build(&self, doc: &Document) -> Option<TableOfContents> {
        let entries: Vec<TocEntry> = doc
            .iter()
            .filter_map(|b| match &b.kind {
                BlockKind::Heading { level, text, slug } if Self::LEVELS.contains(level) => {
                    Some(TocEntry {
                        level: *level,
                        slug: slug.clone(),
                        text: text.clone(),
                    })
                }
                _ => None,
            })
            .collect();

        (!entries.is_empty() && entries.len() >= self.min_headings)
            .then_some(TableOfContents { entries })
    }
}

impl Default for TocBuilder {
    fn default() -> Self {
        Self::new(Self::MIN_HEADINGS)
    }
}
