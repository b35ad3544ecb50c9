use crate::parsing::{
    Document,
    blocks::{Block, BlockKind},
};

/// A run of blocks under one level-2 heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'d> {
    /// The opening level-2 heading; `None` for blocks before the first one.
    pub heading: Option<&'d Block>,
    pub blocks: Vec<&'d Block>,
}

impl Section<'_> {
    pub const LEVEL: u8 = 2;

    /// True for a section that was not opened by a heading, i.e. content a
    /// consumer lays out without a section card.
    pub fn is_flat(&self) -> bool {
        self.heading.is_none()
    }

    pub fn title(&self) -> Option<&str> {
        self.heading.and_then(|h| h.kind.inline_text())
    }
}

/// Splits a document into sections at level-2 headings.
///
/// A level-2 heading closes the current section if it has a heading or any
/// blocks, otherwise it becomes that section's heading. A document with no
/// level-2 headings yields one flat section.
pub fn group_into_sections(doc: &Document) -> Vec<Section<'_>> {
    let mut sections = vec![];
    let mut current = Section {
        heading: None,
        blocks: vec![],
    };

    for block in doc {
        let opens = matches!(block.kind, BlockKind::Heading { level, .. } if level == Section::LEVEL);
        if !opens {
            current.blocks.push(block);
            continue;
        }
        if !current.blocks.is_empty() || current.heading.is_some() {
            sections.push(std::mem::replace(
                &mut current,
                Section {
                    heading: Some(block),
                    blocks: vec![],
                },
            ));
        } else {
            current.heading = Some(block);
        }
    }

    if current.heading.is_some() || !current.blocks.is_empty() {
        sections.push(current);
    }
    sections
}
