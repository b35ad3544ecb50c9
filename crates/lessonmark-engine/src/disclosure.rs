//! Progressive disclosure of long documents.
//!
//! Disclosure is a presentation hint: the full [`Document`] is always kept and
//! the decision only says how many blocks a consumer should show up front.

use serde::Serialize;

use crate::parsing::{Document, blocks::Block};

/// How a consumer should initially present a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Disclosure {
    /// Show every block; no expand affordance.
    Full,
    /// Show the first `visible` blocks with an affordance revealing `hidden` more.
    Collapsed { visible: usize, hidden: usize },
}

impl Disclosure {
    pub fn is_collapsed(&self) -> bool {
        matches!(self, Disclosure::Collapsed { .. })
    }

    /// The blocks to show before the user expands.
    pub fn visible_blocks<'d>(&self, doc: &'d Document) -> &'d [Block] {
        match *self {
            Disclosure::Full => &doc.blocks,
            Disclosure::Collapsed { visible, .. } => &doc.blocks[..visible.min(doc.len())],
        }
    }
}

/// Thresholds for collapsing long documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisclosurePolicy {
    /// Input length, in characters, above which collapsing is considered.
    pub threshold_chars: usize,
    /// Blocks shown while collapsed.
    pub initial_blocks: usize,
}

impl DisclosurePolicy {
    pub const THRESHOLD_CHARS: usize = 12_000;
    pub const INITIAL_BLOCKS: usize = 30;

    pub fn new(threshold_chars: usize, initial_blocks: usize) -> Self {
        Self {
            threshold_chars,
            initial_blocks,
        }
    }

    /// Decides from the input's character count and the parsed block count.
    ///
    /// Short inputs are always shown in full, however many blocks they hold.
    /// Long inputs collapse only if there is something left to hide.
    pub fn decide(&self, doc: &Document, input_chars: usize) -> Disclosure {
        if input_chars <= self.threshold_chars || doc.len() <= self.initial_blocks {
            return Disclosure::Full;
        }
        Disclosure::Collapsed {
            visible: self.initial_blocks,
            hidden: doc.len() - self.initial_blocks,
        }
    }

    /// [`decide`](Self::decide) with the character count taken from `input`.
    pub fn decide_for_input(&self, doc: &Document, input: &str) -> Disclosure {
        self.decide(doc, input.chars().count())
    }
}

impl Default for DisclosurePolicy {
    fn default() -> Self {
        Self::new(Self::THRESHOLD_CHARS, Self::INITIAL_BLOCKS)
    }
}
