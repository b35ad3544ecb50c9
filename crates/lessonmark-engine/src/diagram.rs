//! Seam for rendering `Diagram` blocks with an external renderer.
//!
//! The engine never draws diagrams itself. A consumer supplies a
//! [`DiagramRenderer`] and gets back one outcome per diagram block, with
//! failures reported as flags rather than errors.

use thiserror::Error;

use crate::parsing::{Document, blocks::BlockKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
    #[error("diagram source is empty")]
    EmptySource,
    #[error("diagram syntax error: {0}")]
    Syntax(String),
    #[error("diagram renderer unavailable: {0}")]
    Unavailable(String),
}

/// Converts diagram source text into some rendered artifact.
pub trait DiagramRenderer {
    type Artifact;

    fn render(&self, source: &str) -> Result<Self::Artifact, DiagramError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramStatus<A> {
    Rendered(A),
    /// Shown as an empty placeholder by the consumer.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramOutcome<A> {
    /// Index of the `Diagram` block in [`Document::blocks`].
    pub block_index: usize,
    pub status: DiagramStatus<A>,
}

impl<A> DiagramOutcome<A> {
    pub fn is_failed(&self) -> bool {
        matches!(self.status, DiagramStatus::Failed)
    }
}

/// Renders every diagram block of `doc`, in document order.
///
/// Each block is rendered once; a failure is logged and flagged on that
/// block only.
pub fn render_diagrams<R: DiagramRenderer>(
    doc: &Document,
    renderer: &R,
) -> Vec<DiagramOutcome<R::Artifact>> {
    doc.iter()
        .enumerate()
        .filter_map(|(block_index, b)| match &b.kind {
            BlockKind::Diagram { text } => Some((block_index, text)),
            _ => None,
        })
        .map(|(block_index, text)| {
            let status = match renderer.render(text) {
                Ok(artifact) => DiagramStatus::Rendered(artifact),
                Err(e) => {
                    log::warn!("diagram at block {block_index} failed to render: {e}");
                    DiagramStatus::Failed
                }
            };
            DiagramOutcome {
                block_index,
                status,
            }
        })
        .collect()
}
