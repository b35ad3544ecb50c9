pub mod cache;
pub mod diagram;
pub mod disclosure;
pub mod outline;
pub mod parsing;
pub mod recovery;

// Re-export key types for easier usage
pub use cache::ParseCache;
pub use diagram::{DiagramError, DiagramOutcome, DiagramRenderer, DiagramStatus, render_diagrams};
pub use disclosure::{Disclosure, DisclosurePolicy};
pub use outline::{Section, TableOfContents, TocBuilder, TocEntry, group_into_sections};
pub use parsing::{
    Document,
    blocks::{Block, BlockKind},
    inline::{InlineRun, parse_inline},
    parse_inline_for_block,
    slug::slugify,
    source::Span,
};
pub use recovery::{
    RecoveryResult, Strategy, recover, recover_exercises, recover_exercises_str, recover_str,
};

/// Parses `input` into a [`Document`]. `None` and empty input give an empty
/// document; nothing fails.
pub fn parse<'a>(input: impl Into<Option<&'a str>>) -> Document {
    input
        .into()
        .map(parsing::parse_document)
        .unwrap_or_default()
}
