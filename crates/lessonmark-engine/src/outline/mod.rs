//! Navigation structure derived from a parsed [`Document`](crate::parsing::Document).
//!
//! Both passes are read-only views over the block sequence: the table of
//! contents lists level-2/3 headings for anchor links, and sections split the
//! blocks at level-2 headings for card-style layouts.

pub mod sections;
pub mod toc;

pub use sections::{Section, group_into_sections};
pub use toc::{TableOfContents, TocBuilder, TocEntry};
