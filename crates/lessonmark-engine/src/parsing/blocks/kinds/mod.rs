//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters. The classifier and
//! builder call into these; they never hardcode `|`, `#` or fence markers.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod image;
pub mod list;
pub mod paragraph;
pub mod rule;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use heading::Heading;
pub use image::Image;
pub use list::ListItem;
pub use paragraph::Paragraph;
pub use rule::HorizontalRule;
pub use table::{Table, TableCells};
