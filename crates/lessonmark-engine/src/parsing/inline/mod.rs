//! # Inline Parsing
//!
//! Cursor-based tokenizer for the text of headings, paragraphs, quotes, list
//! items and (on request) table cells.
//!
//! ## Modules
//!
//! - **`types`**: `InlineRun` enum (Literal, Bold, Italic, Code, Link)
//! - **`kinds`**: inline types owning their delimiters and recognisers
//! - **`cursor`**: `Cursor` for byte-wise scanning
//! - **`parser`**: `parse_inline()` entry point
//!
//! ## Precedence
//!
//! Bold is tried before italic so `**x**` is never two italics; code spans
//! and links follow. Spans do not nest and nothing inside a matched span is
//! re-tokenized.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineRun;
