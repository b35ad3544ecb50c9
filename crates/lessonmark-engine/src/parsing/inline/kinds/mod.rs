//! # Inline Kinds
//!
//! Inline-specific types that own their delimiters and their recogniser.
//!
//! ## Types
//!
//! - **`Emphasis`**: `STAR = b'*'`, `BOLD = b"**"` - bold and italic
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone, no parsing inside
//! - **`Link`**: `[text](href)`
//!
//! Each `try_parse*` restores the cursor when its construct does not close.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
