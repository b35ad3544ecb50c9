//! # Block Parsing
//!
//! Two-phase block parsing over the lines of one input string.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is matched against the
//!    structural rules in priority order, producing a `LineClass`. The only
//!    state consulted is whether a fence is open.
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` holds the single
//!    open accumulator (paragraph, list, table or fence) and emits `Block`s
//!    as lines open, extend and flush it.
//!
//! ## Modules
//!
//! - **`types`**: `Block` and the closed `BlockKind` variant set
//! - **`kinds`**: block-specific types owning their delimiters and
//!   line-level recognisers (CodeFence, Table, Heading, ListItem, ...)
//! - **`classify`**: `MarkdownLineClassifier` producing `LineClass`
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Fences are raw zones: a table- or heading-shaped line inside an open
//!   fence is fence content
//! - Malformed input never fails; partial tables are discarded, unterminated
//!   fences are emitted with what they buffered
//! - Blocks are emitted in source order with ascending, disjoint spans

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{Block, BlockKind};
