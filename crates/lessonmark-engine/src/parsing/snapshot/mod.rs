//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a parsed `Document` to a stable `Snap` with
//!   one readable label per block and inline run, for `insta` snapshots
//! - **`invariants`**: Runtime checks for parser correctness (spans in bounds,
//!   ordered and disjoint)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
