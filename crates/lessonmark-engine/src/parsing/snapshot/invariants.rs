use crate::parsing::Document;

/// Validates parser output invariants.
///
/// Asserts that:
/// - All block spans are within bounds and on character boundaries
/// - Blocks are in source order with disjoint spans
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(src: &str, doc: &Document) {
    let n = src.len();
    let mut prev_end = 0usize;
    for (i, b) in doc.iter().enumerate() {
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block {i} span out of bounds: {:?} (source len: {n})",
            b.span
        );
        assert!(
            b.span.slice(src).is_some(),
            "block {i} span splits a character: {:?}",
            b.span
        );
        assert!(
            i == 0 || b.span.start >= prev_end,
            "block {i} overlaps or precedes the previous block: {:?} (previous end: {prev_end})",
            b.span
        );
        prev_end = b.span.end;
    }
}
