//! Depth-bounded traversal and tag grouping.

use tracing::trace;

use crate::coerce::Child;
use crate::inspect::TagCounts;

/// Walks a child sequence depth-first, left-to-right, pushing one tag
/// per leaf onto the accumulator.
///
/// `depth` is 0 for the top-level container's direct children. A
/// `max_depth` of 0 means unlimited; a positive `max_depth` turns every
/// element discovered at depth `max_depth - 1` or beyond into a leaf,
/// even if it is itself coercible.
pub(crate) fn walk<'a>(
    children: &[Child<'a>],
    depth: usize,
    max_depth: usize,
    tags: &mut Vec<&'a str>,
) {
    for child in children {
        match child.children() {
            Some(next) if max_depth == 0 || max_depth > depth + 1 => {
                trace!(depth = depth + 1, len = next.len(), "descending");
                walk(&next, depth + 1, max_depth, tags);
            }
            _ => tags.push(child.tag()),
        }
    }
}

/// Counts occurrences of each tag in the emitted sequence.
///
/// The result contains a key only for tags that occurred at least
/// once; the sum of counts equals the length of the input.
pub(crate) fn group_count<'a>(tags: impl IntoIterator<Item = &'a str>) -> TagCounts {
    let mut counts = TagCounts::new();
    for tag in tags {
        *counts.entry(tag.to_string()).or_insert(0) += 1;
    }
    counts
}
