//! The three tree types. All of them are implicit trees stored in one `Vec`:
//! node `1` is the root, node `p` has the sons `2p` and `2p + 1`, and index `0` is unused.
//! The leaves occupy the second half of the array.
//!
//! * [`FoldTree`] - eager: point updates, segment folds.
//! * [`IncrementTree`] - additive updates on segments, point reads.
//! * [`LazyTree`] - generic updates on segments, segment folds.

pub mod fold_tree;
pub mod increment_tree;
pub mod lazy_tree;

pub use fold_tree::FoldTree;
pub use increment_tree::IncrementTree;
pub use lazy_tree::LazyTree;

use std::ops::{Bound, RangeBounds};

/// Converts a range into a `start..end` pair, and checks it fits in a tree of length `len`.
pub(crate) fn resolve_range<R: RangeBounds<usize>>(range: R, len: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.checked_add(1).unwrap_or_else(|| out_of_bounds(s, len)),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.checked_add(1).unwrap_or_else(|| out_of_bounds(e, len)),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    assert!(
        start <= end,
        "start of range {start} is bigger than end of range {end}"
    );
    assert!(
        end <= len,
        "End of range {end} is out of bounds of tree length {len}"
    );
    (start, end)
}

fn out_of_bounds(bound: usize, len: usize) -> ! {
    panic!("Range bound {bound} is out of bounds of tree length {len}")
}

pub(crate) fn check_index(index: usize, len: usize) {
    assert!(
        index < len,
        "Index {index} is out of bounds of tree length {len}"
    );
}

pub(crate) fn check_len(len: usize) {
    assert!(len > 0, "Can't build a tree of length 0");
}

/// The depth of node `node`, the root being at depth 0.
pub(crate) fn depth(node: usize) -> u32 {
    usize::BITS - 1 - node.leading_zeros()
}
