//! Top-down segment tree for adding to segments and reading single values.
//!
//! See [`IncrementTree`]

use super::*;
use std::ops::Add;

/// A segment tree that adds deltas to whole segments, and reads single values.
///
/// There is no separate buffer for pending deltas: an internal node stores the delta that
/// still has to be added to all of its subtree, and a leaf stores its value minus the
/// deltas of its ancestors. `T::default()` must be zero.
///
/// [`IncrementTree::get`] and [`IncrementTree::flatten`] push the deltas they pass through
/// down to the leaves, so they need `&mut self`. Use [`IncrementTree::get_imm`]
/// for a read that doesn't change anything.
///
/// ```
/// use segtrees::IncrementTree;
/// let mut tree = IncrementTree::from_values(vec![1, 2, 3]);
/// tree.inc(0..3, 1);
/// tree.inc(1..2, 10);
/// assert_eq!(tree.get(1), 13);
/// assert_eq!(tree.flatten(), &[2, 13, 4]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct IncrementTree<T> {
    len: usize,
    nodes: Vec<T>,
}

impl<T: Copy + Default + Add<Output = T>> IncrementTree<T> {
    /// Create a tree of `len` zeros.
    pub fn new(len: usize) -> Self {
        check_len(len);
        #[cfg(feature = "tracing")]
        tracing::trace!(len, "new increment tree");
        IncrementTree {
            len,
            nodes: vec![T::default(); 2 * len],
        }
    }

    /// Create a tree holding `values`. The internal nodes start at zero,
    /// so this is O(N) without any recalculation.
    pub fn from_values(values: Vec<T>) -> Self {
        let len = values.len();
        check_len(len);
        let mut nodes = Vec::with_capacity(2 * len);
        nodes.resize(len, T::default());
        nodes.extend(values);
        IncrementTree { len, nodes }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: trees can't be empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Adds `delta` to every value in `range`.
    /// O(log N)
    pub fn inc<R: RangeBounds<usize>>(&mut self, range: R, delta: T) {
        let (start, end) = resolve_range(range, self.len);
        let mut b = start + self.len;
        let mut e = end + self.len;
        while b < e {
            if b & 1 == 1 {
                self.nodes[b] = self.nodes[b] + delta;
                b += 1;
            }
            if e & 1 == 1 {
                e -= 1;
                self.nodes[e] = self.nodes[e] + delta;
            }
            b >>= 1;
            e >>= 1;
        }
    }

    // moves the delta stored in `node` into its sons
    fn push(&mut self, node: usize) {
        let delta = std::mem::take(&mut self.nodes[node]);
        self.nodes[2 * node] = self.nodes[2 * node] + delta;
        self.nodes[2 * node + 1] = self.nodes[2 * node + 1] + delta;
    }

    /// Returns the value at `index`, after pushing every delta above it down.
    /// O(log N)
    pub fn get(&mut self, index: usize) -> T {
        check_index(index, self.len);
        let leaf = self.len + index;
        for shift in (1..=depth(leaf)).rev() {
            self.push(leaf >> shift);
        }
        self.nodes[leaf]
    }

    /// Returns the value at `index` without changing the tree.
    /// O(log N)
    pub fn get_imm(&self, index: usize) -> T {
        check_index(index, self.len);
        let mut node = self.len + index;
        let mut res = self.nodes[node];
        while node > 1 {
            node >>= 1;
            res = self.nodes[node] + res;
        }
        res
    }

    /// Pushes all of the deltas into the leaves, and returns the values.
    /// Afterwards every internal node is zero.
    /// O(N)
    pub fn flatten(&mut self) -> &[T] {
        // sons always come after their parents
        for node in 1..self.len {
            self.push(node);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len, "flattened increment tree");
        &self.nodes[self.len..]
    }
}

impl<T: Copy + Default + Add<Output = T>> FromIterator<T> for IncrementTree<T> {
    /// O(N)
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter.into_iter().collect())
    }
}
