//! Generic lazy segment tree.
//!
//! See [`LazyTree`]

use super::*;
use crate::data::{Action, Fold};

/// A segment tree supporting applying updates to segments, and folding segments,
/// for any [`Action`].
///
/// The number of leaves is rounded up to a power of two. The extra leaves hold the
/// identity value and no update is ever applied to them, so they never show up in a fold.
///
/// Every internal node has a pending update. The pending update of a node has already been
/// applied to the node's value, but not to its sons. It gets pushed to the sons only when
/// an operation needs to go below the node. This means that even reading operations
/// ([`LazyTree::get`], [`LazyTree::query`]) push updates around, and need `&mut self`.
///
/// ```
/// use segtrees::{LazyTree, SumAdd};
/// let mut tree: LazyTree<SumAdd<i64>> = (1..=5).collect();
/// tree.update(1..4, 10);
/// assert_eq!(tree.query(0..2), 13);
/// assert_eq!(tree.query(..), 45);
/// assert_eq!(*tree.get(3), 14);
/// ```
#[derive(Clone, Debug)]
pub struct LazyTree<A: Action> {
    len: usize,
    // the number of leaves, a power of two
    base: usize,
    // log2(base). The level of the root.
    height: u32,
    values: Vec<A::Value>,
    // only internal nodes have pending updates. `pending[0]` is unused.
    pending: Vec<A::Update>,
    action: A,
}

impl<A: Action + Default> LazyTree<A> {
    /// Create a tree of `len` identity values.
    pub fn new(len: usize) -> Self {
        Self::with_action(len, A::default())
    }
}

impl<A: Action> LazyTree<A> {
    /// Create a tree of `len` identity values.
    pub fn with_action(len: usize, action: A) -> Self {
        check_len(len);
        let base = len.next_power_of_two();
        #[cfg(feature = "tracing")]
        tracing::trace!(len, base, "new lazy tree");
        LazyTree {
            len,
            base,
            height: base.trailing_zeros(),
            values: vec![action.identity(); 2 * base],
            pending: vec![action.update_identity(); base],
            action,
        }
    }

    /// Create a tree holding `values`.
    /// O(N)
    pub fn from_values(values: Vec<A::Value>, action: A) -> Self {
        let mut res = Self::with_action(values.len(), action);
        let base = res.base;
        for (leaf, value) in res.values[base..].iter_mut().zip(values) {
            *leaf = value;
        }
        res.rebuild();
        res
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: trees can't be empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    fn level(&self, node: usize) -> u32 {
        self.height - depth(node)
    }

    // applies `update` to the subtree of `node`, and keeps it pending for the sons.
    fn apply_at(&mut self, node: usize, update: &A::Update, level: u32) {
        self.values[node] = self.action.apply(&self.values[node], update, level);
        if node < self.base {
            self.pending[node] = self.action.compose(update, &self.pending[node]);
        }
    }

    // moves the pending update of `node` into its sons
    fn push(&mut self, node: usize, level: u32) {
        let update = std::mem::replace(&mut self.pending[node], self.action.update_identity());
        self.apply_at(2 * node, &update, level - 1);
        self.apply_at(2 * node + 1, &update, level - 1);
    }

    // recomputes the value of `node` from its sons, keeping its own pending update
    fn pull(&mut self, node: usize, level: u32) {
        let sons = self
            .action
            .combine(&self.values[2 * node], &self.values[2 * node + 1]);
        self.values[node] = self.action.apply(&sons, &self.pending[node], level);
    }

    // pushes everything pending above `leaf`, from the root down
    fn push_path(&mut self, leaf: usize) {
        for shift in (1..=self.height).rev() {
            self.push(leaf >> shift, shift);
        }
    }

    // recomputes every ancestor of `leaf`, from the bottom up
    fn pull_path(&mut self, leaf: usize) {
        for shift in 1..=self.height {
            self.pull(leaf >> shift, shift);
        }
    }

    // parents come before their sons
    fn push_all(&mut self) {
        for node in 1..self.base {
            let level = self.level(node);
            self.push(node, level);
        }
    }

    /// Overwrites the value at `index`.
    ///
    /// The updates pending above the leaf are pushed down first, so they don't apply
    /// to the new value. The ancestors aren't recalculated: call [`LazyTree::rebuild`]
    /// before folding any segment that contains `index`.
    /// To set a value and keep the tree consistent, use an update on `index..index + 1`.
    ///
    /// O(log N), not O(1): pushing the path is what keeps older updates off the new value.
    pub fn set(&mut self, index: usize, value: A::Value) {
        check_index(index, self.len);
        let leaf = self.base + index;
        self.push_path(leaf);
        self.values[leaf] = value;
    }

    /// Pushes all of the pending updates to the leaves, and recalculates every
    /// internal node from the leaves.
    /// O(N)
    pub fn rebuild(&mut self) {
        self.push_all();
        for node in (1..self.base).rev() {
            self.values[node] = self
                .action
                .combine(&self.values[2 * node], &self.values[2 * node + 1]);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(len = self.len, base = self.base, "rebuilt lazy tree");
    }

    /// Applies `update` to every value in `range`.
    /// O(log N)
    pub fn update<R: RangeBounds<usize>>(&mut self, range: R, update: A::Update) {
        let (start, end) = resolve_range(range, self.len);
        if start == end {
            return;
        }
        let first = self.base + start;
        let last = self.base + end - 1;
        // older updates have to reach the segment's nodes before the new one
        self.push_path(first);
        self.push_path(last);

        let mut b = first;
        let mut e = last + 1;
        let mut level = 0;
        while b < e {
            if b & 1 == 1 {
                self.apply_at(b, &update, level);
                b += 1;
            }
            if e & 1 == 1 {
                e -= 1;
                self.apply_at(e, &update, level);
            }
            b >>= 1;
            e >>= 1;
            level += 1;
        }

        self.pull_path(first);
        self.pull_path(last);
    }

    /// Returns the value at `index`, after pushing every update above it down.
    /// O(log N)
    pub fn get(&mut self, index: usize) -> &A::Value {
        check_index(index, self.len);
        let leaf = self.base + index;
        self.push_path(leaf);
        &self.values[leaf]
    }

    /// Folds the values in `range`, from left to right.
    /// Pushes pending updates down to both ends of the segment.
    /// O(log N)
    pub fn query<R: RangeBounds<usize>>(&mut self, range: R) -> A::Value {
        let (start, end) = resolve_range(range, self.len);
        if start == end {
            return self.action.identity();
        }
        let mut b = self.base + start;
        let mut e = self.base + end;
        self.push_path(b);
        self.push_path(e - 1);
        if e - b == 1 {
            return self.values[b].clone();
        }

        let mut left = self.action.identity();
        let mut right = self.action.identity();
        while b < e {
            if b & 1 == 1 {
                left = self.action.combine(&left, &self.values[b]);
                b += 1;
            }
            if e & 1 == 1 {
                e -= 1;
                right = self.action.combine(&self.values[e], &right);
            }
            b >>= 1;
            e >>= 1;
        }
        self.action.combine(&left, &right)
    }

    /// Folds all of the values.
    pub fn query_all(&mut self) -> A::Value {
        self.query(..)
    }

    /// Pushes all of the pending updates to the leaves, and returns the values.
    /// O(N)
    pub fn flatten(&mut self) -> &[A::Value] {
        self.push_all();
        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len, "flattened lazy tree");
        &self.values[self.base..self.base + self.len]
    }

    /// Checks that every internal node agrees with its sons and its pending update.
    #[cfg(test)]
    fn assert_correctness(&self)
    where
        A::Value: PartialEq + std::fmt::Debug,
    {
        for node in 1..self.base {
            let sons = self
                .action
                .combine(&self.values[2 * node], &self.values[2 * node + 1]);
            let expected = self
                .action
                .apply(&sons, &self.pending[node], self.level(node));
            assert_eq!(self.values[node], expected, "node {node}");
        }
    }
}

impl<A: Action + Default> FromIterator<A::Value> for LazyTree<A> {
    /// O(N)
    fn from_iter<T: IntoIterator<Item = A::Value>>(iter: T) -> Self {
        Self::from_values(iter.into_iter().collect(), A::default())
    }
}
