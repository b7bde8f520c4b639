//! Bottom-up segment tree with eager updates.
//!
//! See [`FoldTree`]

use super::*;
use crate::data::Fold;

/// A segment tree supporting setting single values, and folding any segment of values.
///
/// There is no deferred state: every [`FoldTree::set`] recomputes all the ancestors of the
/// changed leaf right away, so queries only need `&self`.
///
/// Any positive length works, not only powers of two.
///
/// ```
/// use segtrees::{FoldTree, Max};
/// let mut tree: FoldTree<Max<i32>> = vec![3, 1, 4, 1, 5].into_iter().collect();
/// assert_eq!(tree.query(1..4), 4);
/// tree.set(2, 0);
/// assert_eq!(tree.query(1..4), 1);
/// ```
#[derive(Clone, Debug)]
pub struct FoldTree<F: Fold> {
    len: usize,
    // `nodes[len..]` are the leaves, `nodes[0]` is unused.
    nodes: Vec<F::Value>,
    fold: F,
}

impl<F: Fold + Default> FoldTree<F> {
    /// Create a tree of `len` identity values.
    pub fn new(len: usize) -> Self {
        Self::with_fold(len, F::default())
    }
}

impl<F: Fold> FoldTree<F> {
    /// Create a tree of `len` identity values, folded with `fold`.
    pub fn with_fold(len: usize, fold: F) -> Self {
        check_len(len);
        let nodes = vec![fold.identity(); 2 * len];
        #[cfg(feature = "tracing")]
        tracing::trace!(len, "new fold tree");
        FoldTree { len, nodes, fold }
    }

    /// Create a tree holding `values`.
    /// O(N)
    pub fn from_values(values: Vec<F::Value>, fold: F) -> Self {
        let len = values.len();
        check_len(len);
        let mut nodes = Vec::with_capacity(2 * len);
        nodes.resize(len, fold.identity());
        nodes.extend(values);

        let mut res = FoldTree { len, nodes, fold };
        res.rebuild();
        #[cfg(feature = "tracing")]
        tracing::trace!(len, "built fold tree");
        res
    }

    // recomputes every internal node
    fn rebuild(&mut self) {
        for node in (1..self.len).rev() {
            self.pull(node);
        }
    }

    fn pull(&mut self, node: usize) {
        self.nodes[node] = self
            .fold
            .combine(&self.nodes[2 * node], &self.nodes[2 * node + 1]);
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: trees can't be empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The values themselves.
    pub fn leaves(&self) -> &[F::Value] {
        &self.nodes[self.len..]
    }

    /// The value at `index`.
    pub fn get(&self, index: usize) -> &F::Value {
        check_index(index, self.len);
        &self.nodes[self.len + index]
    }

    /// Sets the value at `index` to be `value`, and recalculates.
    /// O(log N)
    pub fn set(&mut self, index: usize, value: F::Value) {
        check_index(index, self.len);
        let mut node = self.len + index;
        self.nodes[node] = value;
        node >>= 1;
        while node > 0 {
            self.pull(node);
            node >>= 1;
        }
    }

    /// Folds the values in `range`, from left to right.
    /// O(log N)
    pub fn query<R: RangeBounds<usize>>(&self, range: R) -> F::Value {
        let (start, end) = resolve_range(range, self.len);
        match end - start {
            0 => return self.fold.identity(),
            // no combining with the identity for a single value
            1 => return self.nodes[self.len + start].clone(),
            _ => (),
        }

        let mut b = start + self.len;
        let mut e = end + self.len;
        let mut left = self.fold.identity();
        let mut right = self.fold.identity();
        while b < e {
            if b & 1 == 1 {
                left = self.fold.combine(&left, &self.nodes[b]);
                b += 1;
            }
            if e & 1 == 1 {
                e -= 1;
                right = self.fold.combine(&self.nodes[e], &right);
            }
            b >>= 1;
            e >>= 1;
        }
        // The order here is important for non-commutative folds.
        self.fold.combine(&left, &right)
    }

    /// Folds all of the values.
    pub fn query_all(&self) -> F::Value {
        self.query(..)
    }
}

impl<F: Fold + Default> FromIterator<F::Value> for FoldTree<F> {
    /// O(N)
    fn from_iter<T: IntoIterator<Item = F::Value>>(iter: T) -> Self {
        Self::from_values(iter.into_iter().collect(), F::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::example_data::*;
    use itertools::iproduct;

    #[test]
    fn sum_small() {
        let mut sum: FoldTree<Sum<i32>> = vec![1, 2, 3].into_iter().collect();
        assert_eq!(sum.query_all(), 6);
        sum.set(0, 2);
        sum.set(1, 3);
        sum.set(2, 4);
        assert_eq!(sum.query_all(), 9);
    }

    #[test]
    fn sum_arithmetic_series() {
        for len in 1..128usize {
            let mut sum = FoldTree::<Sum<usize>>::new(len);
            for i in 0..len {
                sum.set(i, i);
            }
            for (w, i) in iproduct!(1..=len, 0..len) {
                if i + w > len {
                    continue;
                }
                // sum of i..i+w
                let expected = (i + w) * (i + w - 1) / 2 - i * i.saturating_sub(1) / 2;
                assert_eq!(sum.query(i..i + w), expected, "len {len}, {i}..{}", i + w);
            }
        }
    }

    #[test]
    fn max_of_increasing() {
        for len in 1..128i32 {
            let mut max = FoldTree::<Max<i32>>::new(len as usize);
            for i in 0..len {
                max.set(i as usize, i);
            }
            for w in 1..=len {
                for i in 0..=len - w {
                    assert_eq!(max.query(i as usize..(i + w) as usize), i + w - 1);
                }
            }
        }
    }

    #[test]
    fn empty_ranges_are_identity() {
        let tree: FoldTree<Min<i64>> = (0..10).collect();
        for k in 0..=10 {
            assert_eq!(tree.query(k..k), i64::MAX);
        }
        assert_eq!(tree.query_all(), 0);
    }

    #[test]
    fn concat_keeps_order() {
        let words = ["a", "b", "c", "d", "e", "f", "g"];
        let tree: FoldTree<Concat> = words.iter().map(|s| s.to_string()).collect();
        for b in 0..=words.len() {
            for e in b..=words.len() {
                assert_eq!(tree.query(b..e), words[b..e].concat());
            }
        }
    }

    #[test]
    fn set_twice_is_set_once() {
        let mut once: FoldTree<Sum<i32>> = (1..=9).collect();
        let mut twice = once.clone();
        once.set(4, -3);
        twice.set(4, -3);
        twice.set(4, -3);
        assert_eq!(once.nodes, twice.nodes);
        assert_eq!(*once.get(4), -3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn set_out_of_bounds() {
        let mut tree = FoldTree::<Sum<i32>>::new(4);
        tree.set(4, 1);
    }

    #[test]
    #[should_panic(expected = "length 0")]
    fn zero_length() {
        FoldTree::<Sum<i32>>::new(0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn inclusive_query_past_usize() {
        let tree: FoldTree<Sum<i32>> = vec![1, 2, 3].into_iter().collect();
        tree.query(0..=usize::MAX);
    }
}
