//! Segment trees stored as implicit binary trees in flat arrays.
//!
//! * [`FoldTree`]: set single values, fold segments. Eager.
//! * [`IncrementTree`]: add to segments, read single values. Lazy, additive only.
//! * [`LazyTree`]: apply any [`Action`] to segments, fold segments. Lazy.
//!
//! The operators are supplied through the [`Fold`] and [`Action`] traits.
//! Common ones are in [`example_data`], and [`FnFold`]/[`FnAction`] turn closures into operators.
//!
//! ```
//! use segtrees::*;
//!
//! let mut sums: FoldTree<Sum<i32>> = vec![1, 2, 3].into_iter().collect();
//! assert_eq!(sums.query_all(), 6);
//! sums.set(0, 2);
//! assert_eq!(sums.query(0..2), 4);
//! ```
//!
//! With the `tracing` feature, the O(N) operations (construction, `rebuild`, `flatten`)
//! emit `tracing` events. `cargo test --features tracing` also runs the tests that check them.
//!
//! Every operation panics when given an index or a range outside of the tree,
//! or a range whose start is after its end. Trees can't have length 0.

pub mod data;
pub mod trees;

pub use data::example_data;
pub use data::example_data::*;
pub use data::{width, Action, FnAction, FnFold, Fold};
pub use trees::*;
