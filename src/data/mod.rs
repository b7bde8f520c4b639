//! The operator traits that the trees are generic over.
//!
//! A tree stores one [`Fold::Value`] per node. The lazy tree additionally stores one
//! [`Action::Update`] per internal node: an update that was already applied to the node's
//! own value, but not yet to its sons.
//!
//! Operators are passed by value and called through `&self`, so they can be zero sized
//! marker types (see [`example_data`]) or carry closures (see [`FnFold`] and [`FnAction`]).

pub mod example_data;

/// An associative operation with an identity element.
///
/// The trees assume, without checking, that for all `a, b, c`:
/// `combine(a, combine(b, c)) == combine(combine(a, b), c)` and
/// `combine(identity(), a) == combine(a, identity()) == a`.
///
/// `combine` doesn't need to be commutative. The trees always combine
/// values in left to right order.
pub trait Fold {
    type Value: Clone;

    /// The fold of the empty range.
    fn identity(&self) -> Self::Value;

    /// Combines the aggregates of two adjacent segments, `left` coming first.
    fn combine(&self, left: &Self::Value, right: &Self::Value) -> Self::Value;
}

/// Updates that can be applied to whole segments lazily.
///
/// Requirements, for all updates `f, g`, values `a, b` and levels `l`:
/// * `apply(a, update_identity(), l) == a`
/// * `apply(apply(a, g, l), f, l) == apply(a, compose(f, g), l)`
/// * `apply(combine(a, b), f, l + 1) == combine(apply(a, f, l), apply(b, f, l))`
///   whenever `a` and `b` are aggregates of sibling subtrees of level `l`.
pub trait Action: Fold {
    type Update: Clone;

    /// The update that does nothing.
    fn update_identity(&self) -> Self::Update;

    /// Compose right to left. i.e., what chronologically happens first, is on the right.
    fn compose(&self, later: &Self::Update, earlier: &Self::Update) -> Self::Update;

    /// Applies `update` to the aggregate of a subtree of height `level`.
    /// Leaves are at level 0, and a subtree of level `l` has [`width(l)`](width) leaves.
    fn apply(&self, value: &Self::Value, update: &Self::Update, level: u32) -> Self::Value;
}

/// The number of leaves under a node of the given level.
pub fn width(level: u32) -> usize {
    1 << level
}

/// A [`Fold`] made out of an identity value and a closure.
///
/// ```
/// use segtrees::{FnFold, FoldTree};
/// let gcd = FnFold::new(0u64, |&a: &u64, &b: &u64| {
///     let (mut a, mut b) = (a, b);
///     while b != 0 {
///         let t = a % b;
///         a = b;
///         b = t;
///     }
///     a
/// });
/// let tree = FoldTree::from_values(vec![12, 18, 30, 7], gcd);
/// assert_eq!(tree.query(0..3), 6);
/// assert_eq!(tree.query(..), 1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnFold<T, C> {
    identity: T,
    combine: C,
}

impl<T, C> FnFold<T, C>
where
    T: Clone,
    C: Fn(&T, &T) -> T,
{
    pub fn new(identity: T, combine: C) -> Self {
        FnFold { identity, combine }
    }
}

impl<T, C> Fold for FnFold<T, C>
where
    T: Clone,
    C: Fn(&T, &T) -> T,
{
    type Value = T;

    fn identity(&self) -> T {
        self.identity.clone()
    }

    fn combine(&self, left: &T, right: &T) -> T {
        (self.combine)(left, right)
    }
}

/// An [`Action`] made out of a [`Fold`], an identity update and two closures.
///
/// ```
/// use segtrees::{FnAction, LazyTree, Sum};
/// // range assignment over sums. `None` means "nothing pending".
/// let assign = FnAction::new(
///     Sum::<i64>::new(),
///     None,
///     |later: &Option<i64>, earlier: &Option<i64>| later.or(*earlier),
///     |value: &i64, update: &Option<i64>, level: u32| match update {
///         Some(x) => x * (1i64 << level),
///         None => *value,
///     },
/// );
/// let mut tree = LazyTree::from_values(vec![1, 2, 3, 4, 5], assign);
/// tree.update(1..4, Some(10));
/// assert_eq!(tree.query(..), 36);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnAction<F: Fold, U, C, P> {
    fold: F,
    update_identity: U,
    compose: C,
    apply: P,
}

impl<F, U, C, P> FnAction<F, U, C, P>
where
    F: Fold,
    U: Clone,
    C: Fn(&U, &U) -> U,
    P: Fn(&F::Value, &U, u32) -> F::Value,
{
    pub fn new(fold: F, update_identity: U, compose: C, apply: P) -> Self {
        FnAction {
            fold,
            update_identity,
            compose,
            apply,
        }
    }
}

impl<F, U, C, P> Fold for FnAction<F, U, C, P>
where
    F: Fold,
{
    type Value = F::Value;

    fn identity(&self) -> F::Value {
        self.fold.identity()
    }

    fn combine(&self, left: &F::Value, right: &F::Value) -> F::Value {
        self.fold.combine(left, right)
    }
}

impl<F, U, C, P> Action for FnAction<F, U, C, P>
where
    F: Fold,
    U: Clone,
    C: Fn(&U, &U) -> U,
    P: Fn(&F::Value, &U, u32) -> F::Value,
{
    type Update = U;

    fn update_identity(&self) -> U {
        self.update_identity.clone()
    }

    fn compose(&self, later: &U, earlier: &U) -> U {
        (self.compose)(later, earlier)
    }

    fn apply(&self, value: &F::Value, update: &U, level: u32) -> F::Value {
        (self.apply)(value, update, level)
    }
}
