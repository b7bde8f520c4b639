//! Ready-made operators for the common cases.
//!
//! All of these are zero sized (except for the phantom type), so
//! `FoldTree<Max<i32>>` costs nothing more than the values themselves.

use super::*;
use std::marker::PhantomData;
use std::ops::Add;

macro_rules! marker {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        pub struct $name<T> {
            phantom: PhantomData<T>,
        }

        impl<T> $name<T> {
            pub const fn new() -> Self {
                $name {
                    phantom: PhantomData,
                }
            }
        }

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                Self::new()
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> std::fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(stringify!($name))
            }
        }
    };
}

marker! {
    /// Sums. The identity is `T::default()`.
    Sum
}
marker! {
    /// Maximums. The identity is the smallest value of the type.
    Max
}
marker! {
    /// Minimums. The identity is the largest value of the type.
    Min
}
marker! {
    /// Sums, with updates that add a delta to every element of a segment.
    /// The delta gets multiplied by the width of the subtree it is applied to.
    SumAdd
}
marker! {
    /// Maximums, with updates that add a delta to every element of a segment.
    /// Unlike [`SumAdd`], the delta isn't scaled by the width. Addition saturates,
    /// so that the identity stays the identity.
    MaxAdd
}
marker! {
    /// Sums, with updates that multiply every element of a segment by a factor.
    SumMul
}
marker! {
    /// Sums, with affine updates `x => mul * x + add`.
    /// These don't commute with each other.
    SumAffine
}

impl<T: Copy + Default + Add<Output = T>> Fold for Sum<T> {
    type Value = T;

    fn identity(&self) -> T {
        T::default()
    }

    fn combine(&self, left: &T, right: &T) -> T {
        *left + *right
    }
}

/// String concatenation. Not commutative.
#[derive(Clone, Copy, Default, Debug)]
pub struct Concat;

impl Fold for Concat {
    type Value = String;

    fn identity(&self) -> String {
        String::new()
    }

    fn combine(&self, left: &String, right: &String) -> String {
        let mut res = String::with_capacity(left.len() + right.len());
        res.push_str(left);
        res.push_str(right);
        res
    }
}

/// An affine update `x => mul * x + add`, as used by [`SumAffine`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Affine<T> {
    pub mul: T,
    pub add: T,
}

macro_rules! impl_arithmetic {
    ($($t:ty),*) => {$(
        impl Fold for SumAdd<$t> {
            type Value = $t;
            fn identity(&self) -> $t { 0 as $t }
            fn combine(&self, left: &$t, right: &$t) -> $t { *left + *right }
        }

        impl Action for SumAdd<$t> {
            type Update = $t;
            fn update_identity(&self) -> $t { 0 as $t }
            fn compose(&self, later: &$t, earlier: &$t) -> $t { *later + *earlier }
            fn apply(&self, value: &$t, update: &$t, level: u32) -> $t {
                *value + *update * (width(level) as $t)
            }
        }

        impl Fold for SumMul<$t> {
            type Value = $t;
            fn identity(&self) -> $t { 0 as $t }
            fn combine(&self, left: &$t, right: &$t) -> $t { *left + *right }
        }

        impl Action for SumMul<$t> {
            type Update = $t;
            fn update_identity(&self) -> $t { 1 as $t }
            fn compose(&self, later: &$t, earlier: &$t) -> $t { *later * *earlier }
            // multiplication distributes over the sum, the width doesn't matter
            fn apply(&self, value: &$t, update: &$t, _level: u32) -> $t {
                *value * *update
            }
        }

        impl Fold for SumAffine<$t> {
            type Value = $t;
            fn identity(&self) -> $t { 0 as $t }
            fn combine(&self, left: &$t, right: &$t) -> $t { *left + *right }
        }

        impl Action for SumAffine<$t> {
            type Update = Affine<$t>;
            fn update_identity(&self) -> Affine<$t> {
                Affine { mul: 1 as $t, add: 0 as $t }
            }
            fn compose(&self, later: &Affine<$t>, earlier: &Affine<$t>) -> Affine<$t> {
                Affine {
                    mul: later.mul * earlier.mul,
                    add: later.mul * earlier.add + later.add,
                }
            }
            fn apply(&self, value: &$t, update: &Affine<$t>, level: u32) -> $t {
                update.mul * *value + update.add * (width(level) as $t)
            }
        }
    )*};
}

impl_arithmetic!(i32, i64, i128, isize, u32, u64, u128, usize, f32, f64);

macro_rules! impl_ordered {
    ($($t:ty),*) => {$(
        impl Fold for Max<$t> {
            type Value = $t;
            fn identity(&self) -> $t { <$t>::MIN }
            fn combine(&self, left: &$t, right: &$t) -> $t { std::cmp::max(*left, *right) }
        }

        impl Fold for Min<$t> {
            type Value = $t;
            fn identity(&self) -> $t { <$t>::MAX }
            fn combine(&self, left: &$t, right: &$t) -> $t { std::cmp::min(*left, *right) }
        }

        impl Fold for MaxAdd<$t> {
            type Value = $t;
            fn identity(&self) -> $t { <$t>::MIN }
            fn combine(&self, left: &$t, right: &$t) -> $t { std::cmp::max(*left, *right) }
        }

        impl Action for MaxAdd<$t> {
            type Update = $t;
            fn update_identity(&self) -> $t { 0 }
            fn compose(&self, later: &$t, earlier: &$t) -> $t { later.saturating_add(*earlier) }
            fn apply(&self, value: &$t, update: &$t, _level: u32) -> $t {
                value.saturating_add(*update)
            }
        }
    )*};
}

impl_ordered!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identities() {
        assert_eq!(Sum::<i32>::new().identity(), 0);
        assert_eq!(Max::<i8>::new().identity(), i8::MIN);
        assert_eq!(Min::<u16>::new().identity(), u16::MAX);
        assert_eq!(Concat.identity(), "");
        assert_eq!(SumMul::<i64>::new().update_identity(), 1);
    }

    #[test]
    fn sum_add_scales_by_width() {
        let op = SumAdd::<i64>::new();
        assert_eq!(op.apply(&10, &3, 0), 13);
        assert_eq!(op.apply(&10, &3, 2), 22);

        let op = MaxAdd::<i64>::new();
        assert_eq!(op.apply(&10, &3, 2), 13);
        assert_eq!(op.apply(&i64::MIN, &-3, 5), i64::MIN);
    }

    #[test]
    fn affine_compose_order() {
        let op = SumAffine::<i64>::new();
        let double = Affine { mul: 2, add: 0 };
        let inc = Affine { mul: 1, add: 1 };
        // first double, then increment
        let f = op.compose(&inc, &double);
        assert_eq!(op.apply(&5, &f, 0), 11);
        assert_eq!(op.apply(&op.apply(&5, &double, 0), &inc, 0), 11);
        // first increment, then double
        let g = op.compose(&double, &inc);
        assert_eq!(op.apply(&5, &g, 0), 12);
    }
}
