#![allow(dead_code)]

use rand::Rng;
use segtrees::*;
use std::ops::Range;

/// Something to perform in one round of tests
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundAction<V, U> {
    Update { range: Range<usize>, update: U },
    Query { range: Range<usize> },
    Get { index: usize },
    Set { index: usize, value: V },
}

/// A plain vector that does everything the slow way.
pub struct Naive<A: Action> {
    pub values: Vec<A::Value>,
    action: A,
}

impl<A: Action> Naive<A> {
    pub fn new(values: Vec<A::Value>, action: A) -> Self {
        Naive { values, action }
    }

    pub fn update(&mut self, range: Range<usize>, update: &A::Update) {
        for value in &mut self.values[range] {
            *value = self.action.apply(value, update, 0);
        }
    }

    pub fn query(&self, range: Range<usize>) -> A::Value {
        self.values[range]
            .iter()
            .fold(self.action.identity(), |acc, v| self.action.combine(&acc, v))
    }
}

pub fn random_range(rng: &mut impl Rng, len: usize) -> Range<usize> {
    let res = (rng.gen_range(0..len + 1), rng.gen_range(0..len + 1));
    if res.0 <= res.1 {
        res.0..res.1
    } else {
        res.1..res.0
    }
}

/// Runs the same rounds on a [`LazyTree`] and on a [`Naive`] vector, and compares every result.
/// `Set` rounds are performed as updates on a single index, so the tree stays consistent.
pub fn check_lazy_against_naive<A>(
    initial: &[A::Value],
    rounds: &[RoundAction<A::Value, A::Update>],
    set_as: impl Fn(&A::Value) -> A::Update,
) where
    A: Action + Default,
    A::Value: PartialEq + std::fmt::Debug,
{
    let mut tree: LazyTree<A> = initial.iter().cloned().collect();
    let mut naive = Naive::new(initial.to_vec(), A::default());
    let len = initial.len();

    for (round, action) in rounds.iter().enumerate() {
        use RoundAction::*;
        match action {
            Update { range, update } => {
                tree.update(range.clone(), update.clone());
                naive.update(range.clone(), update);
            }
            Query { range } => {
                assert_eq!(
                    tree.query(range.clone()),
                    naive.query(range.clone()),
                    "round {round}: query {range:?}"
                );
            }
            Get { index } => {
                assert_eq!(tree.get(*index), &naive.values[*index], "round {round}");
            }
            Set { index, value } => {
                let update = set_as(value);
                tree.update(*index..*index + 1, update.clone());
                naive.update(*index..*index + 1, &update);
            }
        }
    }
    assert_eq!(tree.flatten(), &naive.values[..]);
    assert_eq!(tree.query(0..len), naive.query(0..len));
}

pub fn random_rounds<R: Rng, V, U>(
    rng: &mut R,
    len: usize,
    count: usize,
    mut random_update: impl FnMut(&mut R) -> U,
) -> Vec<RoundAction<V, U>> {
    let mut rounds = Vec::with_capacity(count);
    for _ in 0..count {
        let round = match rng.gen_range(0..3) {
            0 => RoundAction::Update {
                range: random_range(rng, len),
                update: random_update(&mut *rng),
            },
            1 => RoundAction::Query {
                range: random_range(rng, len),
            },
            _ => RoundAction::Get {
                index: rng.gen_range(0..len),
            },
        };
        rounds.push(round);
    }
    rounds
}
