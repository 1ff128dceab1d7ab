#![allow(dead_code)]

pub use cartesian_tree::*;

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

/// Installs a test logger once, so that `RUST_LOG=trace` shows rotations.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The letters example: inserted in this order, no rotation ever happens.
pub const LETTERS: [(char, u32); 10] = [
    ('H', 1),
    ('D', 2),
    ('B', 3),
    ('A', 5),
    ('E', 6),
    ('F', 7),
    ('C', 8),
    ('G', 9),
    ('I', 10),
    ('J', 12),
];

pub fn tree_from(pairs: &[(char, u32)]) -> CartesianTree<char, u32> {
    let mut tree = CartesianTree::new();
    for &(key, priority) in pairs {
        tree.insert(key, priority);
    }
    tree
}

pub fn in_order_keys<K: Clone, P>(tree: &CartesianTree<K, P>) -> Vec<K> {
    tree.in_order().map(|(k, _)| k.clone()).collect()
}

pub fn pre_order_pairs<K: Clone, P: Clone>(tree: &CartesianTree<K, P>) -> Vec<(K, P)> {
    tree.pre_order()
        .map(|(k, p)| (k.clone(), p.clone()))
        .collect()
}

pub fn is_sorted<T: Ord>(items: &[T]) -> bool {
    items.iter().tuple_windows().all(|(a, b)| a <= b)
}

/// Shuffled keys `0..len` with uniformly random priorities, as a benchmark driver
/// would generate them.
pub fn random_pairs<R: Rng>(rng: &mut R, len: u32) -> Vec<(u32, u64)> {
    let mut keys: Vec<u32> = (0..len).collect();
    keys.shuffle(rng);
    keys.into_iter().map(|k| (k, rng.gen())).collect()
}
