//! Random priorities.
//!
//! A Cartesian tree whose priorities are drawn independently and uniformly at random
//! has expected height `O(log n)`, whatever the order the keys arrive in.
//! [`PriorityGenerator`] supplies such priorities, and can be seeded so that a
//! sequence of operations, and the shape of the resulting tree, can be reproduced.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::node::NodeId;
use crate::tree::CartesianTree;

/// The type used for random priorities.
pub type Priority = u64;

/// A source of random priorities.
#[derive(Clone, Debug)]
pub struct PriorityGenerator {
    rng: StdRng,
}

impl PriorityGenerator {
    /// A generator seeded from system entropy.
    pub fn new() -> Self {
        PriorityGenerator {
            rng: StdRng::from_entropy(),
        }
    }

    /// A generator that always produces the same sequence for the same seed.
    pub fn from_seed(seed: u64) -> Self {
        PriorityGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next_priority(&mut self) -> Priority {
        self.rng.gen()
    }
}

impl Default for PriorityGenerator {
    fn default() -> Self {
        PriorityGenerator::new()
    }
}

impl Iterator for PriorityGenerator {
    type Item = Priority;

    fn next(&mut self) -> Option<Priority> {
        Some(self.next_priority())
    }
}

impl<K: Ord> CartesianTree<K, Priority> {
    /// Inserts the key with a random priority drawn from the thread-local generator.
    ///```
    /// use cartesian_tree::{CartesianTree, Priority};
    ///
    /// let mut tree: CartesianTree<i32, Priority> = CartesianTree::new();
    /// for key in 0..1000 {
    ///     tree.insert_random(key);
    /// }
    ///
    /// assert!(tree.iter().map(|(k, _)| *k).eq(0..1000));
    /// # tree.assert_correctness();
    ///```
    pub fn insert_random(&mut self, key: K) -> NodeId {
        self.insert(key, rand::random())
    }

    /// Inserts the key with the next priority from `priorities`.
    pub fn insert_with(&mut self, key: K, priorities: &mut PriorityGenerator) -> NodeId {
        self.insert(key, priorities.next_priority())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generators_repeat() {
        let a: Vec<_> = PriorityGenerator::from_seed(54).take(20).collect();
        let b: Vec<_> = PriorityGenerator::from_seed(54).take(20).collect();
        let c: Vec<_> = PriorityGenerator::from_seed(55).take(20).collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn seeded_trees_have_the_same_shape() {
        let build = || {
            let mut priorities = PriorityGenerator::from_seed(7);
            let mut tree: CartesianTree<u32, Priority> = CartesianTree::new();
            for key in 0..300 {
                tree.insert_with(key, &mut priorities);
            }
            tree
        };
        let t1 = build();
        let t2 = build();
        assert!(t1.pre_order().eq(t2.pre_order()));
        assert_eq!(t1.height(), t2.height());
        t1.assert_correctness();
    }
}
