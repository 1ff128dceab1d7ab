//! Height and invariant checks.
//!
//! Everything here walks the tree with an explicit stack, since a tree built from
//! skewed priorities can be as deep as it is long.

use super::*;

impl<K, P> CartesianTree<K, P> {
    /// The number of edges on the longest path from the root down to a leaf.
    /// A single node has height `0`, and the empty tree has height `-1`.
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut stack: Vec<(NodeId, isize)> = self.root.iter().map(|&id| (id, 0)).collect();
        while let Some((id, depth)) = stack.pop() {
            height = std::cmp::max(height, depth);
            let node = &self.arena[id];
            for child in node.left().into_iter().chain(node.right()) {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    /// Every node reachable from the root, in pre-order.
    fn reachable(&self) -> Vec<NodeId> {
        let mut res = Vec::with_capacity(self.len());
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            res.push(id);
            let node = &self.arena[id];
            stack.extend(node.right());
            stack.extend(node.left());
        }
        res
    }

    /// Checks that the parent relation mirrors the child relations, that the root has
    /// no parent, and that every stored node is reachable from the root.
    /// If it finds a violation, panics.
    pub fn assert_links(&self) {
        if let Some(root) = self.root {
            assert_eq!(self.arena[root].parent(), None, "root has a parent");
        }
        let reachable = self.reachable();
        for &id in reachable.iter() {
            let node = &self.arena[id];
            for child in node.left().into_iter().chain(node.right()) {
                assert_eq!(
                    self.arena[child].parent(),
                    Some(id),
                    "parent of {:?} does not point back at {:?}",
                    child,
                    id
                );
            }
        }
        assert_eq!(reachable.len(), self.len(), "unreachable nodes in the arena");
    }
}

impl<K: Ord, P: Ord> CartesianTree<K, P> {
    /// Checks every parent-son pair: a left son's key is not larger than its
    /// parent's, a right son's key is not smaller, and no son has a smaller
    /// priority than its parent. Returns `false` at the first violation.
    pub fn verify(&self) -> bool {
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = &self.arena[id];
            if let Some(left) = node.left() {
                let left = &self.arena[left];
                if left.key() > node.key() || left.priority() < node.priority() {
                    return false;
                }
            }
            if let Some(right) = node.right() {
                let right = &self.arena[right];
                if right.key() < node.key() || right.priority() < node.priority() {
                    return false;
                }
            }
            stack.extend(node.left().into_iter().chain(node.right()));
        }
        true
    }

    /// Checks the links, and that the in-order sequence of keys is sorted.
    /// Says nothing about priorities, so it holds after [`insert_unordered`](Self::insert_unordered)
    /// and after manual rotations.
    /// If it finds a violation, panics.
    pub fn assert_structure(&self) {
        self.assert_links();
        let keys: Vec<&K> = self.iter().map(|(k, _)| k).collect();
        assert!(
            keys.windows(2).all(|w| w[0] <= w[1]),
            "in-order keys are not sorted"
        );
    }

    /// Checks that invariants remain correct: the links, the search order over the
    /// whole tree, and the heap order on priorities.
    /// If it finds a violation, panics.
    pub fn assert_correctness(&self) {
        self.assert_structure();
        assert!(self.verify(), "parent-son ordering violated");
    }
}
