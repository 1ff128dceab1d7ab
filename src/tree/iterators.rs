//! Traversals over a [`CartesianTree`].
//!
//! The iterators keep their own stack of pending nodes instead of recursing, so
//! they work on trees of any depth. Each call to a traversal method starts a new,
//! independent pass.

use super::*;

/// Pre-order traversal: a node, then its left subtree, then its right subtree.
pub struct PreOrder<'a, K, P> {
    arena: &'a Arena<K, P>,
    stack: Vec<NodeId>,
}

impl<'a, K, P> Iterator for PreOrder<'a, K, P> {
    type Item = (&'a K, &'a P);

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let node = &arena[self.stack.pop()?];
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some((node.key(), node.priority()))
    }
}

/// In-order traversal: a node's left subtree, then the node, then its right subtree.
/// Yields the keys in sorted order.
pub struct InOrder<'a, K, P> {
    arena: &'a Arena<K, P>,
    // the nodes whose left subtree is being walked
    stack: Vec<NodeId>,
    // root of the subtree to walk next
    pending: Option<NodeId>,
}

impl<'a, K, P> Iterator for InOrder<'a, K, P> {
    type Item = (&'a K, &'a P);

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        while let Some(id) = self.pending {
            self.stack.push(id);
            self.pending = arena[id].left();
        }
        let node = &arena[self.stack.pop()?];
        self.pending = node.right();
        Some((node.key(), node.priority()))
    }
}

/// Owning in-order iterator, yielding the `(key, priority)` pairs of a consumed tree.
pub struct IntoIter<K, P> {
    arena: Arena<K, P>,
    stack: Vec<NodeId>,
    pending: Option<NodeId>,
}

impl<K, P> Iterator for IntoIter<K, P> {
    type Item = (K, P);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.pending {
            self.stack.push(id);
            self.pending = self.arena[id].left();
        }
        let id = self.stack.pop()?;
        // the left subtree is done, and the right one is all that's still needed
        self.pending = self.arena[id].right();
        self.arena.remove(id).map(Node::into_pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.arena.len(), Some(self.arena.len()))
    }
}

impl<K, P> ExactSizeIterator for IntoIter<K, P> {}

impl<K, P> CartesianTree<K, P> {
    pub fn pre_order(&self) -> PreOrder<'_, K, P> {
        PreOrder {
            arena: &self.arena,
            stack: self.root.into_iter().collect(),
        }
    }

    pub fn in_order(&self) -> InOrder<'_, K, P> {
        InOrder {
            arena: &self.arena,
            stack: vec![],
            pending: self.root,
        }
    }

    /// Iterates over the whole tree in key order. Same as [`in_order`](Self::in_order).
    ///```
    /// use cartesian_tree::CartesianTree;
    ///
    /// let tree: CartesianTree<_, _> = vec![(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().map(|(k, _)| *k).collect::<Vec<_>>(), vec![1, 2, 3]);
    /// # tree.assert_correctness();
    ///```
    pub fn iter(&self) -> InOrder<'_, K, P> {
        self.in_order()
    }
}

impl<'a, K, P> IntoIterator for &'a CartesianTree<K, P> {
    type Item = (&'a K, &'a P);
    type IntoIter = InOrder<'a, K, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

impl<K, P> IntoIterator for CartesianTree<K, P> {
    type Item = (K, P);
    type IntoIter = IntoIter<K, P>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            arena: self.arena,
            stack: vec![],
            pending: self.root,
        }
    }
}

impl<K: Ord, P: Ord> std::iter::FromIterator<(K, P)> for CartesianTree<K, P> {
    /// Inserts the pairs one by one with [`CartesianTree::insert`].
    fn from_iter<T: IntoIterator<Item = (K, P)>>(iter: T) -> Self {
        let mut tree = CartesianTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, P: Ord> Extend<(K, P)> for CartesianTree<K, P> {
    fn extend<T: IntoIterator<Item = (K, P)>>(&mut self, iter: T) {
        for (key, priority) in iter {
            self.insert(key, priority);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CartesianTree<char, u32> {
        vec![('D', 2), ('B', 3), ('F', 4), ('A', 6), ('C', 5), ('E', 1)]
            .into_iter()
            .collect()
    }

    #[test]
    fn traversal_orders() {
        let tree = sample();
        // E is the root, with D below it on the left
        let pre: String = tree.pre_order().map(|(k, _)| *k).collect();
        assert_eq!(pre, "EDBACF");
        let ino: String = tree.in_order().map(|(k, _)| *k).collect();
        assert_eq!(ino, "ABCDEF");
    }

    #[test]
    fn traversals_are_restartable() {
        let tree = sample();
        let mut first = tree.pre_order();
        first.next();
        first.next();
        let all: Vec<_> = tree.pre_order().collect();
        assert_eq!(all.len(), 6);
        assert_eq!(first.count(), 4);
        assert_eq!(tree.iter().count(), (&tree).into_iter().count());
    }

    #[test]
    fn owning_iterator() {
        let tree = sample();
        let iter = tree.into_iter();
        assert_eq!(iter.len(), 6);
        let pairs: Vec<_> = iter.collect();
        assert_eq!(
            pairs,
            vec![('A', 6), ('B', 3), ('C', 5), ('D', 2), ('E', 1), ('F', 4)]
        );
    }

    #[test]
    fn empty_traversals() {
        let tree: CartesianTree<u8, u8> = CartesianTree::new();
        assert_eq!(tree.pre_order().next(), None);
        assert_eq!(tree.in_order().next(), None);
        assert_eq!(tree.into_iter().next(), None);
    }
}
