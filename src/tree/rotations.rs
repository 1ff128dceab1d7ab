use super::*;

impl<K, P> CartesianTree<K, P> {
    /// Performs a right rotation, lifting `current` above `parent`.
    /// `parent` becomes the right son of `current`, and the former right son of
    /// `current` moves over to be the left son of `parent`.
    ///
    /// Returns [`None`] and does nothing unless `current` is the left son of `parent`.
    ///
    /// The search order is preserved; the heap order is not checked.
    pub fn rotate_right(&mut self, current: NodeId, parent: NodeId) -> Option<()> {
        if self.arena.get(parent)?.left() != Some(current) {
            return None;
        }
        self.rotate(current, parent, Side::Left);
        Some(())
    }

    /// Performs a left rotation, lifting `current` above `parent`.
    /// `parent` becomes the left son of `current`, and the former left son of
    /// `current` moves over to be the right son of `parent`.
    ///
    /// Returns [`None`] and does nothing unless `current` is the right son of `parent`.
    ///
    /// The search order is preserved; the heap order is not checked.
    pub fn rotate_left(&mut self, current: NodeId, parent: NodeId) -> Option<()> {
        if self.arena.get(parent)?.right() != Some(current) {
            return None;
        }
        self.rotate(current, parent, Side::Right);
        Some(())
    }

    /// Lifts `current`, which must be the `side` son of `parent`, one level up.
    pub(super) fn rotate(&mut self, current: NodeId, parent: NodeId, side: Side) {
        log::trace!("rotating {:?} above {:?}", current, parent);
        let inner = self.arena[current].child(side.flip());
        self.arena[parent].set_child(side, inner);
        if let Some(inner) = inner {
            self.arena[inner].set_parent(Some(parent));
        }
        self.arena[current].set_child(side.flip(), Some(parent));

        let grandparent = self.arena[parent].parent();
        self.arena[current].set_parent(grandparent);
        self.arena[parent].set_parent(Some(current));
        match grandparent {
            Some(grandparent) => {
                let node = &mut self.arena[grandparent];
                if node.left() == Some(parent) {
                    node.set_left(Some(current));
                } else {
                    node.set_right(Some(current));
                }
            }
            None => self.root = Some(current),
        }
    }

    /// Which son of `parent` the node `child` is.
    pub(super) fn side_of(&self, child: NodeId, parent: NodeId) -> Side {
        if self.arena[parent].left() == Some(child) {
            Side::Left
        } else {
            Side::Right
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ```text
    ///       D
    ///      / \
    ///     B   E
    ///    / \
    ///   A   C
    /// ```
    fn sample() -> (CartesianTree<char, u32>, [NodeId; 5]) {
        let mut tree = CartesianTree::new();
        let d = tree.insert_unordered('D', 0);
        let b = tree.insert_unordered('B', 0);
        let e = tree.insert_unordered('E', 0);
        let a = tree.insert_unordered('A', 0);
        let c = tree.insert_unordered('C', 0);
        (tree, [a, b, c, d, e])
    }

    fn pre_order_keys(tree: &CartesianTree<char, u32>) -> String {
        tree.pre_order().map(|(k, _)| *k).collect()
    }

    #[test]
    fn right_rotation_at_the_root() {
        let (mut tree, [a, b, c, d, e]) = sample();
        assert_eq!(tree.rotate_right(b, d), Some(()));

        assert_eq!(tree.root(), Some(b));
        let nb = tree.node(b).unwrap();
        assert_eq!((nb.parent(), nb.left(), nb.right()), (None, Some(a), Some(d)));
        let nd = tree.node(d).unwrap();
        assert_eq!((nd.parent(), nd.left(), nd.right()), (Some(b), Some(c), Some(e)));
        assert_eq!(tree.node(c).unwrap().parent(), Some(d));

        assert_eq!(pre_order_keys(&tree), "BADCE");
        tree.assert_correctness();

        // and back again
        assert_eq!(tree.rotate_left(d, b), Some(()));
        assert_eq!(pre_order_keys(&tree), "DBACE");
        tree.assert_correctness();
    }

    #[test]
    fn rotation_below_the_root_relinks_the_grandparent() {
        let (mut tree, [a, b, c, d, _]) = sample();
        assert_eq!(tree.rotate_left(c, b), Some(()));

        assert_eq!(tree.root(), Some(d));
        assert_eq!(tree.node(d).unwrap().left(), Some(c));
        assert_eq!(tree.node(c).unwrap().parent(), Some(d));
        assert_eq!(tree.node(c).unwrap().left(), Some(b));
        assert_eq!(tree.node(b).unwrap().right(), None);
        assert_eq!(tree.node(b).unwrap().left(), Some(a));
        assert_eq!(pre_order_keys(&tree), "DCBAE");
        tree.assert_structure();
    }

    #[test]
    fn rotation_requires_a_parent_son_pair() {
        let (mut tree, [a, b, c, d, e]) = sample();
        assert_eq!(tree.rotate_left(b, d), None);
        assert_eq!(tree.rotate_right(e, d), None);
        assert_eq!(tree.rotate_right(a, d), None);
        assert_eq!(tree.rotate_right(d, c), None);
        assert_eq!(pre_order_keys(&tree), "DBACE");
        assert_eq!(tree.root(), Some(d));
    }
}
