//! Storage that owns every node of a tree.
//!
//! Nodes live in a [`SlotMap`] keyed by [`NodeId`]. Slot map keys are versioned,
//! so a handle to a removed node stays dead even once its slot is reused, and
//! [`SlotMap::clear`] invalidates every handle handed out before it.

use slotmap::SlotMap;

use crate::node::{Node, NodeId};

pub(crate) type Arena<K, P> = SlotMap<NodeId, Node<K, P>>;

pub(crate) fn new_arena<K, P>() -> Arena<K, P> {
    SlotMap::with_key()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_are_reused() {
        let mut arena = new_arena();
        let a = arena.insert(Node::new(1, 10));
        let b = arena.insert(Node::new(2, 20));
        assert_eq!(arena.len(), 2);

        assert_eq!(arena.remove(a).map(Node::into_pair), Some((1, 10)));
        assert_eq!(arena.len(), 1);

        let c = arena.insert(Node::new(3, 30));
        assert_ne!(c, a);
        assert_eq!(arena[b].key(), &2);
        assert_eq!(arena[c].key(), &3);
        assert!(arena.get(a).is_none());
    }

    #[test]
    fn stale_handles_are_rejected() {
        let mut arena = new_arena();
        let a = arena.insert(Node::new('a', 1));
        arena.remove(a);
        assert!(arena.get(a).is_none());
        assert!(arena.remove(a).is_none());

        let b = arena.insert(Node::new('b', 2));
        assert!(!arena.contains_key(a));
        assert!(arena.contains_key(b));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn clearing_invalidates_handles() {
        let mut arena = new_arena();
        let a = arena.insert(Node::new('a', 1));
        arena.clear();
        let b = arena.insert(Node::new('b', 2));
        assert_ne!(a, b);
        assert!(arena.get(a).is_none());
        assert_eq!(arena[b].key(), &'b');
    }

    #[test]
    #[should_panic]
    fn indexing_with_a_stale_handle_panics() {
        let mut arena = new_arena();
        let a = arena.insert(Node::new(0u8, 0u8));
        arena.remove(a);
        let _ = arena[a].key();
    }
}
