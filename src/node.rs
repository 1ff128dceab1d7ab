//! Nodes of a [`CartesianTree`](crate::CartesianTree), and the handles used to refer to them.
//!
//! A node never owns its neighbours. All three relations are [`NodeId`] handles
//! into the tree's storage, and only the tree rewrites them.

use std::fmt;

use slotmap::new_key_type;

/// Which son of a node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the other side.
    pub fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

new_key_type! {
    /// A handle to a node stored in a tree.
    ///
    /// Handles stay valid for as long as their node is in the tree. Once the node is
    /// removed the handle goes stale: lookups through it return [`None`], even after
    /// the slot is reused by a later insertion or the tree is cleared.
    pub struct NodeId;
}

/// A single `(key, priority)` entry together with its structural relations.
///
/// The key and the priority are fixed at construction. Only the left, right and
/// parent relations change afterwards, and only through the owning tree.
///
/// Nodes have no equality of their own: two nodes holding the same pair are
/// still different nodes. Compare their [`NodeId`]s instead.
#[derive(Clone)]
pub struct Node<K, P> {
    key: K,
    priority: P,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
}

impl<K, P> Node<K, P> {
    /// Creates a detached node.
    pub fn new(key: K, priority: P) -> Self {
        Node {
            key,
            priority,
            left: None,
            right: None,
            parent: None,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn priority(&self) -> &P {
        &self.priority
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// The parent of this node, or [`None`] for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Returns true if the node has no sons.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn set_left(&mut self, left: Option<NodeId>) {
        self.left = left;
    }

    pub(crate) fn set_right(&mut self, right: Option<NodeId>) {
        self.right = right;
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.set_left(child),
            Side::Right => self.set_right(child),
        }
    }

    /// Consumes the node, giving back its key and priority.
    pub fn into_pair(self) -> (K, P) {
        (self.key, self.priority)
    }
}

impl<K: fmt::Debug, P: fmt::Debug> fmt::Debug for Node<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("priority", &self.priority)
            .field("left", &self.left)
            .field("right", &self.right)
            .field("parent", &self.parent)
            .finish()
    }
}

impl<K: fmt::Display, P: fmt::Display> fmt::Display for Node<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.priority)
    }
}

#[test]
fn node_relations() {
    let mut node = Node::new('H', 1);
    assert!(node.is_leaf());
    assert_eq!(node.parent(), None);

    let mut ids = slotmap::SlotMap::<NodeId, ()>::with_key();
    let a = ids.insert(());
    node.set_child(Side::Right, Some(a));
    assert_eq!(node.right(), Some(a));
    assert_eq!(node.child(Side::Right), Some(a));
    assert_eq!(node.child(Side::Left), None);
    assert!(!node.is_leaf());

    assert_eq!(node.to_string(), "H: 1");
    assert_eq!(node.into_pair(), ('H', 1));
}

#[test]
fn side_flip() {
    assert_eq!(Side::Left.flip(), Side::Right);
    assert_eq!(Side::Right.flip().flip(), Side::Right);
}
