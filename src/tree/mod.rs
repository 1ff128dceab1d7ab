//! The Cartesian tree.
//!
//! A Cartesian tree is a binary search tree on its keys, and at the same time a
//! min-heap on its priorities: the root holds the smallest priority, and every
//! node's priority is at least its parent's.
//!
//! With random priorities its height is `O(log n)` in expectation. There is no
//! further balancing, so skewed priorities can give a tree of linear height.
//!
//! Nodes are stored in an arena and refer to each other by [`NodeId`]. The left
//! and right relations own their targets; the parent relation is a back reference
//! kept in step with them. Besides attaching and detaching leaves, the rotations
//! are the only code that rewires nodes.

mod iterators;
mod rotations;
mod verify;

pub use iterators::*;

use std::cmp::Ordering;
use std::fmt;

use crate::arena::{self, Arena};
use crate::error::TreeError;
use crate::locators::{self, LocResult, Locator, Position};
use crate::node::{Node, NodeId, Side};

#[derive(Clone)]
pub struct CartesianTree<K, P> {
    arena: Arena<K, P>,
    root: Option<NodeId>,
}

impl<K, P> CartesianTree<K, P> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        CartesianTree {
            arena: arena::new_arena(),
            root: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Returns the node behind the handle, or [`None`] if it has been removed.
    pub fn node(&self, id: NodeId) -> Option<&Node<K, P>> {
        self.arena.get(id)
    }

    /// Removes every node. All previously returned handles become stale.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Descends from the root as directed by the locator.
    ///
    /// Returns the first node the locator accepts, or the empty position the
    /// descent ended in. Stops early with the locator's error if it returns one.
    pub fn search_by_locator<L>(&self, locator: &L) -> Result<Position, L::Error>
    where
        L: Locator<K, P>,
    {
        let mut slot = None;
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.arena[id];
            let side = match locator.locate(node.key(), node.priority())? {
                LocResult::Accept => return Ok(Position::Found(id)),
                LocResult::GoLeft => Side::Left,
                LocResult::GoRight => Side::Right,
            };
            slot = Some((id, side));
            current = node.child(side);
        }
        Ok(Position::Vacant(slot))
    }
}

impl<K: Ord, P: Ord> CartesianTree<K, P> {
    /// Returns the node a new node with this key would be attached to, i.e. its
    /// future parent. Keys equal to the new one are passed on the right.
    /// Returns [`None`] only for an empty tree.
    pub fn find_leaf_for_insertion(&self, key: &K) -> Option<NodeId> {
        self.insertion_slot(key).map(|(id, _)| id)
    }

    fn insertion_slot(&self, key: &K) -> Option<(NodeId, Side)> {
        match self.search_by_locator(&locators::InsertionPoint(key)) {
            Ok(Position::Vacant(slot)) => slot,
            Ok(Position::Found(_)) => unreachable!("insertion locators never accept"),
            Err(void) => match void {},
        }
    }

    /// Searches for a node with the given key.
    /// If several nodes share the key, returns the first one on the search path.
    pub fn find_node(&self, key: &K) -> Option<NodeId> {
        match self.search_by_locator(&locators::ByKey(key)) {
            Ok(Position::Found(id)) => Some(id),
            Ok(Position::Vacant(_)) => None,
            Err(void) => match void {},
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find_node(key).is_some()
    }

    /// Returns the priority stored with the key.
    pub fn get(&self, key: &K) -> Option<&P> {
        let id = self.find_node(key)?;
        Some(self.arena[id].priority())
    }

    /// Inserts by key alone, as in a plain binary search tree. No rotations are
    /// done, so afterwards the heap order on priorities may be violated.
    pub fn insert_unordered(&mut self, key: K, priority: P) -> NodeId {
        let id = self.attach_leaf(key, priority);
        log::debug!("inserted {:?} without rotations", id);
        id
    }

    /// Inserts a new node, then rotates it up until its parent's priority is not
    /// larger than its own. Keeps both the search order and the heap order.
    ///
    /// Returns the handle of the new node.
    pub fn insert(&mut self, key: K, priority: P) -> NodeId {
        let id = self.attach_leaf(key, priority);
        let mut rotations = 0usize;
        while let Some(parent) = self.arena[id].parent() {
            match self.arena[id].priority().cmp(self.arena[parent].priority()) {
                Ordering::Less => (),
                Ordering::Equal => {
                    log::debug!("found equal priorities at {:?} and {:?}", id, parent);
                    break;
                }
                Ordering::Greater => break,
            }
            let side = self.side_of(id, parent);
            self.rotate(id, parent, side);
            rotations += 1;
        }
        log::debug!("inserted {:?} after {} rotations", id, rotations);
        id
    }

    /// Hangs a new node at the empty position the key leads to.
    fn attach_leaf(&mut self, key: K, priority: P) -> NodeId {
        let slot = self.insertion_slot(&key);
        let id = self.arena.insert(Node::new(key, priority));
        match slot {
            None => self.root = Some(id),
            Some((parent, side)) => {
                self.arena[parent].set_child(side, Some(id));
                self.arena[id].set_parent(Some(parent));
            }
        }
        id
    }

    /// Deletes a node with the given key, and returns its key and priority.
    ///
    /// The node is rotated down, always lifting its son with the smaller priority,
    /// until it is a leaf, and is then cut off.
    ///
    /// The priority argument does not take part in the search: with duplicate keys
    /// the node removed is the one [`find_node`](Self::find_node) returns. If no
    /// node has the key, returns [`TreeError::ElementNotFound`] and leaves the tree
    /// untouched.
    pub fn delete(&mut self, key: K, priority: P) -> Result<(K, P), TreeError<K, P>> {
        match self.find_node(&key).and_then(|id| self.remove_node(id)) {
            Some(pair) => Ok(pair),
            None => Err(TreeError::ElementNotFound { key, priority }),
        }
    }

    /// Deletes exactly the node behind the handle, and returns its key and priority.
    /// Returns [`None`] if the handle is stale.
    pub fn remove_node(&mut self, id: NodeId) -> Option<(K, P)> {
        if !self.arena.contains_key(id) {
            return None;
        }
        let mut rotations = 0usize;
        loop {
            let node = &self.arena[id];
            let (child, side) = match (node.left(), node.right()) {
                (None, None) => break,
                (Some(left), None) => (left, Side::Left),
                (None, Some(right)) => (right, Side::Right),
                (Some(left), Some(right)) => {
                    if self.arena[left].priority() < self.arena[right].priority() {
                        (left, Side::Left)
                    } else {
                        (right, Side::Right)
                    }
                }
            };
            self.rotate(child, id, side);
            rotations += 1;
        }

        match self.arena[id].parent() {
            Some(parent) => {
                let side = self.side_of(id, parent);
                self.arena[parent].set_child(side, None);
            }
            None => self.root = None,
        }
        log::debug!("removed {:?} after {} rotations", id, rotations);
        self.arena.remove(id).map(Node::into_pair)
    }
}

impl<K, P> Default for CartesianTree<K, P> {
    fn default() -> Self {
        CartesianTree::new()
    }
}

impl<K: fmt::Debug, P: fmt::Debug> fmt::Debug for CartesianTree<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
