//! Locators steer a descent from the root of a tree.
//!
//! A locator, given a node, replies `GoLeft`, `GoRight` or `Accept`, or returns an
//! error value. A descent follows the replies until a node is accepted or an
//! empty position is reached.
//!
//! Searches expect a locator that accepts the node they are looking for.
//! Insertions expect a locator that never accepts, so that it leads the descent
//! into the empty position where the new node will hang.
//!
//! Closures of the type `Fn(&K, &P) -> Result<LocResult, E>` can be used as locators.

use std::cmp::Ordering;

use crate::node::{NodeId, Side};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LocResult {
    Accept,
    GoRight,
    GoLeft,
}
use LocResult::*;

pub trait Locator<K, P> {
    type Error;
    fn locate(&self, key: &K, priority: &P) -> Result<LocResult, Self::Error>;
}

impl<K, P, E, F: Fn(&K, &P) -> Result<LocResult, E>> Locator<K, P> for F {
    type Error = E;
    fn locate(&self, key: &K, priority: &P) -> Result<LocResult, E> {
        self(key, priority)
    }
}

/// Where a descent ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Position {
    /// The locator accepted this node.
    Found(NodeId),
    /// The descent fell off the tree. Holds the node whose son would be at this
    /// position, and which son. [`None`] means the tree is empty and the
    /// position is the root itself.
    Vacant(Option<(NodeId, Side)>),
}

/// Locator for finding a node by its key. Accepts the first node on the search path
/// whose key equals the target.
#[derive(Clone, Copy, Debug)]
pub struct ByKey<'a, K>(pub &'a K);

impl<'a, K: Ord, P> Locator<K, P> for ByKey<'a, K> {
    type Error = void::Void;
    fn locate(&self, key: &K, _priority: &P) -> Result<LocResult, void::Void> {
        let res = match self.0.cmp(key) {
            Ordering::Equal => Accept,
            Ordering::Less => GoLeft,
            Ordering::Greater => GoRight,
        };
        Ok(res)
    }
}

/// Locator for the position a new key should be inserted at. It never accepts.
/// Nodes with a key equal to the target are passed on the right, so among equal keys
/// the newest ends up rightmost.
#[derive(Clone, Copy, Debug)]
pub struct InsertionPoint<'a, K>(pub &'a K);

impl<'a, K: Ord, P> Locator<K, P> for InsertionPoint<'a, K> {
    type Error = void::Void;
    fn locate(&self, key: &K, _priority: &P) -> Result<LocResult, void::Void> {
        if self.0 < key {
            Ok(GoLeft)
        } else {
            Ok(GoRight)
        }
    }
}

#[test]
fn by_key_steers_towards_the_target() {
    let loc = ByKey(&10);
    assert_eq!(Locator::<i32, ()>::locate(&loc, &10, &()), Ok(Accept));
    assert_eq!(Locator::<i32, ()>::locate(&loc, &20, &()), Ok(GoLeft));
    assert_eq!(Locator::<i32, ()>::locate(&loc, &3, &()), Ok(GoRight));
}

#[test]
fn insertion_point_sends_equal_keys_right() {
    let loc = InsertionPoint(&10);
    assert_eq!(Locator::<i32, ()>::locate(&loc, &10, &()), Ok(GoRight));
    assert_eq!(Locator::<i32, ()>::locate(&loc, &11, &()), Ok(GoLeft));
}
