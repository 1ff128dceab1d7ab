//! A Cartesian tree: a binary tree over `(key, priority)` pairs that is a binary
//! search tree on the keys and a min-heap on the priorities.
//!
//! Insertion hangs the new node at its search position and rotates it up while its
//! priority is smaller than its parent's. Deletion rotates the node down, lifting
//! its son with the smaller priority each time, until it is a leaf, and then cuts it
//! off. Lookups, height, traversals and an invariant check complete the interface.
//!
//!```
//! use cartesian_tree::CartesianTree;
//!
//! let mut tree = CartesianTree::new();
//! for (key, priority) in vec![('H', 1), ('D', 2), ('B', 3), ('A', 5), ('E', 6)] {
//!     tree.insert(key, priority);
//! }
//! let root = tree.root().unwrap();
//! assert_eq!(tree.node(root).unwrap().key(), &'H');
//! assert!(tree.verify());
//!
//! tree.delete('H', 1).unwrap();
//! assert_eq!(tree.iter().map(|(k, _)| *k).collect::<String>(), "ABDE");
//! assert!(tree.delete('H', 1).is_err());
//!```

mod arena;
pub mod error;
pub mod locators;
pub mod node;
#[cfg(feature = "random")]
pub mod priority;
pub mod tree;

pub use error::TreeError;
pub use locators::{LocResult, Locator, Position};
pub use node::{Node, NodeId, Side};
#[cfg(feature = "random")]
pub use priority::{Priority, PriorityGenerator};
pub use tree::*;
