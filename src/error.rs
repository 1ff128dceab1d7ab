use thiserror::Error;

/// Errors reported by [`CartesianTree`](crate::CartesianTree) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError<K, P> {
    /// [`delete`](crate::CartesianTree::delete) was asked for a key that is not in the tree.
    /// The priority is the one the caller supplied, kept for diagnostics only.
    #[error("element not found: ({key:?}: {priority:?})")]
    ElementNotFound { key: K, priority: P },
}

impl<K, P> TreeError<K, P> {
    /// The key the failed operation was called with.
    pub fn key(&self) -> &K {
        match self {
            TreeError::ElementNotFound { key, .. } => key,
        }
    }
}

#[test]
fn element_not_found_message() {
    let err = TreeError::ElementNotFound {
        key: 'Z',
        priority: 4,
    };
    assert_eq!(err.to_string(), "element not found: ('Z': 4)");
    assert_eq!(err.key(), &'Z');
}
