//! Tree node for slab-based storage.
//!
//! ## Design
//!
//! `IndexNode` pairs a key with its value and carries the two child links
//! of a binary search tree. The links are slab keys (`usize`), not owned
//! boxes: the whole tree lives in one arena, and descent is a plain
//! pointer-walk over indices instead of a recursive chase through heap
//! allocations.
//!
//! ## Slab Integration
//!
//! Per official slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - Keys may be reused after `slab.remove()`
//! - O(1) insert, remove, and lookup
//!
//! Child links are only ever created and cleared by [`OrderedIndex`], which
//! owns the slab; a node never outlives the slots it points at.
//!
//! [`OrderedIndex`]: crate::index::OrderedIndex

/// A single node of the ordered index.
///
/// Holds the key, the associated value, and slab keys for the left and
/// right children (`None` where no child exists).
#[derive(Debug, Clone)]
pub struct IndexNode<K, V> {
    /// The ordering key. Immutable for the life of the node, except when a
    /// two-child deletion overwrites it with the in-order successor's key.
    pub key: K,

    /// The associated value (opaque to the index).
    pub value: V,

    /// Left child (slab key). Every key in the left subtree compares
    /// strictly less than `key`.
    pub left: Option<usize>,

    /// Right child (slab key). Every key in the right subtree compares
    /// strictly greater than `key`.
    pub right: Option<usize>,
}

impl<K, V> IndexNode<K, V> {
    /// Create a new leaf node (no children yet).
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    /// Check if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of children (0, 1, or 2).
    #[inline]
    pub fn child_count(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_new_is_leaf() {
        let node = IndexNode::new("B1".to_string(), 42);

        assert_eq!(node.key, "B1");
        assert_eq!(node.value, 42);
        assert!(node.left.is_none());
        assert!(node.right.is_none());
        assert!(node.is_leaf());
        assert_eq!(node.child_count(), 0);
    }

    #[test]
    fn test_node_child_count() {
        let mut node = IndexNode::new(10u32, ());

        node.left = Some(3);
        assert!(!node.is_leaf());
        assert_eq!(node.child_count(), 1);

        node.right = Some(7);
        assert_eq!(node.child_count(), 2);

        node.left = None;
        assert_eq!(node.child_count(), 1);
    }
}
