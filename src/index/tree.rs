//! Ordered index: an unbalanced binary search tree over a slab arena.
//!
//! ## Architecture
//!
//! - **Slab**: all nodes live in one pre-allocatable arena; child links are
//!   slab keys (`usize`), so every operation is an iterative index-walk.
//!   No recursion anywhere, which keeps stack depth flat even for the
//!   pathological sorted-insertion case where the tree degenerates into a
//!   linked list.
//! - **No rebalancing**: worst-case depth is O(n) for adversarial insertion
//!   order. This is an accepted tradeoff for simplicity, not an oversight.
//!
//! ## Ordering Invariant
//!
//! For every node, all keys in its left subtree compare strictly less than
//! the node's key, and all keys in its right subtree strictly greater.
//! Duplicate keys never create a second node: inserting an existing key
//! overwrites the value in place.
//!
//! ## Example
//!
//! ```
//! use libris::index::OrderedIndex;
//!
//! let mut index = OrderedIndex::new();
//! index.insert("B2", 20);
//! index.insert("B1", 10);
//! index.insert("B3", 30);
//!
//! assert_eq!(index.lookup(&"B1"), Some(&10));
//! assert_eq!(index.values_in_order(), vec![10, 20, 30]);
//!
//! assert!(index.remove(&"B2"));
//! assert_eq!(index.values_in_order(), vec![10, 30]);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;

use slab::Slab;

use crate::index::IndexNode;

/// Which slot of a parent node a child hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChildSlot {
    Left,
    Right,
}

/// An ordered key-value map backed by an unbalanced binary search tree.
///
/// Keys must have a total order (`K: Ord`). Absent keys are reported through
/// return values; no operation panics on a missing key.
#[derive(Debug, Clone)]
pub struct OrderedIndex<K, V> {
    /// Arena holding every node of the tree.
    nodes: Slab<IndexNode<K, V>>,

    /// Slab key of the root node, or `None` for an empty tree.
    root: Option<usize>,
}

impl<K, V> Default for OrderedIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> OrderedIndex<K, V> {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            root: None,
        }
    }

    /// Create an index with pre-allocated node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            root: None,
        }
    }

    // ========================================================================
    // Size and structural access
    // ========================================================================

    /// Number of entries in the index.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Slab key of the root node, if any.
    ///
    /// Exposed (together with [`node`](Self::node)) so callers can walk the
    /// raw structure, e.g. to verify the ordering invariant in tests.
    #[inline]
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    /// Get a node by slab key.
    #[inline]
    pub fn node(&self, key: usize) -> Option<&IndexNode<K, V>> {
        self.nodes.get(key)
    }
}

impl<K: Ord, V> OrderedIndex<K, V> {
    /// Check whether a key is present.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.lookup(key).is_some()
    }

    // ========================================================================
    // Insert / lookup
    // ========================================================================

    /// Insert a key-value pair, or update the value if the key exists.
    ///
    /// On an existing key the node is kept and only its value is replaced;
    /// the previous value is returned. On a new key the node is attached at
    /// the leaf position the descent ends in and `None` is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use libris::index::OrderedIndex;
    ///
    /// let mut index = OrderedIndex::new();
    /// assert_eq!(index.insert("B1", 1), None);
    /// assert_eq!(index.insert("B1", 2), Some(1));
    /// assert_eq!(index.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let Some(root) = self.root else {
            let idx = self.nodes.insert(IndexNode::new(key, value));
            self.root = Some(idx);
            return None;
        };

        let mut current = root;
        loop {
            match key.cmp(&self.nodes[current].key) {
                Ordering::Less => match self.nodes[current].left {
                    Some(left) => current = left,
                    None => {
                        let idx = self.nodes.insert(IndexNode::new(key, value));
                        self.nodes[current].left = Some(idx);
                        return None;
                    }
                },
                Ordering::Greater => match self.nodes[current].right {
                    Some(right) => current = right,
                    None => {
                        let idx = self.nodes.insert(IndexNode::new(key, value));
                        self.nodes[current].right = Some(idx);
                        return None;
                    }
                },
                Ordering::Equal => {
                    let old = std::mem::replace(&mut self.nodes[current].value, value);
                    return Some(old);
                }
            }
        }
    }

    /// Look up the value stored under a key.
    ///
    /// Standard BST descent; returns `None` for an absent key, never panics.
    /// The key may be any borrowed form of `K` (e.g. `&str` for `String`
    /// keys), as with the std map types.
    pub fn lookup<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// All values in ascending key order.
    ///
    /// The result is a fresh, fully materialized `Vec` on every call (not a
    /// live view), so the index may be mutated freely afterwards. Traversal
    /// uses an explicit stack rather than recursion.
    pub fn values_in_order(&self) -> Vec<V>
    where
        V: Clone,
    {
        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<usize> = Vec::new();
        let mut current = self.root;

        while current.is_some() || !stack.is_empty() {
            while let Some(idx) = current {
                stack.push(idx);
                current = self.nodes[idx].left;
            }
            if let Some(idx) = stack.pop() {
                out.push(self.nodes[idx].value.clone());
                current = self.nodes[idx].right;
            }
        }

        out
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Remove a key from the index.
    ///
    /// Returns `false` (no mutation) if the key is absent. Otherwise the node
    /// is removed and `true` is returned:
    ///
    /// - zero or one child: the node's parent slot is rewired to the single
    ///   child (or to nothing);
    /// - two children: the node's key and value are overwritten with those of
    ///   its in-order successor (the minimum of the right subtree), and the
    ///   successor node, which has no left child, is spliced out of the right
    ///   subtree.
    ///
    /// The ordering invariant holds at every step.
    ///
    /// # Example
    ///
    /// ```
    /// use libris::index::OrderedIndex;
    ///
    /// let mut index = OrderedIndex::new();
    /// index.insert(2, "b");
    /// index.insert(1, "a");
    /// index.insert(3, "c");
    ///
    /// assert!(index.remove(&2));      // two-child root
    /// assert!(!index.remove(&2));     // already gone
    /// assert_eq!(index.values_in_order(), vec!["a", "c"]);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        // Locate the target node and remember which parent slot points at it.
        let mut parent: Option<(usize, ChildSlot)> = None;
        let mut current = self.root;

        while let Some(idx) = current {
            match key.cmp(self.nodes[idx].key.borrow()) {
                Ordering::Less => {
                    parent = Some((idx, ChildSlot::Left));
                    current = self.nodes[idx].left;
                }
                Ordering::Greater => {
                    parent = Some((idx, ChildSlot::Right));
                    current = self.nodes[idx].right;
                }
                Ordering::Equal => {
                    self.remove_at(idx, parent);
                    return true;
                }
            }
        }

        false
    }

    /// Remove the node at `idx`, whose parent slot is `parent`
    /// (`None` when `idx` is the root).
    fn remove_at(&mut self, idx: usize, parent: Option<(usize, ChildSlot)>) {
        let (left, right) = (self.nodes[idx].left, self.nodes[idx].right);

        match (left, right) {
            // Zero or one child: splice the child (or nothing) into the
            // parent slot.
            (None, child) | (child, None) => {
                self.set_child(parent, child);
                self.nodes.remove(idx);
            }
            // Two children: take the key/value of the in-order successor
            // (leftmost node of the right subtree) and splice that successor
            // out. The successor has no left child, so splicing it is the
            // one-child case by construction.
            (Some(_), Some(right_child)) => {
                let mut succ_parent = idx;
                let mut succ = right_child;
                while let Some(left) = self.nodes[succ].left {
                    succ_parent = succ;
                    succ = left;
                }

                let succ_right = self.nodes[succ].right;
                if succ_parent == idx {
                    self.nodes[idx].right = succ_right;
                } else {
                    self.nodes[succ_parent].left = succ_right;
                }

                let spliced = self.nodes.remove(succ);
                self.nodes[idx].key = spliced.key;
                self.nodes[idx].value = spliced.value;
            }
        }
    }

    /// Point `parent`'s slot (or the root, for `None`) at `child`.
    fn set_child(&mut self, parent: Option<(usize, ChildSlot)>, child: Option<usize>) {
        match parent {
            None => self.root = child,
            Some((p, ChildSlot::Left)) => self.nodes[p].left = child,
            Some((p, ChildSlot::Right)) => self.nodes[p].right = child,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Walk the raw structure and assert the ordering invariant for every
    /// node: all left-subtree keys below the node's key, all right-subtree
    /// keys above it. Returns the number of nodes visited.
    fn check_invariant<K: Ord, V>(index: &OrderedIndex<K, V>) -> usize {
        fn walk<K: Ord, V>(
            index: &OrderedIndex<K, V>,
            idx: usize,
            lower: Option<&K>,
            upper: Option<&K>,
        ) -> usize {
            let node = index.node(idx).expect("dangling child link");
            if let Some(lo) = lower {
                assert!(node.key > *lo, "left-bound violation");
            }
            if let Some(hi) = upper {
                assert!(node.key < *hi, "right-bound violation");
            }
            let mut count = 1;
            if let Some(left) = node.left {
                count += walk(index, left, lower, Some(&node.key));
            }
            if let Some(right) = node.right {
                count += walk(index, right, Some(&node.key), upper);
            }
            count
        }

        match index.root() {
            Some(root) => walk(index, root, None, None),
            None => 0,
        }
    }

    #[test]
    fn test_empty_index() {
        let index: OrderedIndex<u32, u32> = OrderedIndex::new();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.root().is_none());
        assert!(index.lookup(&1).is_none());
        assert!(index.values_in_order().is_empty());
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut index = OrderedIndex::new();

        index.insert(5, "five");
        index.insert(3, "three");
        index.insert(8, "eight");

        assert_eq!(index.len(), 3);
        assert_eq!(index.lookup(&5), Some(&"five"));
        assert_eq!(index.lookup(&3), Some(&"three"));
        assert_eq!(index.lookup(&8), Some(&"eight"));
        assert!(index.lookup(&4).is_none());
        assert!(index.contains_key(&8));
        assert!(!index.contains_key(&9));
    }

    #[test]
    fn test_inorder_sorted_at_every_point() {
        let mut index = OrderedIndex::new();

        // Insertion order chosen to exercise both subtrees.
        for key in [50, 20, 70, 10, 30, 60, 80, 25, 35] {
            index.insert(key, key);
            let values = index.values_in_order();
            let mut sorted = values.clone();
            sorted.sort_unstable();
            assert_eq!(values, sorted, "in-order walk must be sorted");
            assert_eq!(check_invariant(&index), index.len());
        }
    }

    #[test]
    fn test_insert_duplicate_updates_in_place() {
        let mut index = OrderedIndex::new();

        index.insert(1, "old");
        index.insert(2, "two");
        let before = index.len();

        assert_eq!(index.insert(1, "new"), Some("old"));
        assert_eq!(index.len(), before);
        assert_eq!(index.lookup(&1), Some(&"new"));
        assert_eq!(index.values_in_order(), vec!["new", "two"]);
    }

    #[test]
    fn test_sorted_insertion_degenerate_depth() {
        // Sorted keys produce the worst-case (list-shaped) tree. Iterative
        // descent must handle it without stack growth.
        let mut index = OrderedIndex::new();
        for key in 0..10_000u32 {
            index.insert(key, key);
        }

        assert_eq!(index.len(), 10_000);
        assert_eq!(index.lookup(&9_999), Some(&9_999));
        let values = index.values_in_order();
        assert_eq!(values.len(), 10_000);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert!(index.remove(&0));
        assert!(index.remove(&9_999));
        assert_eq!(index.len(), 9_998);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut index = OrderedIndex::new();
        index.insert(2, 'b');
        index.insert(1, 'a');

        let before = index.values_in_order();
        assert!(!index.remove(&99));
        assert_eq!(index.values_in_order(), before);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_remove_leaf() {
        let mut index = OrderedIndex::new();
        index.insert(2, 'b');
        index.insert(1, 'a');
        index.insert(3, 'c');

        assert!(index.remove(&1));
        assert_eq!(index.values_in_order(), vec!['b', 'c']);
        assert_eq!(check_invariant(&index), 2);
    }

    #[test]
    fn test_remove_single_child_node() {
        let mut index = OrderedIndex::new();
        // 2 has only a left child after this sequence: 2 -> 1.
        index.insert(3, 'c');
        index.insert(2, 'b');
        index.insert(1, 'a');

        assert!(index.remove(&2));
        assert_eq!(index.values_in_order(), vec!['a', 'c']);
        assert_eq!(check_invariant(&index), 2);
        assert_eq!(index.lookup(&1), Some(&'a'));
    }

    #[test]
    fn test_remove_two_child_root_preserves_order() {
        let mut index = OrderedIndex::new();
        for key in [50, 20, 70, 10, 30, 60, 80] {
            index.insert(key, key);
        }

        assert!(index.remove(&50));
        assert_eq!(index.len(), 6);
        assert_eq!(index.values_in_order(), vec![10, 20, 30, 60, 70, 80]);
        assert_eq!(check_invariant(&index), 6);

        // Successor (60) was lifted into the old root position.
        let root = index.node(index.root().unwrap()).unwrap();
        assert_eq!(root.key, 60);
    }

    #[test]
    fn test_remove_two_child_successor_with_right_subtree() {
        let mut index = OrderedIndex::new();
        // Successor of 50 is 55, which itself has a right child (58).
        for key in [50, 20, 70, 60, 55, 58, 80] {
            index.insert(key, key);
        }

        assert!(index.remove(&50));
        assert_eq!(index.values_in_order(), vec![20, 55, 58, 60, 70, 80]);
        assert_eq!(check_invariant(&index), 6);
    }

    #[test]
    fn test_remove_root_until_empty() {
        let mut index = OrderedIndex::new();
        for key in [4, 2, 6, 1, 3, 5, 7] {
            index.insert(key, key);
        }

        while let Some(root) = index.root() {
            let key = index.node(root).unwrap().key;
            assert!(index.remove(&key));
            assert_eq!(check_invariant(&index), index.len());
        }

        assert!(index.is_empty());
        assert!(index.root().is_none());
    }

    #[test]
    fn test_string_keys() {
        let mut index = OrderedIndex::new();
        index.insert("B2".to_string(), 2);
        index.insert("B10".to_string(), 10);
        index.insert("B1".to_string(), 1);

        // Lexicographic order: B1 < B10 < B2.
        assert_eq!(index.values_in_order(), vec![1, 10, 2]);
        assert!(index.remove("B10"));
        assert!(index.contains_key("B2"));
        assert_eq!(index.values_in_order(), vec![1, 2]);
    }
}
