//! Ordered index module: the tree that backs both catalogs.
//!
//! ## Architecture
//!
//! The index is an unbalanced binary search tree stored in a slab arena:
//!
//! - **Slab-based storage**: nodes are arena slots, children are `usize` keys
//! - **Iterative descent**: insert, lookup, traversal, and delete all walk
//!   indices in a loop; nothing recurses, so a degenerate (sorted-insertion)
//!   tree costs time, never stack
//! - **No rebalancing**: an accepted tradeoff for simplicity
//!
//! ## Components
//!
//! - [`IndexNode`]: key/value plus left/right slab-key links
//! - [`OrderedIndex`]: the map itself
//!
//! ## Performance
//!
//! | Operation       | Complexity           |
//! |-----------------|----------------------|
//! | Insert / update | O(depth), worst O(n) |
//! | Lookup          | O(depth), worst O(n) |
//! | Remove          | O(depth), worst O(n) |
//! | In-order walk   | O(n)                 |

pub mod node;
pub mod tree;

pub use node::IndexNode;
pub use tree::OrderedIndex;
