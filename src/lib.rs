//! # libris
//!
//! In-memory library catalog core backed by an unbalanced ordered index.
//!
//! ## Architecture
//!
//! The core consists of:
//! - **Types**: fixed-shape records (BookRecord, UserRecord, Loan)
//! - **Index**: slab-arena binary search tree, fully iterative
//! - **Catalog**: book/user domain rules over two independent indexes
//! - **Ledger**: strict FIFO loan queue coupled to book availability
//!
//! ## Design Principles
//!
//! 1. **No recursion**: all tree descent is an iterative index-walk, so a
//!    degenerate (sorted-insertion) tree never threatens the stack
//! 2. **No rebalancing**: O(n) worst-case depth is an accepted tradeoff
//! 3. **Shared records, single thread**: catalog and ledger share records
//!    via `Rc<RefCell<_>>`; the types are `!Send`, so the compiler rules
//!    out concurrent callers
//! 4. **Errors as values**: every failure is a `CatalogError`, reported to
//!    the immediate caller with no state change and no panic
//!
//! ## Boundary
//!
//! The crate does no I/O and renders no text: inputs are plain strings,
//! outputs are records, handles, booleans, and ordered sequences for an
//! external front end (console, HTTP handler, test harness) to present.
//!
//! ## Example
//!
//! ```
//! use libris::{Catalog, LoanLedger};
//!
//! let mut catalog = Catalog::new();
//! catalog.add_user("123", "Ana").unwrap();
//! catalog.add_book("B1", "Dune", "Herbert", "1965").unwrap();
//!
//! let mut ledger = LoanLedger::new();
//! ledger.request_loan(&catalog, "123", "B1").unwrap();
//! assert!(!catalog.find_book("B1").unwrap().borrow().available);
//!
//! let returned = ledger.return_loan().unwrap();
//! assert_eq!(returned.book_code(), "B1");
//! assert!(catalog.find_book("B1").unwrap().borrow().available);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: BookRecord, UserRecord, Loan, shared handles
pub mod types;

/// Ordered index: slab-arena binary search tree
pub mod index;

/// Catalog: domain rules over the book and user indexes
pub mod catalog;

/// Loan ledger: FIFO queue of active loans
pub mod ledger;

/// Error taxonomy
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use catalog::{BookListing, BookUpdate, Catalog};
pub use error::CatalogError;
pub use index::{IndexNode, OrderedIndex};
pub use ledger::LoanLedger;
pub use types::{BookHandle, BookRecord, Loan, UserHandle, UserRecord};
