//! Catalog module: domain rules layered over two ordered indexes.
//!
//! ## Architecture
//!
//! The [`Catalog`] owns two independent [`OrderedIndex`] instances:
//!
//! - books, keyed by code
//! - users, keyed by numeric-string id
//!
//! Both indexes store `Rc<RefCell<_>>` handles rather than plain records,
//! so a [`Loan`](crate::types::Loan) in the ledger can share the very same
//! record and observe availability flips in place.
//!
//! The catalog enforces what the raw index does not: trimming and blank
//! rejection, year/id validation, and duplicate rejection (a public `add`
//! never silently turns into an update; only the index-level `insert`
//! primitive has update-on-duplicate semantics, and the catalog gates it).
//!
//! ## Components
//!
//! - [`Catalog`]: the aggregate
//! - [`BookUpdate`] / [`BookListing`]: edit payload and listing snapshot
//! - [`digest`]: SHA-256 state digest over the full catalog content
//!
//! [`OrderedIndex`]: crate::index::OrderedIndex

pub mod books;
pub mod digest;
pub mod users;

pub use books::{BookListing, BookUpdate};

use crate::index::OrderedIndex;
use crate::types::{BookHandle, UserHandle};

/// The catalog aggregate: book and user indexes plus domain rules.
///
/// Process-lifetime, single-threaded state. The catalog is the sole
/// mutator of the records it owns; loans hold shared handles but only the
/// ledger flips availability, and only through catalog-vended handles.
#[derive(Debug, Default)]
pub struct Catalog {
    /// Books keyed by code.
    pub(crate) books: OrderedIndex<String, BookHandle>,

    /// Users keyed by id.
    pub(crate) users: OrderedIndex<String, UserHandle>,
}

impl Catalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            books: OrderedIndex::new(),
            users: OrderedIndex::new(),
        }
    }

    /// Create a catalog with pre-allocated index capacity.
    pub fn with_capacity(book_capacity: usize, user_capacity: usize) -> Self {
        Self {
            books: OrderedIndex::with_capacity(book_capacity),
            users: OrderedIndex::with_capacity(user_capacity),
        }
    }

    /// Number of registered books.
    #[inline]
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Number of registered users.
    #[inline]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Check if the catalog holds no records at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty() && self.users.is_empty()
    }
}
