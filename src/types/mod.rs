//! Core data types for the catalog.
//!
//! Records are fixed-shape structs with typed, named fields. The catalog and
//! the loan ledger share them through reference-counted handles so that
//! in-place edits (availability flips, field updates) are visible through
//! every holder.
//!
//! ## Types
//!
//! - [`BookRecord`]: a book keyed by code, with an availability flag
//! - [`UserRecord`]: a user keyed by a numeric-string id
//! - [`Loan`]: an active (user, book) pairing holding shared handles
//! - [`BookHandle`] / [`UserHandle`]: `Rc<RefCell<_>>` aliases

use std::cell::RefCell;
use std::rc::Rc;

pub mod book;
pub mod loan;
pub mod user;

// Re-export all types at module level
pub use book::BookRecord;
pub use loan::Loan;
pub use user::UserRecord;

/// Shared, mutable handle to a book record.
pub type BookHandle = Rc<RefCell<BookRecord>>;

/// Shared, mutable handle to a user record.
pub type UserHandle = Rc<RefCell<UserRecord>>;
