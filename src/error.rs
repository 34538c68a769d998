//! Error taxonomy for catalog and ledger operations.
//!
//! Every failure is local, synchronous, and recoverable: operations report
//! errors through `Result` and never mutate state on the error path. The
//! process is never aborted by the core.

use thiserror::Error;

/// Errors reported by [`Catalog`](crate::catalog::Catalog) and
/// [`LoanLedger`](crate::ledger::LoanLedger) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A required field was empty (or whitespace-only) after trimming.
    #[error("required field `{0}` is blank")]
    BlankField(&'static str),

    /// The publication year did not parse as a non-negative integer.
    #[error("publication year `{0}` is not a non-negative integer")]
    InvalidYear(String),

    /// The user id contained characters other than ASCII digits.
    #[error("user id `{0}` must contain only digits")]
    InvalidUserId(String),

    /// A book with this code is already registered.
    #[error("a book with code `{0}` already exists")]
    DuplicateBook(String),

    /// A user with this id is already registered.
    #[error("a user with id `{0}` already exists")]
    DuplicateUser(String),

    /// No book is registered under this code.
    #[error("no book found with code `{0}`")]
    BookNotFound(String),

    /// No user is registered under this id.
    #[error("no user found with id `{0}`")]
    UserNotFound(String),

    /// The book exists but is already out on loan.
    #[error("book `{0}` is already on loan")]
    BookUnavailable(String),

    /// A return was requested while no loans were active.
    #[error("no loans are pending return")]
    NoPendingLoans,
}
