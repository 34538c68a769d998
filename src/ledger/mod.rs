//! Loan ledger: a strict FIFO queue of active loans.
//!
//! ## Design
//!
//! The ledger is a `VecDeque` of [`Loan`]s. New loans are pushed at the
//! tail; returns always pop the head, so the oldest outstanding loan is
//! returned first regardless of which book or user it concerns. There is no
//! return-by-key: that is the historical contract, kept on purpose (see the
//! module tests for the consequences).
//!
//! The ledger operates against a [`Catalog`] passed by reference, the way a
//! matching engine operates against an order book: the catalog stores the
//! records, the ledger drives availability transitions through the shared
//! handles.
//!
//! ## Coupling Invariant
//!
//! A loan exists only while its book's `available` flag is `false`.
//! `request_loan` flips the flag and enqueues atomically (in the
//! single-threaded sense); `return_loan` dequeues and flips it back.

use std::collections::VecDeque;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::types::Loan;

/// FIFO queue of active loans.
#[derive(Debug, Default)]
pub struct LoanLedger {
    /// Active loans, oldest at the front.
    loans: VecDeque<Loan>,
}

impl LoanLedger {
    /// Create a new empty ledger.
    pub fn new() -> Self {
        Self {
            loans: VecDeque::new(),
        }
    }

    /// Number of active loans.
    #[inline]
    pub fn len(&self) -> usize {
        self.loans.len()
    }

    /// Check if no loans are active.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }

    /// Request a loan of `book_code` for `user_id`.
    ///
    /// Fails, with no state change, if either input is blank, the user or
    /// book is unknown to the catalog, or the book is already on loan. On
    /// success the book's availability flips to `false` and the loan joins
    /// the tail of the queue, holding handles to (not copies of) the
    /// catalog's records.
    ///
    /// # Example
    ///
    /// ```
    /// use libris::catalog::Catalog;
    /// use libris::error::CatalogError;
    /// use libris::ledger::LoanLedger;
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.add_user("123", "Ana").unwrap();
    /// catalog.add_book("B1", "Dune", "Herbert", "1965").unwrap();
    ///
    /// let mut ledger = LoanLedger::new();
    /// ledger.request_loan(&catalog, "123", "B1").unwrap();
    ///
    /// assert!(!catalog.find_book("B1").unwrap().borrow().available);
    /// let err = ledger.request_loan(&catalog, "123", "B1").unwrap_err();
    /// assert_eq!(err, CatalogError::BookUnavailable("B1".into()));
    /// ```
    pub fn request_loan(
        &mut self,
        catalog: &Catalog,
        user_id: &str,
        book_code: &str,
    ) -> Result<(), CatalogError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(CatalogError::BlankField("user id"));
        }
        let book_code = book_code.trim();
        if book_code.is_empty() {
            return Err(CatalogError::BlankField("book code"));
        }

        let user = catalog
            .find_user(user_id)
            .ok_or_else(|| CatalogError::UserNotFound(user_id.to_string()))?;
        let book = catalog
            .find_book(book_code)
            .ok_or_else(|| CatalogError::BookNotFound(book_code.to_string()))?;

        if !book.borrow().available {
            return Err(CatalogError::BookUnavailable(book_code.to_string()));
        }

        book.borrow_mut().available = false;
        self.loans.push_back(Loan::new(user, book));
        Ok(())
    }

    /// Return the oldest outstanding loan.
    ///
    /// Pops the head of the queue, restores the book's availability through
    /// the shared handle, and hands the loan back to the caller. Fails with
    /// [`CatalogError::NoPendingLoans`] on an empty ledger.
    pub fn return_loan(&mut self) -> Result<Loan, CatalogError> {
        let loan = self.loans.pop_front().ok_or(CatalogError::NoPendingLoans)?;
        loan.book.borrow_mut().available = true;
        Ok(loan)
    }

    /// Snapshot of the active loans in FIFO order, head first.
    pub fn list_loans(&self) -> Vec<Loan> {
        self.loans.iter().cloned().collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_user("123", "Ana").unwrap();
        catalog.add_user("456", "Bruno").unwrap();
        catalog.add_book("B1", "Dune", "Herbert", "1965").unwrap();
        catalog.add_book("B2", "Solaris", "Lem", "1961").unwrap();
        catalog
    }

    #[test]
    fn test_request_loan_flips_availability() {
        let catalog = seeded_catalog();
        let mut ledger = LoanLedger::new();

        ledger.request_loan(&catalog, "123", "B1").unwrap();

        assert!(!catalog.find_book("B1").unwrap().borrow().available);
        assert_eq!(ledger.len(), 1);
        let loans = ledger.list_loans();
        assert_eq!(loans[0].user_id(), "123");
        assert_eq!(loans[0].book_code(), "B1");
    }

    #[test]
    fn test_request_loan_unavailable_book() {
        let catalog = seeded_catalog();
        let mut ledger = LoanLedger::new();

        ledger.request_loan(&catalog, "123", "B1").unwrap();
        assert_eq!(
            ledger.request_loan(&catalog, "456", "B1"),
            Err(CatalogError::BookUnavailable("B1".into()))
        );
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_request_loan_missing_user_or_book() {
        let catalog = seeded_catalog();
        let mut ledger = LoanLedger::new();

        assert_eq!(
            ledger.request_loan(&catalog, "999", "B1"),
            Err(CatalogError::UserNotFound("999".into()))
        );
        // Availability untouched by the failed request.
        assert!(catalog.find_book("B1").unwrap().borrow().available);

        assert_eq!(
            ledger.request_loan(&catalog, "123", "NOPE"),
            Err(CatalogError::BookNotFound("NOPE".into()))
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_request_loan_blank_inputs() {
        let catalog = seeded_catalog();
        let mut ledger = LoanLedger::new();

        assert_eq!(
            ledger.request_loan(&catalog, "  ", "B1"),
            Err(CatalogError::BlankField("user id"))
        );
        assert_eq!(
            ledger.request_loan(&catalog, "123", ""),
            Err(CatalogError::BlankField("book code"))
        );
    }

    #[test]
    fn test_return_loan_restores_availability() {
        let catalog = seeded_catalog();
        let mut ledger = LoanLedger::new();

        ledger.request_loan(&catalog, "123", "B1").unwrap();
        let returned = ledger.return_loan().unwrap();

        assert_eq!(returned.book_code(), "B1");
        assert!(catalog.find_book("B1").unwrap().borrow().available);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_return_loan_empty_ledger() {
        let mut ledger = LoanLedger::new();
        assert_eq!(ledger.return_loan().unwrap_err(), CatalogError::NoPendingLoans);
    }

    #[test]
    fn test_fifo_order() {
        let mut catalog = seeded_catalog();
        catalog.add_book("B3", "Ubik", "Dick", "1969").unwrap();
        let mut ledger = LoanLedger::new();

        ledger.request_loan(&catalog, "123", "B1").unwrap();
        ledger.request_loan(&catalog, "456", "B2").unwrap();
        ledger.request_loan(&catalog, "123", "B3").unwrap();

        // Oldest first, always - never any other order.
        assert_eq!(ledger.return_loan().unwrap().book_code(), "B1");
        assert_eq!(ledger.return_loan().unwrap().book_code(), "B2");
        assert_eq!(ledger.return_loan().unwrap().book_code(), "B3");
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_removing_loaned_book_orphans_the_loan() {
        // Historical quirk, preserved: the catalog does not consult the
        // ledger on removal. The loan keeps the record alive through its
        // handle, with stale availability state.
        let mut catalog = seeded_catalog();
        let mut ledger = LoanLedger::new();

        ledger.request_loan(&catalog, "123", "B1").unwrap();
        catalog.remove_book("B1").unwrap();

        assert!(catalog.find_book("B1").is_none());
        let loans = ledger.list_loans();
        assert_eq!(loans.len(), 1);
        assert_eq!(loans[0].book_code(), "B1");
        assert!(!loans[0].book.borrow().available);

        // Returning still succeeds; it flips a flag nothing indexes anymore.
        let returned = ledger.return_loan().unwrap();
        assert!(returned.book.borrow().available);
    }
}
