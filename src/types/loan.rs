//! Active loan: a shared-handle pairing of one user and one book.
//!
//! ## Shared Mutability
//!
//! A loan holds `Rc<RefCell<_>>` clones of the same cells the catalog
//! indexes hold, not copies of the records. Flipping `available` on the book
//! through the ledger is therefore visible through the catalog and vice
//! versa. This is safe only because the whole core is single-threaded
//! (`Rc`/`RefCell` keep the types `!Send`, so the compiler enforces it).

use crate::types::{BookHandle, UserHandle};

/// An active loan referencing the borrowing user and the loaned book.
#[derive(Debug, Clone)]
pub struct Loan {
    /// The borrowing user (shared handle into the catalog's user index).
    pub user: UserHandle,

    /// The loaned book (shared handle into the catalog's book index).
    pub book: BookHandle,
}

impl Loan {
    /// Create a loan over existing record handles.
    pub fn new(user: UserHandle, book: BookHandle) -> Self {
        Self { user, book }
    }

    /// The borrowing user's id.
    pub fn user_id(&self) -> String {
        self.user.borrow().id.clone()
    }

    /// The loaned book's code.
    pub fn book_code(&self) -> String {
        self.book.borrow().code.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BookRecord, UserRecord};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_loan_sees_record_mutation() {
        let user = Rc::new(RefCell::new(UserRecord::new("123", "Ana")));
        let book = Rc::new(RefCell::new(BookRecord::new("B1", "Dune", "Herbert", "1965")));

        let loan = Loan::new(Rc::clone(&user), Rc::clone(&book));
        assert_eq!(loan.user_id(), "123");
        assert_eq!(loan.book_code(), "B1");

        // A mutation through the original handle is visible via the loan.
        book.borrow_mut().available = false;
        assert!(!loan.book.borrow().available);
    }
}
