//! Book operations: add, edit, remove, find, list.
//!
//! All mutating operations validate before touching the index; an `Err`
//! return guarantees no state change.

use std::cell::RefCell;
use std::rc::Rc;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::types::book::canonical_year;
use crate::types::{BookHandle, BookRecord};

/// Optional replacement fields for [`Catalog::edit_book`].
///
/// `None` or a blank (whitespace-only) string leaves the current value in
/// place; the book code itself is immutable and has no slot here.
#[derive(Debug, Clone, Default)]
pub struct BookUpdate {
    /// Replacement title, if any.
    pub title: Option<String>,
    /// Replacement author, if any.
    pub author: Option<String>,
    /// Replacement publication year, if any (validated like on add).
    pub year: Option<String>,
}

impl BookUpdate {
    /// Update that changes nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the replacement title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the replacement author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the replacement year.
    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }
}

/// Snapshot of the book catalog in key order, with derived counts.
///
/// Computed fresh from a full traversal on every [`Catalog::list_books`]
/// call; never a live view.
#[derive(Debug, Clone)]
pub struct BookListing {
    /// All books in ascending code order.
    pub books: Vec<BookHandle>,

    /// Total number of books.
    pub total: usize,

    /// Books currently available for loan.
    pub available: usize,

    /// Books currently out on loan (`total - available`).
    pub loaned: usize,
}

impl Catalog {
    /// Register a new book.
    ///
    /// All fields are trimmed first. Fails with no state change if any
    /// field is blank, the year is not a non-negative integer, or a book
    /// with the same code already exists. On success the book starts
    /// available.
    ///
    /// # Example
    ///
    /// ```
    /// use libris::catalog::Catalog;
    /// use libris::error::CatalogError;
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.add_book("B1", "Dune", "Herbert", "1965").unwrap();
    ///
    /// let err = catalog.add_book("B1", "Other", "Author", "2000").unwrap_err();
    /// assert_eq!(err, CatalogError::DuplicateBook("B1".into()));
    /// assert_eq!(catalog.book_count(), 1);
    /// ```
    pub fn add_book(
        &mut self,
        code: &str,
        title: &str,
        author: &str,
        year: &str,
    ) -> Result<(), CatalogError> {
        let code = non_blank(code, "code")?;
        let title = non_blank(title, "title")?;
        let author = non_blank(author, "author")?;
        let year_raw = non_blank(year, "year")?;
        let year = canonical_year(year_raw)
            .ok_or_else(|| CatalogError::InvalidYear(year_raw.to_string()))?;

        if self.books.contains_key(code) {
            return Err(CatalogError::DuplicateBook(code.to_string()));
        }

        let record = BookRecord::new(code, title, author, year);
        self.books
            .insert(code.to_string(), Rc::new(RefCell::new(record)));
        Ok(())
    }

    /// Edit an existing book in place.
    ///
    /// Only the fields supplied (and non-blank) in `update` are replaced;
    /// everything else keeps its prior value. The code is immutable. A
    /// supplied year is validated exactly like on add.
    pub fn edit_book(&mut self, code: &str, update: BookUpdate) -> Result<(), CatalogError> {
        let code = code.trim();
        let handle = self
            .books
            .lookup(code)
            .ok_or_else(|| CatalogError::BookNotFound(code.to_string()))?;

        // Validate the year before touching the record, so a bad year
        // leaves the book entirely unchanged.
        let year = match update.year.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(
                canonical_year(raw).ok_or_else(|| CatalogError::InvalidYear(raw.to_string()))?,
            ),
            _ => None,
        };

        let mut book = handle.borrow_mut();
        if let Some(title) = update.title.as_deref().map(str::trim) {
            if !title.is_empty() {
                book.title = title.to_string();
            }
        }
        if let Some(author) = update.author.as_deref().map(str::trim) {
            if !author.is_empty() {
                book.author = author.to_string();
            }
        }
        if let Some(year) = year {
            book.year = year;
        }
        Ok(())
    }

    /// Remove a book from the catalog.
    ///
    /// Fails with [`CatalogError::BookNotFound`] if the code is absent.
    /// Deliberately does NOT consult the loan ledger: removing a loaned
    /// book leaves the loan holding a handle to a record the catalog no
    /// longer indexes, with whatever availability state it had. This
    /// mirrors the historical behavior and is covered by tests rather than
    /// silently changed.
    pub fn remove_book(&mut self, code: &str) -> Result<(), CatalogError> {
        let code = code.trim();
        if self.books.remove(code) {
            Ok(())
        } else {
            Err(CatalogError::BookNotFound(code.to_string()))
        }
    }

    /// Find a book by code. Pure lookup; returns a handle clone.
    pub fn find_book(&self, code: &str) -> Option<BookHandle> {
        self.books.lookup(code.trim()).cloned()
    }

    /// All books in code order, with availability counts derived fresh
    /// from the same traversal.
    pub fn list_books(&self) -> BookListing {
        let books = self.books.values_in_order();
        let total = books.len();
        let available = books.iter().filter(|b| b.borrow().available).count();
        BookListing {
            books,
            total,
            available,
            loaned: total - available,
        }
    }
}

/// Trim a field and reject it if nothing remains.
pub(crate) fn non_blank<'a>(
    value: &'a str,
    field: &'static str,
) -> Result<&'a str, CatalogError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(CatalogError::BlankField(field))
    } else {
        Ok(trimmed)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
