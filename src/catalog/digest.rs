//! Catalog state digest.
//!
//! A SHA-256 digest over the full in-order content of both indexes. Because
//! the traversal is key-ordered, two catalogs with equal content produce
//! equal digests regardless of insertion order, which makes the digest a
//! cheap equality witness in tests and demos.
//!
//! Fields are length-prefixed before hashing so that adjacent strings
//! cannot collide by shifting bytes between them.

use sha2::{Digest, Sha256};

use crate::catalog::Catalog;

impl Catalog {
    /// Compute the SHA-256 digest of the catalog's current content.
    ///
    /// Covers every book field (including availability) and every user
    /// field, in key order.
    ///
    /// # Example
    ///
    /// ```
    /// use libris::catalog::Catalog;
    ///
    /// let mut a = Catalog::new();
    /// a.add_book("B1", "Dune", "Herbert", "1965").unwrap();
    /// a.add_book("B2", "Solaris", "Lem", "1961").unwrap();
    ///
    /// let mut b = Catalog::new();
    /// b.add_book("B2", "Solaris", "Lem", "1961").unwrap();
    /// b.add_book("B1", "Dune", "Herbert", "1965").unwrap();
    ///
    /// // Insertion order does not matter, content does.
    /// assert_eq!(a.state_root(), b.state_root());
    /// ```
    pub fn state_root(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();

        hasher.update(b"books");
        for book in self.books.values_in_order() {
            let book = book.borrow();
            hash_field(&mut hasher, &book.code);
            hash_field(&mut hasher, &book.title);
            hash_field(&mut hasher, &book.author);
            hash_field(&mut hasher, &book.year);
            hasher.update([u8::from(book.available)]);
        }

        hasher.update(b"users");
        for user in self.users.values_in_order() {
            let user = user.borrow();
            hash_field(&mut hasher, &user.id);
            hash_field(&mut hasher, &user.name);
        }

        hasher.finalize().into()
    }
}

fn hash_field(hasher: &mut Sha256, field: &str) {
    hasher.update((field.len() as u64).to_le_bytes());
    hasher.update(field.as_bytes());
}

// ============================================================================
// Unit Tests
// ============================================================================
