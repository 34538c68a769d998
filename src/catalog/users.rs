//! User operations: add, edit, remove, find, list.

use std::cell::RefCell;
use std::rc::Rc;

use crate::catalog::books::non_blank;
use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::types::user::is_numeric_id;
use crate::types::{UserHandle, UserRecord};

impl Catalog {
    /// Register a new user.
    ///
    /// The id must be non-blank and all ASCII digits; the name must be
    /// non-blank. A duplicate id is rejected with no state change.
    ///
    /// # Example
    ///
    /// ```
    /// use libris::catalog::Catalog;
    /// use libris::error::CatalogError;
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.add_user("123", "Ana").unwrap();
    ///
    /// let err = catalog.add_user("12a", "Bob").unwrap_err();
    /// assert_eq!(err, CatalogError::InvalidUserId("12a".into()));
    /// ```
    pub fn add_user(&mut self, id: &str, name: &str) -> Result<(), CatalogError> {
        let id = non_blank(id, "id")?;
        let name = non_blank(name, "name")?;

        if !is_numeric_id(id) {
            return Err(CatalogError::InvalidUserId(id.to_string()));
        }
        if self.users.contains_key(id) {
            return Err(CatalogError::DuplicateUser(id.to_string()));
        }

        self.users.insert(
            id.to_string(),
            Rc::new(RefCell::new(UserRecord::new(id, name))),
        );
        Ok(())
    }

    /// Rename an existing user. The id is immutable; a blank name keeps
    /// the prior value (matching book edit semantics).
    pub fn edit_user(&mut self, id: &str, name: &str) -> Result<(), CatalogError> {
        let id = id.trim();
        let handle = self
            .users
            .lookup(id)
            .ok_or_else(|| CatalogError::UserNotFound(id.to_string()))?;

        let name = name.trim();
        if !name.is_empty() {
            handle.borrow_mut().name = name.to_string();
        }
        Ok(())
    }

    /// Remove a user from the catalog.
    pub fn remove_user(&mut self, id: &str) -> Result<(), CatalogError> {
        let id = id.trim();
        if self.users.remove(id) {
            Ok(())
        } else {
            Err(CatalogError::UserNotFound(id.to_string()))
        }
    }

    /// Find a user by id. Pure lookup; returns a handle clone.
    pub fn find_user(&self, id: &str) -> Option<UserHandle> {
        self.users.lookup(id.trim()).cloned()
    }

    /// All users in ascending id order (lexicographic over the id string),
    /// freshly materialized per call.
    pub fn list_users(&self) -> Vec<UserHandle> {
        self.users.values_in_order()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
