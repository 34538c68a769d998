//! User record and id validation.

/// A registered library user, keyed by a numeric-string id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Unique user id (index key). Immutable once registered; always an
    /// all-ASCII-digits string.
    pub id: String,

    /// Display name.
    pub name: String,
}

impl UserRecord {
    /// Create a new user record.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Check that a (trimmed, non-empty) user id consists only of ASCII digits.
#[inline]
pub fn is_numeric_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_digit())
}
