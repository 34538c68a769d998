//! Book record and year validation.
//!
//! ## Canonical Year Form
//!
//! The publication year is accepted as a string, validated as a non-negative
//! integer at creation time, and stored in canonical form: parsed and
//! re-rendered, so `"0042"` is stored as `"42"`. Rejecting signs, non-digit
//! characters, and overflow happens once, at the boundary — the stored field
//! is always well-formed.

/// A book in the catalog, keyed by its code.
///
/// ## Example
///
/// ```
/// use libris::types::BookRecord;
///
/// let book = BookRecord::new("B1", "Dune", "Herbert", "1965");
/// assert_eq!(book.code, "B1");
/// assert!(book.available);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    /// Unique book code (index key). Immutable once registered.
    pub code: String,

    /// Book title.
    pub title: String,

    /// Author name.
    pub author: String,

    /// Publication year in canonical integer-string form.
    pub year: String,

    /// Whether the book may be loaned out. Starts `true`; flipped to `false`
    /// while a loan references this record.
    pub available: bool,
}

impl BookRecord {
    /// Create a new available book.
    ///
    /// Fields are stored as given; validation and trimming are the
    /// catalog's responsibility.
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            author: author.into(),
            year: year.into(),
            available: true,
        }
    }
}

/// Parse a publication year string into its canonical form.
///
/// Accepts any non-negative integer (leading zeros allowed, surrounding
/// whitespace trimmed); rejects signs, non-digit characters, the empty
/// string, and values beyond `u32`.
///
/// # Example
///
/// ```
/// use libris::types::book::canonical_year;
///
/// assert_eq!(canonical_year("1965"), Some("1965".to_string()));
/// assert_eq!(canonical_year("0042"), Some("42".to_string()));
/// assert_eq!(canonical_year("-5"), None);
/// assert_eq!(canonical_year("MCMLXV"), None);
/// ```
pub fn canonical_year(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    // all-digits guarantees non-negative; parse still guards overflow
    trimmed.parse::<u32>().ok().map(|year| year.to_string())
}

// ============================================================================
// Unit Tests
// ============================================================================
