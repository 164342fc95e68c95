//! DTOs for categories_sea adapter.

/// Fields for a new category row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCreate {
    pub name: String,
    pub description: Option<String>,
}

/// Column-level patch; `None` leaves the column untouched.
///
/// `description` is three-state: None = no change, Some(None) = clear,
/// Some(Some(text)) = set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}
