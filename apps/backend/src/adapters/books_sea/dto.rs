//! DTOs for books_sea adapter.

/// Fields for a new book row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCreate {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub category_id: Option<i32>,
}

/// Column-level patch; `None` leaves the column untouched.
///
/// `category_id` is three-state: None = no change, Some(None) = detach from
/// its category, Some(Some(id)) = point at another category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publication_year: Option<i32>,
    pub category_id: Option<Option<i32>>,
}
