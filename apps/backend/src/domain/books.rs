//! Book input types.

use serde::Deserialize;

use super::rules::{check_length, check_publication_year, AUTHOR_MAX, TITLE_MAX};
use crate::errors::domain::DomainError;
use crate::repos::books::{BookCreate, BookUpdate};

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    #[serde(default)]
    pub category_id: Option<i32>,
}

impl NewBook {
    pub fn validate(&self) -> Result<(), DomainError> {
        check_length("title", &self.title, 1, TITLE_MAX)?;
        check_length("author", &self.author, 1, AUTHOR_MAX)?;
        check_publication_year(self.publication_year)?;
        Ok(())
    }

    /// Validate and convert into store fields.
    pub fn into_create(self) -> Result<BookCreate, DomainError> {
        self.validate()?;
        Ok(BookCreate {
            title: self.title,
            author: self.author,
            publication_year: self.publication_year,
            category_id: self.category_id,
        })
    }
}

/// Partial update; absent fields keep their current value.
///
/// `category_id` distinguishes a missing key from an explicit `null`, which
/// detaches the book from its category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BookPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub publication_year: Option<i32>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub category_id: Option<Option<i32>>,
}

impl BookPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.publication_year.is_none()
            && self.category_id.is_none()
    }

    /// Only supplied fields are checked.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(title) = &self.title {
            check_length("title", title, 1, TITLE_MAX)?;
        }
        if let Some(author) = &self.author {
            check_length("author", author, 1, AUTHOR_MAX)?;
        }
        if let Some(year) = self.publication_year {
            check_publication_year(year)?;
        }
        Ok(())
    }

    pub fn into_update(self) -> Result<BookUpdate, DomainError> {
        self.validate()?;
        Ok(BookUpdate {
            title: self.title,
            author: self.author,
            publication_year: self.publication_year,
            category_id: self.category_id,
        })
    }
}
