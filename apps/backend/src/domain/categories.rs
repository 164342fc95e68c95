//! Category input types.

use serde::Deserialize;

use super::rules::{check_length, CATEGORY_NAME_MAX, DESCRIPTION_MAX};
use crate::errors::domain::DomainError;
use crate::repos::categories::{CategoryCreate, CategoryUpdate};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewCategory {
    pub fn validate(&self) -> Result<(), DomainError> {
        check_length("name", &self.name, 1, CATEGORY_NAME_MAX)?;
        if let Some(description) = &self.description {
            check_length("description", description, 0, DESCRIPTION_MAX)?;
        }
        Ok(())
    }

    pub fn into_create(self) -> Result<CategoryCreate, DomainError> {
        self.validate()?;
        Ok(CategoryCreate {
            name: self.name,
            description: self.description,
        })
    }
}

/// Partial update; an explicit `"description": null` clears the description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
}

impl CategoryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(name) = &self.name {
            check_length("name", name, 1, CATEGORY_NAME_MAX)?;
        }
        if let Some(Some(description)) = &self.description {
            check_length("description", description, 0, DESCRIPTION_MAX)?;
        }
        Ok(())
    }

    pub fn into_update(self) -> Result<CategoryUpdate, DomainError> {
        self.validate()?;
        Ok(CategoryUpdate {
            name: self.name,
            description: self.description,
        })
    }
}
