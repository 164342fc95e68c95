//! Field limits shared by the input types.

use crate::errors::domain::DomainError;

pub const TITLE_MAX: usize = 200;
pub const AUTHOR_MAX: usize = 100;
pub const CATEGORY_NAME_MAX: usize = 100;
pub const DESCRIPTION_MAX: usize = 500;

pub const PUBLICATION_YEAR_MIN: i32 = 1000;
pub const PUBLICATION_YEAR_MAX: i32 = 2030;

/// Length is counted in characters, not bytes.
pub fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), DomainError> {
    let len = value.chars().count();
    if len < min {
        return Err(DomainError::validation(format!(
            "{field} must be at least {min} character{} long",
            if min == 1 { "" } else { "s" }
        )));
    }
    if len > max {
        return Err(DomainError::validation(format!(
            "{field} must be at most {max} characters long"
        )));
    }
    Ok(())
}

pub fn check_publication_year(year: i32) -> Result<(), DomainError> {
    if !(PUBLICATION_YEAR_MIN..=PUBLICATION_YEAR_MAX).contains(&year) {
        return Err(DomainError::validation(format!(
            "publication_year must be between {PUBLICATION_YEAR_MIN} and {PUBLICATION_YEAR_MAX}, got {year}"
        )));
    }
    Ok(())
}
