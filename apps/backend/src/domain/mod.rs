//! Domain layer: input types for books and categories and the field rules
//! they must satisfy before anything reaches the store.

pub mod books;
pub mod categories;
pub mod rules;

#[cfg(test)]
mod test_prelude;
