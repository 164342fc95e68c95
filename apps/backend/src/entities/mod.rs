pub mod books;
pub mod categories;

pub use books::Entity as Books;
pub use books::Model as BookRow;
pub use categories::Entity as Categories;
pub use categories::Model as CategoryRow;
