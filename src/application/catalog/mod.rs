mod catalog_service;
mod errors;

pub use catalog_service::{
    ServiceDependencies, add_book, get_book, list_books, remove_book, replace_book,
};
pub use errors::{CatalogApplicationError, Result};
