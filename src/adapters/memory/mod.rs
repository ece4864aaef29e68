pub mod book_store;

pub use book_store::{BookStore, StoreError};
