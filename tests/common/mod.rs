#![allow(dead_code)]

use bookshelf::adapters::memory::BookStore as InMemoryBookStore;
use bookshelf::api::handlers::AppState;
use bookshelf::api::router::create_router;
use bookshelf::application::catalog::ServiceDependencies;
use bookshelf::domain::Book;
use std::sync::Arc;

/// テスト用の依存関係を作成
///
/// 各テストが独立したストアを持つため、テスト間でデータは共有されない。
pub fn create_test_deps(books: Vec<Book>) -> ServiceDependencies {
    ServiceDependencies {
        book_store: Arc::new(InMemoryBookStore::with_books(books)),
    }
}

/// テスト用のルーターを作成
pub fn create_test_app(books: Vec<Book>) -> axum::Router {
    let app_state = Arc::new(AppState {
        service_deps: create_test_deps(books),
    });
    create_router(app_state)
}

pub fn dune() -> Book {
    Book::new("Dune", "Frank Herbert", "9780441013593")
}
