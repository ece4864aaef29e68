use axum::{
    Router,
    routing::{MethodRouter, get},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, create_book, delete_book, get_book, list_books, unsupported_collection_method,
    unsupported_item_method, update_book,
};

/// Creates the API router for the book catalog
///
/// Collection route:
/// - GET /books - List all books
/// - POST /books - Create a book
///
/// Item route (the rest of the path after `/books/` is the isbn, possibly empty):
/// - GET /books/{isbn} - Get a book
/// - PUT /books/{isbn} - Replace a book
/// - DELETE /books/{isbn} - Delete a book
///
/// Any other method on either route, HEAD included, gets 400 with a plain-text body.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/books", collection_routes())
        .route("/books/", item_routes())
        .route("/books/*isbn", item_routes())
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

fn collection_routes() -> MethodRouter<Arc<AppState>> {
    // `get` would also answer HEAD unless HEAD is routed explicitly
    get(list_books)
        .head(unsupported_collection_method)
        .post(create_book)
        .fallback(unsupported_collection_method)
}

fn item_routes() -> MethodRouter<Arc<AppState>> {
    get(get_book)
        .head(unsupported_item_method)
        .put(update_book)
        .delete(delete_book)
        .fallback(unsupported_item_method)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
