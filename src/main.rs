use bookshelf::{
    adapters::memory::BookStore as InMemoryBookStore,
    api::{handlers::AppState, router::create_router},
    application::catalog::ServiceDependencies,
    config::ServerConfig,
    domain::seed_catalog,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize the store
    let book_store = if config.seed_catalog {
        InMemoryBookStore::with_books(seed_catalog())
    } else {
        InMemoryBookStore::new()
    };
    tracing::info!(books = book_store.len(), "Book store initialized");

    let service_deps = ServiceDependencies {
        book_store: Arc::new(book_store),
    };

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
