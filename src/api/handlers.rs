use crate::application::catalog::{
    ServiceDependencies, add_book, get_book as execute_get_book, list_books as execute_list_books,
    remove_book, replace_book,
};
use crate::domain::Isbn;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, Uri, header::LOCATION},
    response::IntoResponse,
};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{BookPayload, decode_book},
};

/// コレクションルートのパス
pub const BOOKS_PATH: &str = "/books";

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

/// アイテムルートのパスからISBNを取り出す
///
/// コレクションのプレフィックス以降をそのまま使う（デコードも検証もしない）。
/// `/books/` の場合は空のISBNになる。
pub fn item_isbn(uri: &Uri) -> Isbn {
    let path = uri.path();
    let isbn = path
        .strip_prefix(BOOKS_PATH)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or_default();
    Isbn::new(isbn)
}

/// 作成した書籍の Location ヘッダー値
pub fn book_location(isbn: &Isbn) -> String {
    format!("{}/{}", BOOKS_PATH, isbn)
}

// ============================================================================
// Collection handlers (/books)
// ============================================================================

/// GET /books - 全書籍を取得
pub async fn list_books(State(state): State<Arc<AppState>>) -> Result<BookPayload, ApiError> {
    let books = execute_list_books(&state.service_deps).await?;
    Ok(BookPayload::Many(books))
}

/// POST /books - 書籍を新規登録
///
/// 成功時は201と `Location: /books/{isbn}`、ISBNが重複していれば409。
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let book = decode_book(&body)?;

    let isbn = add_book(&state.service_deps, book).await?;

    let mut headers = HeaderMap::new();
    // 制御文字を含むISBNはヘッダーにできないため Location を省略する
    match HeaderValue::from_bytes(book_location(&isbn).as_bytes()) {
        Ok(location) => {
            headers.insert(LOCATION, location);
        }
        Err(_) => tracing::warn!(isbn = %isbn, "isbn is not a valid header value, omitting Location"),
    }

    Ok((StatusCode::CREATED, headers))
}

/// その他のメソッド - 400
pub async fn unsupported_collection_method() -> ApiError {
    ApiError::UnsupportedMethod("Unsupported request method")
}

// ============================================================================
// Item handlers (/books/{isbn})
// ============================================================================

/// GET /books/{isbn} - 書籍をISBNで取得
///
/// 見つからない場合は本文なしの404。
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<BookPayload, ApiError> {
    let isbn = item_isbn(&uri);
    let book = execute_get_book(&state.service_deps, &isbn).await?;
    Ok(BookPayload::One(book))
}

/// PUT /books/{isbn} - 書籍を丸ごと置き換え
///
/// パスのISBNの位置に保存する。ボディの `isbn` はキーとして使わない。
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let isbn = item_isbn(&uri);
    let book = decode_book(&body)?;

    replace_book(&state.service_deps, &isbn, book).await?;

    Ok(StatusCode::OK)
}

/// DELETE /books/{isbn} - 書籍を削除
///
/// 存在の有無にかかわらず200を返す。
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<StatusCode, ApiError> {
    let isbn = item_isbn(&uri);
    remove_book(&state.service_deps, &isbn).await?;
    Ok(StatusCode::OK)
}

/// その他のメソッド - 400
pub async fn unsupported_item_method() -> ApiError {
    ApiError::UnsupportedMethod("unsupported request method")
}
