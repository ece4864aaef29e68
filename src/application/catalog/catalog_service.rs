use crate::domain::{Book, Isbn};
use crate::ports::BookStore;
use std::sync::Arc;

use super::errors::{CatalogApplicationError, Result};

/// サービスの依存関係
///
/// データ構造として定義し、各操作の関数に明示的に渡す。
/// ストアはプロセス全体のグローバル状態ではなく、ここから注入される。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_store: Arc<dyn BookStore>,
}

/// 全書籍を取得する
///
/// 順序は規定しない。
pub async fn list_books(deps: &ServiceDependencies) -> Result<Vec<Book>> {
    let books = deps
        .book_store
        .list()
        .await
        .map_err(CatalogApplicationError::StoreError)?;

    tracing::debug!(count = books.len(), "listed books");
    Ok(books)
}

/// ISBNで書籍を取得する
///
/// # エラー
/// - BookNotFound: ISBNが存在しない
/// - StoreError: ストアの読み込み失敗
pub async fn get_book(deps: &ServiceDependencies, isbn: &Isbn) -> Result<Book> {
    deps.book_store
        .get(isbn)
        .await
        .map_err(CatalogApplicationError::StoreError)?
        .ok_or_else(|| CatalogApplicationError::BookNotFound(isbn.clone()))
}

/// 書籍を新規登録する
///
/// 書籍自身の `isbn` がキーになる。既に存在する場合はストアを変更しない。
///
/// # 戻り値
/// 成功時は登録された書籍のISBN
///
/// # エラー
/// - DuplicateIsbn: 同じISBNが既に存在する
/// - StoreError: ストアの書き込み失敗
pub async fn add_book(deps: &ServiceDependencies, book: Book) -> Result<Isbn> {
    let requested = book.isbn.clone();

    let created = deps
        .book_store
        .create(book)
        .await
        .map_err(CatalogApplicationError::StoreError)?;

    match created {
        Some(isbn) => {
            tracing::info!(isbn = %isbn, "book created");
            Ok(isbn)
        }
        None => {
            tracing::warn!(isbn = %requested, "book already exists");
            Err(CatalogApplicationError::DuplicateIsbn(requested))
        }
    }
}

/// 既存の書籍を丸ごと置き換える
///
/// 書籍はパスで指定された `isbn` の位置に保存される。
/// リクエストボディ側の `book.isbn` はキーとして使わない（キーの変更はできない）。
///
/// # エラー
/// - BookNotFound: ISBNが存在しない（ストアは変更されない）
/// - StoreError: ストアの書き込み失敗
pub async fn replace_book(deps: &ServiceDependencies, isbn: &Isbn, book: Book) -> Result<()> {
    if book.isbn != *isbn {
        tracing::debug!(
            isbn = %isbn,
            body_isbn = %book.isbn,
            "body isbn differs from path, storing under path key"
        );
    }

    let exists = deps
        .book_store
        .update(isbn, book)
        .await
        .map_err(CatalogApplicationError::StoreError)?;

    if !exists {
        return Err(CatalogApplicationError::BookNotFound(isbn.clone()));
    }

    tracing::info!(isbn = %isbn, "book replaced");
    Ok(())
}

/// 書籍を削除する
///
/// 冪等: 存在しないISBNの削除も成功として扱う。
pub async fn remove_book(deps: &ServiceDependencies, isbn: &Isbn) -> Result<()> {
    deps.book_store
        .delete(isbn)
        .await
        .map_err(CatalogApplicationError::StoreError)?;

    tracing::info!(isbn = %isbn, "book deleted");
    Ok(())
}
