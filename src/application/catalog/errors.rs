use crate::domain::Isbn;
use thiserror::Error;

/// カタログ管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum CatalogApplicationError {
    /// 書籍が見つからない
    #[error("Book {0} not found")]
    BookNotFound(Isbn),

    /// 同じISBNの書籍が既に登録されている
    #[error("Book {0} already exists")]
    DuplicateIsbn(Isbn),

    /// BookStoreのエラー
    #[error("Book store error")]
    StoreError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CatalogApplicationError>;
