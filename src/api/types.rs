use crate::domain::Book;
use axum::{
    http::{HeaderValue, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::ApiError;

/// JSONレスポンスの Content-Type
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// JSONの変換エラー
#[derive(Debug, Error)]
pub enum CodecError {
    /// リクエストボディが書籍として解釈できない（クライアントの誤り）
    #[error("malformed book payload: {0}")]
    Malformed(#[source] serde_json::Error),

    /// レスポンスの生成に失敗した（サーバー側の障害）
    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}

/// リクエストボディを書籍にデコードする
///
/// 欠けているフィールドは空文字列、未知のフィールドは無視される。
/// ボディ全体が `null` の場合はすべて空の書籍になる。
/// 不正なJSONは `CodecError::Malformed` になる。
pub fn decode_book(body: &[u8]) -> Result<Book, CodecError> {
    let book: Option<Book> = serde_json::from_slice(body).map_err(CodecError::Malformed)?;
    Ok(book.unwrap_or_default())
}

/// 書籍レスポンス
///
/// 返却できるJSONの形はこの2つに限られる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookPayload {
    One(Book),
    Many(Vec<Book>),
}

impl BookPayload {
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        let encoded = match self {
            BookPayload::One(book) => serde_json::to_vec(book),
            BookPayload::Many(books) => serde_json::to_vec(books),
        };
        encoded.map_err(CodecError::Encode)
    }
}

impl IntoResponse for BookPayload {
    fn into_response(self) -> Response {
        match self.encode() {
            Ok(body) => (
                [(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
                body,
            )
                .into_response(),
            Err(e) => ApiError::from(e).into_response(),
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
