use crate::application::catalog::CatalogApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::{CodecError, ErrorResponse};

/// API層のエラー型
///
/// アプリケーション層とJSON変換のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub enum ApiError {
    Application(CatalogApplicationError),
    Codec(CodecError),
    /// ルートが受け付けないHTTPメソッド（本文はそのまま返す）
    UnsupportedMethod(&'static str),
}

impl From<CatalogApplicationError> for ApiError {
    fn from(err: CatalogApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl From<CodecError> for ApiError {
    fn from(err: CodecError) -> Self {
        ApiError::Codec(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // 404 Not Found / 409 Conflict - 本文なし
            ApiError::Application(CatalogApplicationError::BookNotFound(_)) => {
                StatusCode::NOT_FOUND.into_response()
            }
            ApiError::Application(CatalogApplicationError::DuplicateIsbn(_)) => {
                StatusCode::CONFLICT.into_response()
            }

            // 400 Bad Request - クライアントの誤り
            ApiError::Codec(CodecError::Malformed(ref e)) => {
                tracing::debug!("Rejected request body: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(format!("Malformed book payload: {}", e))),
                )
                    .into_response()
            }
            ApiError::UnsupportedMethod(message) => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::Application(CatalogApplicationError::StoreError(ref e)) => {
                tracing::error!("Book store error: {}", e);
                internal_error()
            }
            ApiError::Codec(CodecError::Encode(ref e)) => {
                tracing::error!("Response encoding error: {}", e);
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("An unexpected error occurred")),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Isbn;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::from(CatalogApplicationError::BookNotFound(Isbn::from("x")));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_duplicate_maps_to_409() {
        let err = ApiError::from(CatalogApplicationError::DuplicateIsbn(Isbn::from("x")));
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_malformed_body_maps_to_400() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ApiError::from(CodecError::Malformed(json_err));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_error_maps_to_500() {
        let err = ApiError::from(CatalogApplicationError::StoreError("lock poisoned".into()));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
