use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("Error decoding cached recommendations")]
    CacheDecode(#[source] serde_json::Error),

    #[error("Error encoding recommendations for cache")]
    CacheEncode(#[source] serde_json::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Cache(_)
            | AppError::CacheDecode(_)
            | AppError::CacheEncode(_)
            | AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> serde_json::Error {
        serde_json::from_str::<Vec<String>>("not json").unwrap_err()
    }

    #[test]
    fn test_cache_decode_message() {
        let err = AppError::CacheDecode(decode_error());
        assert_eq!(err.to_string(), "Error decoding cached recommendations");
    }

    #[test]
    fn test_cache_encode_message() {
        let err = AppError::CacheEncode(decode_error());
        assert_eq!(err.to_string(), "Error encoding recommendations for cache");
    }

    #[test]
    fn test_not_found_message_is_verbatim() {
        let err = AppError::NotFound("Movie not found".to_string());
        assert_eq!(err.to_string(), "Movie not found");
    }
}
