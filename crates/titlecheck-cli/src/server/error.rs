//! API error types and handling.

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use titlecheck::TitleCheckError;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from client (missing file part, bad extension).
    BadRequest(String),
    /// Upload exceeded the configured body limit.
    PayloadTooLarge(String),
    /// The upload lacks required columns.
    Schema(Vec<String>),
    /// The upload could not be read as a table.
    Input(String),
    /// Internal server error.
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    missing_columns: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, error, missing_columns) = match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request", None),
            ApiError::PayloadTooLarge(_) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large", None)
            }
            ApiError::Schema(columns) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "schema_error", Some(columns))
            }
            ApiError::Input(_) => (StatusCode::BAD_REQUEST, "input_error", None),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal", None),
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
                missing_columns,
            }),
        )
            .into_response()
    }
}

impl From<TitleCheckError> for ApiError {
    fn from(err: TitleCheckError) -> Self {
        match err {
            TitleCheckError::Schema { missing_columns } => ApiError::Schema(missing_columns),
            TitleCheckError::Input(e) => ApiError::Input(e.to_string()),
            TitleCheckError::Json(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(err.body_text())
        } else {
            ApiError::BadRequest(err.body_text())
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "{}", msg),
            ApiError::PayloadTooLarge(msg) => write!(f, "Upload too large: {}", msg),
            ApiError::Schema(columns) => {
                write!(f, "Missing columns in the input file: {}", columns.join(", "))
            }
            ApiError::Input(msg) => write!(f, "Could not read the file: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
