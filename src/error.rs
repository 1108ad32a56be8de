use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures the translate handler surfaces to the caller.
///
/// Each variant is one failure stage of the request, with the status code
/// and `{"error": ...}` body the API contract fixes for it. Nothing here is
/// retried; every error converts straight into a response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body was not valid JSON for the expected shape.
    #[error("{0}")]
    BadRequest(String),

    /// The completion call failed: transport error or provider error status.
    #[error("{0}")]
    Upstream(String),

    /// The provider answered with an empty choice list.
    #[error("Completion returned no choices")]
    EmptyCompletion,

    /// The provider's text was not the expected JSON document. The raw
    /// provider output is never echoed back to the caller.
    #[error("Failed to parse GPT response")]
    ParseFailure,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) | ApiError::EmptyCompletion | ApiError::ParseFailure => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
