//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON body. Details are
//! logged server-side; the client only gets the user-facing message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use omniwriter_service::ServiceError;

#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: invalid input from caller.
    BadRequest(String),
    /// 404 Not Found: requested record is not in the history view.
    NotFound(String),
    /// 409 Conflict: a delete could not be confirmed; the client should re-fetch.
    Conflict(String),
    /// 502 Bad Gateway: the generation provider failed.
    BadGateway(String),
    /// 503 Service Unavailable: no store accepted the write.
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            Self::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        tracing::debug!(error = ?err, "request failed");
        let message = err.user_message();
        match err {
            ServiceError::InvalidInput(_) => Self::BadRequest(message),
            ServiceError::GenerationFailure(_) => Self::BadGateway(message),
            ServiceError::DeleteReconciliation { .. } => Self::Conflict(message),
            ServiceError::PersistenceUnavailable(_) => Self::ServiceUnavailable(message),
        }
    }
}
