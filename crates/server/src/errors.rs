use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use common::types::ErrorBody;
use service::errors::ServiceError;

/// Failures the dispatcher does not turn into a response itself.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("database connection failed: {0}")]
    Connect(String),
    #[error("invalid request body: {0}")]
    Body(String),
    #[error("response encoding failed: {0}")]
    Encode(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// 500 reply for the HTTP adapter.
#[derive(Debug)]
pub struct ApiError(pub String);

impl From<DispatchError> for ApiError {
    fn from(e: DispatchError) -> Self {
        ApiError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let msg = self.0;
        error!(error = %msg, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
            Json(ErrorBody { error: &msg }),
        )
            .into_response()
    }
}
