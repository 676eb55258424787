//! Mapping of shelf errors onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

use crate::domain::ShelfError;

/// Error returned by API handlers
#[derive(Debug)]
pub enum ApiError {
    /// No live session on the request
    Unauthenticated,

    /// The shelf rejected the operation
    Shelf(ShelfError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Shelf(ShelfError::Validation { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Shelf(ShelfError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Shelf(ShelfError::Unauthorized) => StatusCode::UNAUTHORIZED,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Unauthenticated => "Unauthorized".to_string(),
            ApiError::Shelf(ShelfError::NotFound(_)) => "Not found".to_string(),
            ApiError::Shelf(err) => err.to_string(),
        }
    }
}

impl From<ShelfError> for ApiError {
    fn from(err: ShelfError) -> Self {
        ApiError::Shelf(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Shelf(err) = &self {
            warn!(%status, error = %err, "Request rejected");
        }

        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}
