//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use domain::SalesError;
use users::UserStoreError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from the client.
    BadRequest(String),
    /// Sales lifecycle error.
    Sales(SalesError),
    /// User subsystem error.
    Users(UserStoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Sales(err) => sales_error_to_response(err),
            ApiError::Users(err) => users_error_to_response(err),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

/// Maps a sales error to a status code, keeping caller-fixable failures
/// in the 4xx class and infrastructure failures in the 5xx class.
fn sales_error_to_response(err: SalesError) -> (StatusCode, String) {
    if err.is_infrastructure() {
        tracing::error!(error = %err, "infrastructure failure");
    }

    let status = match &err {
        SalesError::InvalidAmount { .. }
        | SalesError::UserNotFound { .. }
        | SalesError::InvalidStatusValue { .. } => StatusCode::BAD_REQUEST,
        SalesError::NotFound(_) => StatusCode::NOT_FOUND,
        SalesError::InvalidTransition { .. } => StatusCode::CONFLICT,
        SalesError::ValidationUnavailable(_) => StatusCode::BAD_GATEWAY,
        SalesError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, err.to_string())
}

fn users_error_to_response(err: UserStoreError) -> (StatusCode, String) {
    let status = match &err {
        UserStoreError::EmptyId => StatusCode::BAD_REQUEST,
        UserStoreError::NotFound(_) => StatusCode::NOT_FOUND,
    };

    (status, err.to_string())
}

impl From<SalesError> for ApiError {
    fn from(err: SalesError) -> Self {
        ApiError::Sales(err)
    }
}

impl From<UserStoreError> for ApiError {
    fn from(err: UserStoreError) -> Self {
        ApiError::Users(err)
    }
}
