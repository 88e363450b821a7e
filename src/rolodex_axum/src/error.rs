use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};
use rolodex_core::{AuthError, UserError};
use thiserror::Error;

/// Failure of an HTTP auth route, rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("Missing refresh token")]
    MissingRefreshToken,
    #[error("Missing or malformed authorization header")]
    MissingBearerToken,
    #[error("Failed to build refresh cookie: {0}")]
    Cookie(String),
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
}

impl From<UserError> for ApiError {
    fn from(error: UserError) -> Self {
        ApiError::Auth(AuthError::ValidationFailed(error))
    }
}

impl ApiError {
    fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Auth(error) if error.is_conflict())
    }

    fn status(&self) -> StatusCode {
        match self {
            error if error.is_conflict() => StatusCode::CONFLICT,
            ApiError::Auth(error) => match error {
                AuthError::ValidationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
                AuthError::NotFoundUser => StatusCode::BAD_REQUEST,
                AuthError::RefreshTokenExpired
                | AuthError::UnknownRefreshToken
                | AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
                AuthError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
                AuthError::StorageFailure(_)
                | AuthError::HashingFailure(_)
                | AuthError::TokenIssuance(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::MissingRefreshToken | ApiError::MissingBearerToken => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::Cookie(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidBody(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();

        let message = if status.is_server_error() && status != StatusCode::SERVICE_UNAVAILABLE {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else if self.is_conflict() {
            "User already exists".to_string()
        } else {
            self.to_string()
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
