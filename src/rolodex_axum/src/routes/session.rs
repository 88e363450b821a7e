use axum::{Extension, Json, response::IntoResponse};

use crate::middleware::AuthenticatedUser;

/// Reports who the bearer token belongs to.
pub async fn session(
    Extension(AuthenticatedUser(user_id)): Extension<AuthenticatedUser>,
) -> impl IntoResponse {
    Json(serde_json::json!({ "user_id": user_id }))
}
