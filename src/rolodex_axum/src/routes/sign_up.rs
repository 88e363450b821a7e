use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use rolodex_core::{Authenticator, Email, Password, SignUpInput, UserName};
use axum_extra::extract::WithRejection;
use secrecy::Secret;
use serde::Deserialize;

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Sign up", skip(state, request))]
pub async fn sign_up<A: Authenticator>(
    State(state): State<AppState<A>>,
    WithRejection(Json(request), _): WithRejection<Json<SignUpRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let input = SignUpInput {
        name: UserName::try_from(request.name)?,
        email: Email::try_from(request.email)?,
        password: Password::try_from(request.password)?,
    };

    let ctx = state.request_context();
    let user = state.authenticator.sign_up(&ctx, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Created.",
            "user": user,
        })),
    ))
}
