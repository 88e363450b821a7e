use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::{CookieJar, WithRejection};
use rolodex_core::{Authenticator, Email, Password, SignInInput};
use secrecy::Secret;
use serde::Deserialize;

use crate::{cookie::create_refresh_cookie, error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

/// Returns the access token in the body and the refresh token as a cookie.
#[tracing::instrument(name = "Sign in", skip(state, jar, request))]
pub async fn sign_in<A: Authenticator>(
    State(state): State<AppState<A>>,
    jar: CookieJar,
    WithRejection(Json(request), _): WithRejection<Json<SignInRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let input = SignInInput {
        email: Email::try_from(request.email)?,
        password: Password::try_from(request.password)?,
    };

    let ctx = state.request_context();
    let tokens = state.authenticator.sign_in(&ctx, input).await?;

    let cookie = create_refresh_cookie(&tokens.refresh_token, &state.refresh_cookie)?;

    Ok((
        jar.add(cookie),
        Json(serde_json::json!({ "token": tokens.access_token })),
    ))
}
