use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use rolodex_core::Authenticator;

use crate::{
    cookie::{create_refresh_cookie, extract_refresh_token},
    error::ApiError,
    state::AppState,
};

/// Exchanges the refresh token cookie for a new access token and a rotated cookie.
#[tracing::instrument(name = "Refresh tokens", skip(state, jar))]
pub async fn refresh<A: Authenticator>(
    State(state): State<AppState<A>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, ApiError> {
    let presented = extract_refresh_token(&jar, &state.refresh_cookie)?;

    let ctx = state.request_context();
    let tokens = state.authenticator.refresh_tokens(&ctx, presented).await?;

    let cookie = create_refresh_cookie(&tokens.refresh_token, &state.refresh_cookie)?;

    Ok((
        jar.add(cookie),
        Json(serde_json::json!({ "token": tokens.access_token })),
    ))
}
