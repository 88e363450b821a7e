use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use rolodex_core::{Authenticator, UserId};

use crate::{error::ApiError, state::AppState};

/// Identity of the caller, inserted into request extensions by
/// [`require_access_token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub UserId);

/// Rejects requests without a valid `Authorization: Bearer` access token.
///
/// Usage: `.route_layer(middleware::from_fn_with_state(state, require_access_token::<A>))`;
/// handlers then take `Extension<AuthenticatedUser>`.
#[tracing::instrument(name = "Require access token", skip_all)]
pub async fn require_access_token<A: Authenticator>(
    State(state): State<AppState<A>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("missing or malformed authorization header");
            ApiError::MissingBearerToken
        })?;

    let user_id = state.authenticator.parse_access_token(token)?;

    req.extensions_mut().insert(AuthenticatedUser(user_id));
    Ok(next.run(req).await)
}
