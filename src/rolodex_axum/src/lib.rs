//! Axum routes for the rolodex authentication core.
//!
//! Handlers are generic over [`rolodex_core::Authenticator`], so any
//! implementation can be mounted:
//!
//! ```ignore
//! let state = AppState::new(auth_service, shutdown.clone(), refresh_cookie);
//! let app = Router::new().nest("/api/v1/auth", rolodex_axum::auth_router(state));
//! ```

pub mod cookie;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;


use axum::{
    Router,
    routing::{get, post},
};
use rolodex_core::Authenticator;

pub use error::ApiError;
pub use middleware::{AuthenticatedUser, require_access_token};
pub use state::{AppState, RefreshCookieConfig};

/// Public auth routes plus the bearer-protected `/session` probe.
pub fn auth_router<A: Authenticator>(state: AppState<A>) -> Router {
    let protected = Router::new()
        .route("/session", get(routes::session))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_access_token::<A>,
        ));

    Router::new()
        .route("/sign-up", post(routes::sign_up::<A>))
        .route("/sign-in", post(routes::sign_in::<A>))
        .route("/refresh", post(routes::refresh::<A>))
        .merge(protected)
        .with_state(state)
}
