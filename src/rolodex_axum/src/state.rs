use rolodex_core::Authenticator;
use tokio_util::sync::CancellationToken;

/// Name and lifetime of the refresh token cookie.
#[derive(Debug, Clone)]
pub struct RefreshCookieConfig {
    pub name: String,
    pub max_age_in_seconds: i64,
}

/// Shared state of the auth routes.
///
/// `shutdown` is the server-wide token; every request runs under a child of it.
#[derive(Clone)]
pub struct AppState<A: Authenticator> {
    pub authenticator: A,
    pub shutdown: CancellationToken,
    pub refresh_cookie: RefreshCookieConfig,
}

impl<A: Authenticator> AppState<A> {
    pub fn new(
        authenticator: A,
        shutdown: CancellationToken,
        refresh_cookie: RefreshCookieConfig,
    ) -> Self {
        Self {
            authenticator,
            shutdown,
            refresh_cookie,
        }
    }

    pub fn request_context(&self) -> CancellationToken {
        self.shutdown.child_token()
    }
}
