use axum::{
    Router,
    http::{HeaderValue, Method, header, request},
};
use rolodex_axum::{AppState, auth_router};
use rolodex_core::Authenticator;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

pub const AUTH_ROUTES_PREFIX: &str = "/api/v1/auth";

/// The HTTP application: auth routes plus CORS and request tracing.
pub struct RolodexApp {
    router: Router,
}

impl RolodexApp {
    pub fn new<A: Authenticator>(state: AppState<A>) -> Self {
        let router = Router::new().nest(AUTH_ROUTES_PREFIX, auth_router(state));
        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Finishes the router. Cross-origin requests are only allowed from
    /// `allowed_origins`; an empty list disables CORS entirely.
    pub fn into_router(mut self, allowed_origins: &[String]) -> Router {
        let allowed: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();

        if !allowed.is_empty() {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Serves until `shutdown` is cancelled, then drains in-flight requests.
    ///
    /// Requests still running observe the same token through their child
    /// contexts and abort their store calls.
    pub async fn run(
        self,
        listener: TcpListener,
        allowed_origins: &[String],
        shutdown: CancellationToken,
    ) -> Result<(), std::io::Error> {
        let router = self.into_router(allowed_origins);

        tracing::info!("Rolodex listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await
    }
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
