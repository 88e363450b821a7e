pub mod app;
pub mod helpers;
pub mod telemetry;

pub use app::{AUTH_ROUTES_PREFIX, RolodexApp, shutdown_signal};

use rolodex_adapters::{
    Argon2PasswordHasher, PostgresSessionStore, PostgresUserStore, RedisAuditSink,
    RolodexSettings,
};
use rolodex_application::{AuthConfigError, AuthService};
use rolodex_axum::RefreshCookieConfig;

use crate::helpers::{configure_postgresql, configure_redis};

pub type ProductionAuthService =
    AuthService<PostgresUserStore, PostgresSessionStore, RedisAuditSink, Argon2PasswordHasher>;

/// Wires the auth service to PostgreSQL, the Redis audit queue and Argon2.
pub async fn build_auth_service(
    settings: &RolodexSettings,
) -> color_eyre::Result<ProductionAuthService> {
    let auth_config = settings.auth_config()?;

    let pg_pool = configure_postgresql(settings).await?;
    let redis_conn = configure_redis(settings).await?;

    let hasher = Argon2PasswordHasher::new(
        settings.auth.password_pepper.clone(),
        settings.auth.password_salt.clone(),
    )?;

    Ok(AuthService::new(
        PostgresUserStore::new(pg_pool.clone()),
        PostgresSessionStore::new(pg_pool),
        RedisAuditSink::new(redis_conn, settings.redis.audit_queue.clone()),
        hasher,
        &auth_config,
    ))
}

pub fn refresh_cookie_config(
    settings: &RolodexSettings,
) -> Result<RefreshCookieConfig, AuthConfigError> {
    Ok(RefreshCookieConfig {
        name: settings.auth.refresh_cookie_name.clone(),
        max_age_in_seconds: settings.auth_config()?.refresh_token_ttl().num_seconds(),
    })
}
