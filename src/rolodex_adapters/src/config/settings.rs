use chrono::Duration;
use config::{Config, ConfigError, Environment, File};
use rolodex_application::{
    AuthConfig, AuthConfigError, DEFAULT_ACCESS_TOKEN_TTL_IN_SECONDS,
    DEFAULT_REFRESH_TOKEN_TTL_IN_DAYS, RotationPolicy,
};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{self, env};

#[derive(Debug, Clone, Deserialize)]
pub struct RolodexSettings {
    pub server: ServerSettings,
    pub auth: AuthSettings,
    pub postgres: PostgresSettings,
    pub redis: RedisSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt_secret: Secret<String>,
    /// Argon2 secret, independent of `jwt_secret`.
    pub password_pepper: Secret<String>,
    pub password_salt: Secret<String>,
    pub access_token_ttl_in_seconds: i64,
    pub refresh_token_ttl_in_days: i64,
    pub revoke_rotated_sessions: bool,
    pub refresh_cookie_name: String,
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisSettings {
    pub host_name: String,
    pub audit_queue: String,
}

impl RolodexSettings {
    /// Reads `config/base.json` when present, then `ROLODEX__*` environment
    /// variables (after loading `.env`).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::build(Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix(env::ENV_PREFIX)
            .separator(env::ENV_SEPARATOR)
            .list_separator(",")
            .with_list_parse_key("auth.allowed_origins")
            .try_parsing(true)
    }

    fn build(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.address", constants::prod::APP_ADDRESS)?
            .set_default(
                "auth.access_token_ttl_in_seconds",
                DEFAULT_ACCESS_TOKEN_TTL_IN_SECONDS,
            )?
            .set_default(
                "auth.refresh_token_ttl_in_days",
                DEFAULT_REFRESH_TOKEN_TTL_IN_DAYS,
            )?
            .set_default("auth.revoke_rotated_sessions", true)?
            .set_default("auth.refresh_cookie_name", constants::REFRESH_TOKEN_COOKIE_NAME)?
            .set_default("auth.allowed_origins", Vec::<String>::new())?
            .set_default("redis.host_name", constants::prod::REDIS_HOST_NAME)?
            .set_default("redis.audit_queue", constants::AUDIT_QUEUE)?
            .add_source(File::with_name(constants::CONFIG_FILE).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Settings the auth service itself is constructed with.
    pub fn auth_config(&self) -> Result<AuthConfig, AuthConfigError> {
        let rotation = if self.auth.revoke_rotated_sessions {
            RotationPolicy::RevokeOnUse
        } else {
            RotationPolicy::Retain
        };

        let access_token_ttl = Duration::try_seconds(self.auth.access_token_ttl_in_seconds)
            .ok_or(AuthConfigError::TtlOutOfRange)?;
        let refresh_token_ttl = Duration::try_days(self.auth.refresh_token_ttl_in_days)
            .ok_or(AuthConfigError::TtlOutOfRange)?;

        Ok(AuthConfig::new(self.auth.jwt_secret.clone())?
            .with_access_token_ttl(access_token_ttl)?
            .with_refresh_token_ttl(refresh_token_ttl)?
            .with_rotation(rotation))
    }
}
