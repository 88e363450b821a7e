pub mod access_token;
pub mod audit;
pub mod auth_service;
pub mod cancellation;
pub mod config;
pub mod refresh_token;

pub use access_token::{AccessTokenCodec, AccessTokenError, Claims};
pub use audit::AuditEmitter;
pub use auth_service::AuthService;
pub use cancellation::run_cancellable;
pub use config::{
    AuthConfig, AuthConfigError, DEFAULT_ACCESS_TOKEN_TTL_IN_SECONDS,
    DEFAULT_REFRESH_TOKEN_TTL_IN_DAYS, RotationPolicy,
};
pub use refresh_token::generate_refresh_token;
