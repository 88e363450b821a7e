//! # Rolodex - Authentication & Session Library
//!
//! Facade crate re-exporting the public APIs of the rolodex auth components.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, `RefreshSession`, `AuditEvent`
//! - **Ports**: `UserStore`, `SessionStore`, `AuditSink`, `PasswordHasher`, `Authenticator`
//! - **Application**: `AuthService`, `AuthConfig`, `RotationPolicy`
//! - **Adapters**: `PostgresUserStore`, `PostgresSessionStore`, `RedisAuditSink`, `Argon2PasswordHasher`, ...
//! - **HTTP**: `auth_router`, `require_access_token`, `RolodexApp`

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use rolodex_core::*;
}

pub use rolodex_core::{
    AuditAction, AuditEntity, AuditEvent, AuthError, CancellationToken, Email, Password,
    RefreshSession, SignInInput, SignUpInput, TokenPair, User, UserError, UserId, UserName,
};

// ============================================================================
// Ports
// ============================================================================

pub use rolodex_core::{
    AuditSink, AuditSinkError, Authenticator, HashError, PasswordHasher, SessionStore,
    SessionStoreError, UserStore, UserStoreError,
};

// ============================================================================
// Application Layer
// ============================================================================

pub mod application {
    pub use rolodex_application::*;
}

pub use rolodex_application::{AuthConfig, AuthConfigError, AuthService, RotationPolicy};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

pub mod adapters {
    pub use rolodex_adapters::*;
}

pub use rolodex_adapters::{
    Argon2PasswordHasher, HashMapSessionStore, HashMapUserStore, InMemoryAuditSink,
    PostgresSessionStore, PostgresUserStore, RedisAuditSink, RolodexSettings,
};

// ============================================================================
// HTTP
// ============================================================================

pub use rolodex_axum::{
    ApiError, AppState, AuthenticatedUser, RefreshCookieConfig, auth_router,
    require_access_token,
};

pub use rolodex_service::{RolodexApp, build_auth_service, refresh_cookie_config};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
