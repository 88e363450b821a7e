use axum_extra::extract::{CookieJar, cookie::Cookie};

use crate::{error::ApiError, state::RefreshCookieConfig};

// Create cookie carrying the refresh token, expiring together with its session
pub fn create_refresh_cookie(
    token: &str,
    config: &RefreshCookieConfig,
) -> Result<Cookie<'static>, ApiError> {
    let raw = format!(
        "{}={}; HttpOnly; Secure; SameSite=Lax; Path=/; Max-Age={}",
        config.name, token, config.max_age_in_seconds
    );
    Cookie::parse(raw).map_err(|e| ApiError::Cookie(e.to_string()))
}

pub fn extract_refresh_token<'a>(
    jar: &'a CookieJar,
    config: &RefreshCookieConfig,
) -> Result<&'a str, ApiError> {
    match jar.get(&config.name) {
        Some(cookie) if !cookie.value().is_empty() => Ok(cookie.value()),
        _ => Err(ApiError::MissingRefreshToken),
    }
}
