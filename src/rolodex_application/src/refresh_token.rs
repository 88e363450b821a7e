use rand::RngCore;

/// Number of random bytes behind every refresh token.
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Draws a fresh opaque refresh token from the thread-local CSPRNG.
pub fn generate_refresh_token() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
