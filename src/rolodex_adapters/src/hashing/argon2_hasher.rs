use argon2::{Algorithm, Argon2, Params, Version};
use rolodex_core::{HashError, PasswordDigest, PasswordHasher};
use secrecy::{ExposeSecret, Secret};

const MEMORY_COST_KIB: u32 = 15000;
const ITERATIONS: u32 = 2;
const PARALLELISM: u32 = 1;
const DIGEST_LENGTH: usize = 32;
const MIN_SALT_LENGTH: usize = 8;

/// Keyed Argon2id with a single service-wide salt.
///
/// The output depends only on the plaintext, the salt and the key, so equal
/// passwords always produce equal digests and sign-in can compare by equality.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    key: Secret<String>,
    salt: Secret<String>,
}

impl Argon2PasswordHasher {
    pub fn new(key: Secret<String>, salt: Secret<String>) -> Result<Self, HashError> {
        if salt.expose_secret().len() < MIN_SALT_LENGTH {
            return Err(HashError::InvalidConfiguration(format!(
                "salt must be at least {} bytes",
                MIN_SALT_LENGTH
            )));
        }
        if key.expose_secret().is_empty() {
            return Err(HashError::InvalidConfiguration(
                "hashing key must not be empty".to_string(),
            ));
        }
        Ok(Self { key, salt })
    }
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, plaintext: &Secret<String>) -> Result<PasswordDigest, HashError> {
        let current_span: tracing::Span = tracing::Span::current();
        let plaintext = plaintext.clone();
        let key = self.key.clone();
        let salt = self.salt.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let params = Params::new(
                    MEMORY_COST_KIB,
                    ITERATIONS,
                    PARALLELISM,
                    Some(DIGEST_LENGTH),
                )
                .map_err(|e| HashError::InvalidConfiguration(e.to_string()))?;

                let hasher = Argon2::new_with_secret(
                    key.expose_secret().as_bytes(),
                    Algorithm::Argon2id,
                    Version::V0x13,
                    params,
                )
                .map_err(|e| HashError::InvalidConfiguration(e.to_string()))?;

                let mut digest = [0u8; DIGEST_LENGTH];
                hasher
                    .hash_password_into(
                        plaintext.expose_secret().as_bytes(),
                        salt.expose_secret().as_bytes(),
                        &mut digest,
                    )
                    .map_err(|e| HashError::UnexpectedError(e.to_string()))?;

                Ok(PasswordDigest::new(hex::encode(digest)))
            })
        })
        .await
        .map_err(|e| HashError::UnexpectedError(e.to_string()))?
    }
}
