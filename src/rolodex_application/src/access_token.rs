use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rolodex_core::UserId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessTokenError {
    #[error("Token lifetime out of range")]
    LifetimeOutOfRange,
    #[error("Failed to sign token: {0}")]
    Signing(jsonwebtoken::errors::Error),
    #[error("Token rejected: {0}")]
    Rejected(jsonwebtoken::errors::Error),
    #[error("Token subject is not a user id")]
    InvalidSubject,
}

/// Claim-set carried by every access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signs and verifies HS256 access tokens with the service secret.
#[derive(Clone)]
pub struct AccessTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl AccessTokenCodec {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Signs `{sub, iat, exp}` for `user_id`, valid from `issued_at` for the configured lifetime.
    pub fn issue(
        &self,
        user_id: UserId,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AccessTokenError> {
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or(AccessTokenError::LifetimeOutOfRange)?;

        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(AccessTokenError::Signing)
    }

    /// Checks signature, structure and expiry, then returns the subject.
    pub fn verify(&self, token: &str) -> Result<UserId, AccessTokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(AccessTokenError::Rejected)?;

        claims
            .sub
            .parse::<i64>()
            .map(UserId::new)
            .map_err(|_| AccessTokenError::InvalidSubject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

    fn codec() -> AccessTokenCodec {
        AccessTokenCodec::new(SECRET, Duration::minutes(15))
    }

    #[test]
    fn issued_token_is_a_compact_jws() {
        let token = codec().issue(UserId::new(1), Utc::now()).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn expired_token_is_rejected_despite_valid_signature() {
        let codec = codec();
        let token = codec
            .issue(UserId::new(1), Utc::now() - Duration::hours(1))
            .unwrap();

        assert!(matches!(
            codec.verify(&token),
            Err(AccessTokenError::Rejected(_))
        ));
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let other = AccessTokenCodec::new(b"ffffffffffffffffffffffffffffffff", Duration::minutes(15));
        let token = other.issue(UserId::new(1), Utc::now()).unwrap();

        assert!(codec().verify(&token).is_err());
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let codec = codec();
        let token = codec.issue(UserId::new(1), Utc::now()).unwrap();
        let forged = codec.issue(UserId::new(2), Utc::now()).unwrap();

        let mut parts: Vec<&str> = token.split('.').collect();
        let forged_parts: Vec<&str> = forged.split('.').collect();
        parts[1] = forged_parts[1];

        assert!(codec.verify(&parts.join(".")).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(codec().verify("invalid_token").is_err());
        assert!(codec().verify("").is_err());
    }

    #[test]
    fn non_numeric_subject_is_rejected() {
        let claims = Claims {
            sub: "ann@x.com".to_string(),
            iat: Utc::now().timestamp(),
            exp: (Utc::now() + Duration::minutes(5)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert!(matches!(
            codec().verify(&token),
            Err(AccessTokenError::InvalidSubject)
        ));
    }

    #[quickcheck_macros::quickcheck]
    fn issue_then_verify_returns_the_same_user(id: i64) -> bool {
        let codec = codec();
        let token = codec.issue(UserId::new(id), Utc::now()).unwrap();
        codec.verify(&token).unwrap() == UserId::new(id)
    }
}
