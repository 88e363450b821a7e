use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use rolodex_core::{
    AuditAction, AuditEntity, AuditSink, AuthError, Authenticator, NewRefreshSession, NewUser,
    PasswordHasher, SessionStore, SessionStoreError, SignInInput, SignUpInput, TokenPair, User,
    UserId, UserStore, UserStoreError,
};
use tokio_util::sync::CancellationToken;

use crate::{
    access_token::AccessTokenCodec,
    audit::AuditEmitter,
    cancellation::run_cancellable,
    config::{AuthConfig, RotationPolicy},
    refresh_token::generate_refresh_token,
};


/// Orchestrates sign-up, sign-in, refresh and access token verification.
pub struct AuthService<U, S, A, H>
where
    U: UserStore,
    S: SessionStore,
    A: AuditSink,
    H: PasswordHasher,
{
    user_store: Arc<U>,
    session_store: Arc<S>,
    audit: AuditEmitter<A>,
    hasher: Arc<H>,
    access_tokens: AccessTokenCodec,
    refresh_token_ttl: chrono::Duration,
    rotation: RotationPolicy,
}

impl<U, S, A, H> Clone for AuthService<U, S, A, H>
where
    U: UserStore,
    S: SessionStore,
    A: AuditSink,
    H: PasswordHasher,
{
    fn clone(&self) -> Self {
        Self {
            user_store: self.user_store.clone(),
            session_store: self.session_store.clone(),
            audit: self.audit.clone(),
            hasher: self.hasher.clone(),
            access_tokens: self.access_tokens.clone(),
            refresh_token_ttl: self.refresh_token_ttl,
            rotation: self.rotation,
        }
    }
}

impl<U, S, A, H> AuthService<U, S, A, H>
where
    U: UserStore,
    S: SessionStore,
    A: AuditSink,
    H: PasswordHasher,
{
    pub fn new(
        user_store: U,
        session_store: S,
        audit_sink: A,
        hasher: H,
        config: &AuthConfig,
    ) -> Self {
        Self {
            user_store: Arc::new(user_store),
            session_store: Arc::new(session_store),
            audit: AuditEmitter::new(Arc::new(audit_sink)),
            hasher: Arc::new(hasher),
            access_tokens: AccessTokenCodec::new(
                config.signing_secret(),
                config.access_token_ttl(),
            ),
            refresh_token_ttl: config.refresh_token_ttl(),
            rotation: config.rotation(),
        }
    }

    /// Signs an access token and draws a refresh session for `user_id`
    /// without touching storage.
    fn mint_tokens(&self, user_id: UserId) -> Result<(TokenPair, NewRefreshSession), AuthError> {
        let now = Utc::now();

        let access_token = self
            .access_tokens
            .issue(user_id, now)
            .map_err(|e| AuthError::TokenIssuance(e.to_string()))?;

        let refresh_token = generate_refresh_token();
        let refresh_expires_at = now
            .checked_add_signed(self.refresh_token_ttl)
            .ok_or_else(|| AuthError::TokenIssuance("refresh expiry out of range".to_string()))?;

        let session = NewRefreshSession {
            user_id,
            token: refresh_token.clone(),
            expires_at: refresh_expires_at,
        };
        let tokens = TokenPair {
            access_token,
            refresh_token,
            refresh_expires_at,
        };
        Ok((tokens, session))
    }

    /// Issues an access token and a persisted refresh session for `user_id`.
    ///
    /// The session is written last so a signing failure leaves storage untouched.
    #[tracing::instrument(name = "AuthService::generate_tokens", skip(self, ctx))]
    async fn generate_tokens(
        &self,
        ctx: &CancellationToken,
        user_id: UserId,
    ) -> Result<TokenPair, AuthError> {
        let (tokens, session) = self.mint_tokens(user_id)?;
        run_cancellable(ctx, self.session_store.create(session)).await?;
        Ok(tokens)
    }

    /// Issues fresh tokens and swaps them in for `presented` in one store call.
    ///
    /// If the swap fails or is cancelled, `presented` stays usable.
    #[tracing::instrument(name = "AuthService::rotate_tokens", skip(self, ctx, presented))]
    async fn rotate_tokens(
        &self,
        ctx: &CancellationToken,
        presented: &str,
        user_id: UserId,
    ) -> Result<TokenPair, AuthError> {
        let (tokens, session) = self.mint_tokens(user_id)?;
        run_cancellable(ctx, async {
            self.session_store
                .rotate(presented, session)
                .await
                .map_err(unknown_when_missing)
        })
        .await?;
        Ok(tokens)
    }

    /// Drops an expired session under [`RotationPolicy::RevokeOnUse`].
    async fn discard_expired(&self, ctx: &CancellationToken, presented: &str) {
        if let Err(e) = run_cancellable(ctx, self.session_store.take_by_token(presented)).await {
            tracing::warn!(error = %e, "failed to discard expired refresh session");
        }
    }
}

fn unknown_when_missing(error: SessionStoreError) -> AuthError {
    match error {
        SessionStoreError::SessionNotFound => AuthError::UnknownRefreshToken,
        other => other.into(),
    }
}

#[async_trait]
impl<U, S, A, H> Authenticator for AuthService<U, S, A, H>
where
    U: UserStore + 'static,
    S: SessionStore + 'static,
    A: AuditSink + 'static,
    H: PasswordHasher + 'static,
{
    #[tracing::instrument(name = "AuthService::sign_up", skip_all)]
    async fn sign_up(&self, ctx: &CancellationToken, input: SignUpInput) -> Result<User, AuthError> {
        let password_digest = run_cancellable(ctx, self.hasher.hash(input.password.as_ref())).await?;

        // Microsecond precision round-trips through every store unchanged.
        let new_user = NewUser {
            name: input.name,
            email: input.email,
            password_digest,
            registered_at: Utc::now().trunc_subsecs(6),
        };

        let id = run_cancellable(ctx, self.user_store.create(new_user.clone())).await?;

        self.audit
            .emit(ctx, AuditAction::Register, AuditEntity::User, id.get())
            .await;

        tracing::info!(user_id = %id, "user registered");
        Ok(User::registered(id, new_user))
    }

    #[tracing::instrument(name = "AuthService::sign_in", skip_all)]
    async fn sign_in(
        &self,
        ctx: &CancellationToken,
        input: SignInInput,
    ) -> Result<TokenPair, AuthError> {
        let digest = run_cancellable(ctx, self.hasher.hash(input.password.as_ref())).await?;

        let user = run_cancellable(ctx, async {
            self.user_store
                .get_by_email_and_digest(&input.email, &digest)
                .await
                .map_err(|e| match e {
                    UserStoreError::UserNotFound => AuthError::NotFoundUser,
                    other => other.into(),
                })
        })
        .await?;

        self.audit
            .emit(ctx, AuditAction::Login, AuditEntity::User, user.id.get())
            .await;

        self.generate_tokens(ctx, user.id).await
    }

    #[tracing::instrument(name = "AuthService::refresh_tokens", skip_all)]
    async fn refresh_tokens(
        &self,
        ctx: &CancellationToken,
        refresh_token: &str,
    ) -> Result<TokenPair, AuthError> {
        let session = run_cancellable(ctx, async {
            self.session_store
                .get_by_token(refresh_token)
                .await
                .map_err(unknown_when_missing)
        })
        .await?;

        if session.is_expired_at(Utc::now()) {
            tracing::debug!(user_id = %session.user_id, "refresh session expired");
            if self.rotation == RotationPolicy::RevokeOnUse {
                self.discard_expired(ctx, refresh_token).await;
            }
            return Err(AuthError::RefreshTokenExpired);
        }

        match self.rotation {
            RotationPolicy::RevokeOnUse => {
                self.rotate_tokens(ctx, refresh_token, session.user_id).await
            }
            RotationPolicy::Retain => self.generate_tokens(ctx, session.user_id).await,
        }
    }

    fn parse_access_token(&self, token: &str) -> Result<UserId, AuthError> {
        self.access_tokens.verify(token).map_err(|e| {
            tracing::debug!(reason = %e, "access token rejected");
            AuthError::Unauthorized
        })
    }
}
