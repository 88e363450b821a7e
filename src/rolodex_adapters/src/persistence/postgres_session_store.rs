use chrono::{DateTime, Utc};
use rolodex_core::{NewRefreshSession, RefreshSession, SessionStore, SessionStoreError, UserId};
use sqlx::{FromRow, PgPool};

pub struct PostgresSessionStore {
    pool: PgPool,
}

impl PostgresSessionStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresSessionStore { pool }
    }
}

#[derive(FromRow)]
struct SessionRow {
    id: i64,
    user_id: i64,
    token: String,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SessionRow> for RefreshSession {
    fn from(row: SessionRow) -> Self {
        RefreshSession {
            id: row.id,
            user_id: UserId::new(row.user_id),
            token: row.token,
            expires_at: row.expires_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn unexpected(e: sqlx::Error) -> SessionStoreError {
    SessionStoreError::UnexpectedError(e.to_string())
}

fn found(row: Option<SessionRow>) -> Result<RefreshSession, SessionStoreError> {
    row.map(RefreshSession::from)
        .ok_or(SessionStoreError::SessionNotFound)
}

#[async_trait::async_trait]
impl SessionStore for PostgresSessionStore {
    #[tracing::instrument(name = "Adding refresh session to PostgreSQL", skip_all)]
    async fn create(&self, session: NewRefreshSession) -> Result<RefreshSession, SessionStoreError> {
        let row: SessionRow = sqlx::query_as(
            r#"
                INSERT INTO refresh_sessions (user_id, token, expires_at)
                VALUES ($1, $2, $3)
                RETURNING id, user_id, token, expires_at, created_at, updated_at
            "#,
        )
        .bind(session.user_id.get())
        .bind(&session.token)
        .bind(session.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(row.into())
    }

    #[tracing::instrument(name = "Retrieving refresh session from PostgreSQL", skip_all)]
    async fn get_by_token(&self, token: &str) -> Result<RefreshSession, SessionStoreError> {
        let row: Option<SessionRow> = sqlx::query_as(
            r#"
                SELECT id, user_id, token, expires_at, created_at, updated_at
                FROM refresh_sessions
                WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        found(row)
    }

    #[tracing::instrument(name = "Consuming refresh session in PostgreSQL", skip_all)]
    async fn take_by_token(&self, token: &str) -> Result<RefreshSession, SessionStoreError> {
        let row: Option<SessionRow> = sqlx::query_as(
            r#"
                DELETE FROM refresh_sessions
                WHERE token = $1
                RETURNING id, user_id, token, expires_at, created_at, updated_at
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        found(row)
    }

    // One statement, so the delete and the insert commit or roll back together.
    #[tracing::instrument(name = "Rotating refresh session in PostgreSQL", skip_all)]
    async fn rotate(
        &self,
        token: &str,
        replacement: NewRefreshSession,
    ) -> Result<RefreshSession, SessionStoreError> {
        let row: Option<SessionRow> = sqlx::query_as(
            r#"
                WITH consumed AS (
                    DELETE FROM refresh_sessions
                    WHERE token = $1
                    RETURNING id
                )
                INSERT INTO refresh_sessions (user_id, token, expires_at)
                SELECT $2::BIGINT, $3::TEXT, $4::TIMESTAMPTZ
                FROM consumed
                RETURNING id, user_id, token, expires_at, created_at, updated_at
            "#,
        )
        .bind(token)
        .bind(replacement.user_id.get())
        .bind(&replacement.token)
        .bind(replacement.expires_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        found(row)
    }
}
