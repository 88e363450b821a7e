use chrono::{DateTime, Utc};
use rolodex_core::{
    Email, NewUser, PasswordDigest, User, UserId, UserName, UserStore, UserStoreError,
};
use secrecy::Secret;
use sqlx::{FromRow, PgPool};

pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresUserStore { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password_digest: String,
    registered_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = UserStoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let new_user = NewUser {
            name: UserName::try_from(row.name)
                .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?,
            email: Email::try_from(Secret::from(row.email))
                .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?,
            password_digest: PasswordDigest::new(row.password_digest),
            registered_at: row.registered_at,
        };
        Ok(User::new(
            UserId::new(row.id),
            new_user,
            row.created_at,
            row.updated_at,
        ))
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn create(&self, user: NewUser) -> Result<UserId, UserStoreError> {
        let id: i64 = sqlx::query_scalar(
            r#"
                INSERT INTO users (name, email, password_digest, registered_at, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $4, $4)
                RETURNING id
            "#,
        )
        .bind(user.name.as_str())
        .bind(user.email.as_str())
        .bind(user.password_digest.as_str())
        .bind(user.registered_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(UserId::new(id))
    }

    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn get_by_email_and_digest(
        &self,
        email: &Email,
        digest: &PasswordDigest,
    ) -> Result<User, UserStoreError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT id, name, email, password_digest, registered_at, created_at, updated_at
                FROM users
                WHERE email = $1 AND password_digest = $2
            "#,
        )
        .bind(email.as_str())
        .bind(digest.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        User::try_from(row)
    }
}
