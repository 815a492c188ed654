use adboard_core::{Email, User, UserStore, UserStoreError};
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Pool, Postgres, Row};

/// Relational backing for the user store. The unique index on `email`
/// plays the role the write lock plays in the in-memory store: racing
/// inserts surface as a unique violation, mapped to `UserAlreadyExists`.
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(
        &self,
        email: Email,
        password_hash: Secret<String>,
    ) -> Result<User, UserStoreError> {
        let row = sqlx::query(
            r#"
                INSERT INTO users (email, password_hash)
                VALUES ($1, $2)
                RETURNING id
            "#,
        )
        .bind(email.as_str())
        .bind(password_hash.expose_secret())
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

        let id: i64 = row
            .try_get("id")
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        Ok(User::new(id, email, password_hash))
    }

    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError> {
        let row = sqlx::query(
            r#"
                SELECT id, email, password_hash
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        let id: i64 = row
            .try_get("id")
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        let password_hash: String = row
            .try_get("password_hash")
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        Ok(User::new(id, email.clone(), Secret::new(password_hash)))
    }
}
