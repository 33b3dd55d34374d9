use sqlx::PgPool;

use crate::error::AppError;
use crate::models::User;

#[derive(Clone)]
pub struct UserStore {
    pool: PgPool,
}

impl UserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let users =
            sqlx::query_as::<_, User>("SELECT id, username, created_at FROM users ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(users)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or(AppError::NotFound)
    }

    /// Inserts a new user. A duplicate username trips the unique constraint,
    /// which surfaces as `AppError::Conflict`.
    pub async fn create(&self, username: &str, password_hash: &str) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password_hash)
             VALUES ($1, $2)
             RETURNING id, username, created_at",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Updates a user, keeping the stored hash when `password_hash` is
    /// `None`.
    pub async fn update(
        &self,
        id: i32,
        username: &str,
        password_hash: Option<&str>,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users
             SET username = $1, password_hash = COALESCE($2, password_hash)
             WHERE id = $3
             RETURNING id, username, created_at",
        )
        .bind(username)
        .bind(password_hash)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or(AppError::NotFound)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
