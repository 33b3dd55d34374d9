use sqlx::PgPool;

use crate::error::AppError;
use crate::models::Task;

#[derive(Clone)]
pub struct TaskStore {
    pool: PgPool,
}

impl TaskStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Task>, AppError> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, content, status, created_at FROM tasks ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(
            "SELECT id, content, status, created_at FROM tasks WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        task.ok_or(AppError::NotFound)
    }

    /// Inserts a new task; the id and creation timestamp are assigned by the
    /// database.
    pub async fn create(&self, content: &str, status: &str) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (content, status)
             VALUES ($1, $2)
             RETURNING id, content, status, created_at",
        )
        .bind(content)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    pub async fn update(&self, id: i32, content: &str, status: &str) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(
            "UPDATE tasks
             SET content = $1, status = $2
             WHERE id = $3
             RETURNING id, content, status, created_at",
        )
        .bind(content)
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        task.ok_or(AppError::NotFound)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
