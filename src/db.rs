//! Pool construction and startup schema initialization.

use log::info;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::Config;

const CREATE_TASKS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS tasks (
    id         SERIAL PRIMARY KEY,
    content    TEXT NOT NULL,
    status     TEXT NOT NULL DEFAULT 'pending',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)";

const CREATE_USERS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS users (
    id            SERIAL PRIMARY KEY,
    username      TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at    TIMESTAMPTZ NOT NULL DEFAULT now()
)";

pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    info!(
        "Connecting to database {} at {}:{}",
        config.db_name, config.db_host, config.db_port
    );

    PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url())
        .await
}

/// Creates both entity tables if they do not exist yet. Idempotent, run on
/// every startup.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_TASKS_TABLE).execute(pool).await?;
    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;

    info!("Database schema is up to date");
    Ok(())
}
