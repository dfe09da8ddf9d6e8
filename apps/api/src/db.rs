use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Table definitions, applied in order. Every statement is idempotent.
const SCHEMA: &[(&str, &str)] = &[
    (
        "users",
        "CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT UNIQUE,
            password TEXT NOT NULL
        )",
    ),
    (
        "resumes",
        "CREATE TABLE IF NOT EXISTS resumes (
            id SERIAL PRIMARY KEY,
            user_id INTEGER,
            title TEXT,
            content TEXT
        )",
    ),
    (
        "resumes_user_id_idx",
        "CREATE INDEX IF NOT EXISTS resumes_user_id_idx ON resumes (user_id)",
    ),
];

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the `users` and `resumes` tables if they are absent.
/// Runs once at startup, before the listener binds.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    for (name, statement) in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .with_context(|| format!("Failed to apply schema for '{name}'"))?;
    }

    info!("Database schema ready ({} statements)", SCHEMA.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_statements_are_idempotent() {
        for (name, statement) in SCHEMA {
            assert!(
                statement.contains("IF NOT EXISTS"),
                "statement for '{name}' must be safe to re-run"
            );
        }
    }

    #[test]
    fn test_schema_covers_both_tables() {
        let names: Vec<&str> = SCHEMA.iter().map(|(name, _)| *name).collect();
        assert!(names.contains(&"users"));
        assert!(names.contains(&"resumes"));
    }
}
