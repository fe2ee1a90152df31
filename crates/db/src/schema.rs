use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Windows live inside the facility row so every mutation replaces the whole record
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS facilities (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name TEXT NULL,
            description TEXT NULL,
            available_times JSONB NOT NULL DEFAULT '[]'::jsonb,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_facilities_created_at ON facilities(created_at);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
