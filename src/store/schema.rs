use deadpool_postgres::Pool;

use crate::store::error::Result;

/// DDL for the `messages` table
pub const CREATE_MESSAGES_TABLE: &str = "
CREATE TABLE IF NOT EXISTS messages (
    id SERIAL PRIMARY KEY,
    username TEXT NOT NULL,
    message TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Ensure the `messages` table exists
///
/// Idempotent: running it against a store that already has the table is a
/// no-op. Callers run this once before serving traffic and treat an error as
/// fatal.
pub async fn init_schema(pool: &Pool) -> Result<()> {
    let conn = pool.get().await?;

    conn.batch_execute(CREATE_MESSAGES_TABLE).await?;

    tracing::info!("messages table is ready");
    Ok(())
}
