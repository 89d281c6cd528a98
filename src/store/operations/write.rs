use deadpool_postgres::Pool;

use crate::store::error::{Error, Result};

const INSERT_MESSAGE_SQL: &str =
    "INSERT INTO messages (username, message) VALUES ($1, $2) RETURNING id";

/// Insert a single message and return its newly assigned id
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `username` - Author of the message
/// * `message` - Message body
///
/// # Errors
///
/// * `Error::ConnectionError` - If no connection could be checked out
/// * `Error::DatabaseError` - If the insert statement fails
pub async fn insert_message(pool: &Pool, username: &str, message: &str) -> Result<i32> {
    let conn = pool.get().await?;

    let row = conn
        .query_one(INSERT_MESSAGE_SQL, &[&username, &message])
        .await?;

    let id: i32 = row
        .try_get(0)
        .map_err(|e| Error::DatabaseError(format!("insert returned no id: {}", e)))?;

    tracing::debug!(id, username, "message inserted");
    Ok(id)
}
