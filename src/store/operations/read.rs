use deadpool_postgres::Pool;
use tokio_postgres::Row;

use crate::store::{error::Result, types::Message};

/// Number of messages returned when the caller does not pass a limit
pub const DEFAULT_LIST_LIMIT: i64 = 20;

const LIST_MESSAGES_SQL: &str =
    "SELECT id, username, message, created_at FROM messages ORDER BY id DESC LIMIT $1";

/// Retrieve at most `limit` messages, most recent first
///
/// # Errors
///
/// * `Error::ConnectionError` - If no connection could be checked out
/// * `Error::DatabaseError` - If the query fails (including a negative `limit`)
pub async fn list_messages(pool: &Pool, limit: i64) -> Result<Vec<Message>> {
    let conn = pool.get().await?;

    let rows = conn.query(LIST_MESSAGES_SQL, &[&limit]).await?;

    rows.iter().map(parse_message_row).collect()
}

/// Parse a `messages` row
pub(crate) fn parse_message_row(row: &Row) -> Result<Message> {
    Ok(Message {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        message: row.try_get("message")?,
        created_at: row.try_get("created_at")?,
    })
}
