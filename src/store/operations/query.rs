use deadpool_postgres::Pool;

use crate::store::error::Result;

/// Run `SELECT 1` on a fresh checkout to prove the store is reachable
pub async fn ping(pool: &Pool) -> Result<i32> {
    let conn = pool.get().await?;

    let row = conn.query_one("SELECT 1 AS test", &[]).await?;

    Ok(row.try_get("test")?)
}
