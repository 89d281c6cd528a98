// GET /api/cofact/check

use crate::models::{CofactQuery, CofactResponse};
use std::convert::Infallible;

/// Mock credibility lookup echoing the queried text.
pub async fn cofact_check_handler(query: CofactQuery) -> Result<impl warp::Reply, Infallible> {
    tracing::debug!(text = %query.text, "cofact check");

    Ok(warp::reply::json(&CofactResponse::mock(query.text)))
}
