// Session mocks. No session is validated or persisted.

use crate::models::{OkResponse, SessionResponse};
use serde_json::Value;
use std::convert::Infallible;
use uuid::Uuid;

/// GET /api-proxy/apps/judge/users/user/sessions/{session_id}
pub async fn get_session_handler(session_id: String) -> Result<impl warp::Reply, Infallible> {
    tracing::debug!(%session_id, "session lookup");

    Ok(warp::reply::json(&SessionResponse::existing(session_id)))
}

/// POST /api-proxy/apps/judge/users/user/sessions
pub async fn create_session_handler(body: Option<Value>) -> Result<impl warp::Reply, Infallible> {
    let session_id = Uuid::new_v4().to_string();
    tracing::debug!(%session_id, has_body = body.is_some(), "session created");

    Ok(warp::reply::json(&SessionResponse::created(session_id)))
}

/// GET /local-api/get_user_by_session
pub async fn local_session_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&OkResponse::with_message("Local session endpoint")))
}
