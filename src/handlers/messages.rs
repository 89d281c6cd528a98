// POST /api/message, GET /api/messages

use crate::handlers::rejection::ApiError;
use crate::models::{CreateMessageResponse, ListMessagesQuery, ListMessagesResponse, MessageIn};
use crate::state::AppState;
use crate::store::DEFAULT_LIST_LIMIT;

pub async fn create_message_handler(
    payload: MessageIn,
    state: AppState,
) -> Result<impl warp::Reply, warp::Rejection> {
    let id = state
        .repository
        .insert(&payload.user, &payload.message)
        .await
        .map_err(|e| warp::reject::custom(ApiError::Store(e)))?;

    tracing::info!(id, user = %payload.user, "message stored");

    Ok(warp::reply::json(&CreateMessageResponse { status: "ok", id }))
}

pub async fn list_messages_handler(
    query: ListMessagesQuery,
    state: AppState,
) -> Result<impl warp::Reply, warp::Rejection> {
    let limit = effective_limit(query.limit, state.max_list_limit)
        .map_err(|msg| warp::reject::custom(ApiError::Validation(msg)))?;

    let messages = state
        .repository
        .list(limit)
        .await
        .map_err(|e| warp::reject::custom(ApiError::Store(e)))?;

    Ok(warp::reply::json(&ListMessagesResponse {
        status: "ok",
        messages,
    }))
}

/// Apply the default and clamp to `max`; negative limits are rejected.
fn effective_limit(requested: Option<i64>, max: i64) -> Result<i64, String> {
    let limit = requested.unwrap_or(DEFAULT_LIST_LIMIT);
    if limit < 0 {
        return Err(format!("limit must not be negative, got {}", limit));
    }
    Ok(limit.min(max))
}
