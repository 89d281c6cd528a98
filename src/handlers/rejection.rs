// Rejection handling: the single place where error responses are rendered

use crate::models::ErrorResponse;
use crate::store;
use chrono::{SecondsFormat, Utc};
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::Rejection;

/// Application failures raised by handlers
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or missing input; the store is never touched
    Validation(String),

    /// The store failed to serve the request
    Store(store::Error),

    /// The request body grew past the configured cap
    PayloadTooLarge,
}

impl warp::reject::Reject for ApiError {}

/// Map a rejection to a JSON error envelope.
///
/// Every response leaving the server passes through here on failure, so
/// clients can always branch on `status`.
pub async fn handle_rejection(err: Rejection) -> Result<impl warp::Reply, Infallible> {
    let (status, body) = classify(&err);

    Ok(warp::reply::with_status(warp::reply::json(&body), status))
}

fn classify(err: &Rejection) -> (StatusCode, ErrorResponse) {
    if err.is_not_found() {
        return (StatusCode::NOT_FOUND, ErrorResponse::new("Not Found"));
    }

    if let Some(api_error) = err.find::<ApiError>() {
        return match api_error {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg.clone())),
            ApiError::Store(e) => {
                tracing::error!(error = ?e, kind = e.kind(), "store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(e.to_string()))
            }
            ApiError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ErrorResponse::new("Request body is too large"),
            ),
        };
    }

    if let Some(e) = err.find::<warp::reject::InvalidQuery>() {
        return (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(format!("Invalid query string: {}", e)),
        );
    }

    if let Some(e) = err.find::<warp::reject::InvalidHeader>() {
        return (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(format!("Invalid request header: {}", e)),
        );
    }

    if let Some(e) = err.find::<warp::cors::CorsForbidden>() {
        tracing::debug!(reason = %e, "CORS request rejected");
        return (StatusCode::FORBIDDEN, ErrorResponse::new(e.to_string()));
    }

    if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            ErrorResponse::new("Method Not Allowed"),
        );
    }

    tracing::error!(rejection = ?err, "unhandled rejection");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorResponse::new("Internal server error")
            .with_error(format!("{:?}", err))
            .with_timestamp(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
    )
}
