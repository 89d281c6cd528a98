// GET /, GET /api/health, GET /api/db-test

use crate::models::{DbTestResponse, OkResponse, RootResponse};
use crate::state::AppState;
use std::convert::Infallible;

pub async fn root_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&RootResponse::default()))
}

/// Liveness only; never touches the store.
pub async fn health_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&OkResponse::new()))
}

/// Probe the store and echo the sanitized configuration.
///
/// Failures are reported in the body with HTTP 200 so operators can read the
/// cause from a browser.
pub async fn db_test_handler(state: AppState) -> Result<impl warp::Reply, Infallible> {
    let config = &state.store_config;

    let response = match state.repository.ping().await {
        Ok(test_result) => DbTestResponse::Connected {
            status: "ok",
            database: "connected",
            test_result,
            environment_variables: config.sanitized(),
            connection_info: format!(
                "Connected to {}:{}/{} as {}",
                config.host, config.port, config.database, config.user
            ),
        },
        Err(e) => {
            tracing::warn!(error = %e, "database connectivity probe failed");
            DbTestResponse::Failed {
                status: "error",
                database: "connection_failed",
                error: e.to_string(),
                error_type: e.kind(),
                environment_variables: config.sanitized(),
                connection_string: config.redacted_connection_string(),
            }
        }
    };

    Ok(warp::reply::json(&response))
}
