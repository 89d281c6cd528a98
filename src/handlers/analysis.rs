// GET/POST /api/multi-agent-analysis

use crate::models::AnalysisResponse;
use serde_json::Value;
use std::convert::Infallible;

pub async fn analysis_get_handler() -> Result<impl warp::Reply, Infallible> {
    tracing::info!("multi-agent analysis requested (GET)");
    let response = AnalysisResponse::mock();
    tracing::info!(analysis_id = response.analysis_id, "multi-agent analysis complete (GET)");

    Ok(warp::reply::json(&response))
}

/// The request body is accepted but does not influence the result.
pub async fn analysis_post_handler(body: Option<Value>) -> Result<impl warp::Reply, Infallible> {
    tracing::info!(has_body = body.is_some(), "multi-agent analysis requested (POST)");
    let response = AnalysisResponse::mock();
    tracing::info!(analysis_id = response.analysis_id, "multi-agent analysis complete (POST)");

    Ok(warp::reply::json(&response))
}
