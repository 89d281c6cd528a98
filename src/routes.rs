// Route definitions

use crate::handlers::{self, ApiError};
use crate::models::{CofactQuery, ListMessagesQuery, MessageIn};
use crate::state::AppState;
use bytes::{Buf, BufMut, Bytes, BytesMut};
use futures_util::{Stream, TryStreamExt};
use percent_encoding::percent_decode_str;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::header::{
    HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
    ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_HEADERS,
    ACCESS_CONTROL_REQUEST_METHOD, ORIGIN, VARY,
};
use warp::http::Method;
use warp::{Filter, Rejection, Reply};

/// Largest accepted request body on any route that reads one
pub const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// Full route tree: CORS preflights, API routes, rejection handling and
/// request logging.
///
/// Rejections are recovered both inside and outside the CORS wrapper so error
/// responses for allowed origins still carry CORS headers, while CORS
/// refusals are rendered as JSON too.
pub fn configure_routes(
    state: AppState,
    allowed_origins: &[String],
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    let origins: Arc<[String]> = allowed_origins.into();

    cors_preflight(origins.clone())
        .or(api_routes(state)
            .recover(handlers::handle_rejection)
            .with(cors(&origins)))
        .recover(handlers::handle_rejection)
        .with(warp::log::custom(log_request))
}

fn api_routes(
    state: AppState,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // GET /
    let root = warp::path::end()
        .and(warp::get())
        .and_then(handlers::root_handler);

    // GET /api/health
    let health = warp::path!("api" / "health")
        .and(warp::get())
        .and_then(handlers::health_handler);

    // GET /api/db-test
    let db_test = warp::path!("api" / "db-test")
        .and(warp::get())
        .and(with_state(state.clone()))
        .and_then(handlers::db_test_handler);

    // POST /api/message
    let create_message = warp::path!("api" / "message")
        .and(warp::post())
        .and(json_body::<MessageIn>())
        .and(with_state(state.clone()))
        .and_then(handlers::create_message_handler);

    // GET /api/messages?limit=N
    let list_messages = warp::path!("api" / "messages")
        .and(warp::get())
        .and(warp::query::<ListMessagesQuery>())
        .and(with_state(state))
        .and_then(handlers::list_messages_handler);

    // GET /api-proxy/apps/judge/users/user/sessions/{session_id}
    let get_session = warp::path!("api-proxy" / "apps" / "judge" / "users" / "user" / "sessions" / String)
        .and(warp::get())
        .map(|raw: String| percent_decode_str(&raw).decode_utf8_lossy().into_owned())
        .and_then(handlers::get_session_handler);

    // POST /api-proxy/apps/judge/users/user/sessions
    let create_session = warp::path!("api-proxy" / "apps" / "judge" / "users" / "user" / "sessions")
        .and(warp::post())
        .and(optional_json_object())
        .and_then(handlers::create_session_handler);

    // GET /local-api/get_user_by_session
    let local_session = warp::path!("local-api" / "get_user_by_session")
        .and(warp::get())
        .and_then(handlers::local_session_handler);

    // GET /api/cofact/check?text=...
    let cofact = warp::path!("api" / "cofact" / "check")
        .and(warp::get())
        .and(warp::query::<CofactQuery>())
        .and_then(handlers::cofact_check_handler);

    // GET /api/multi-agent-analysis
    let analysis_get = warp::path!("api" / "multi-agent-analysis")
        .and(warp::get())
        .and_then(handlers::analysis_get_handler);

    // POST /api/multi-agent-analysis
    let analysis_post = warp::path!("api" / "multi-agent-analysis")
        .and(warp::post())
        .and(optional_json_object())
        .and_then(handlers::analysis_post_handler);

    root.or(health)
        .or(db_test)
        .or(create_message)
        .or(list_messages)
        .or(get_session)
        .or(create_session)
        .or(local_session)
        .or(cofact)
        .or(analysis_get)
        .or(analysis_post)
}

fn with_state(state: AppState) -> impl Filter<Extract = (AppState,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}

/// Request body collected up to `limit` bytes.
///
/// The cap is enforced on the streamed bytes, so chunked requests without a
/// `content-length` are accepted and oversized ones still fail with 413.
fn limited_body(limit: u64) -> impl Filter<Extract = (Bytes,), Error = Rejection> + Clone {
    warp::body::stream().and_then(move |stream| collect_limited(stream, limit))
}

async fn collect_limited<S, B>(stream: S, limit: u64) -> Result<Bytes, Rejection>
where
    S: Stream<Item = Result<B, warp::Error>>,
    B: Buf,
{
    futures_util::pin_mut!(stream);

    let mut body = BytesMut::new();
    while let Some(chunk) = stream.try_next().await.map_err(|e| {
        warp::reject::custom(ApiError::Validation(format!(
            "Failed to read request body: {}",
            e
        )))
    })? {
        if (body.len() + chunk.remaining()) as u64 > limit {
            return Err(warp::reject::custom(ApiError::PayloadTooLarge));
        }
        body.put(chunk);
    }

    Ok(body.freeze())
}

/// JSON body deserialized into `T`. A `content-type` other than JSON is
/// refused; a missing one is tolerated.
fn json_body<T>() -> impl Filter<Extract = (T,), Error = Rejection> + Clone
where
    T: DeserializeOwned + Send + 'static,
{
    warp::header::optional::<String>("content-type")
        .and(limited_body(MAX_BODY_BYTES))
        .and_then(|content_type: Option<String>, body: Bytes| async move {
            if let Some(content_type) = content_type.filter(|ct| !is_json_content_type(ct)) {
                return Err(warp::reject::custom(ApiError::Validation(format!(
                    "Invalid request body: unsupported content-type {}",
                    content_type
                ))));
            }

            serde_json::from_slice::<T>(&body).map_err(|e| {
                warp::reject::custom(ApiError::Validation(format!(
                    "Invalid request body: {}",
                    e
                )))
            })
        })
}

fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case("application/json") || essence.ends_with("+json")
}

/// Optional JSON object body: empty or `null` bodies yield `None`, anything
/// else must be a JSON object.
fn optional_json_object() -> impl Filter<Extract = (Option<Value>,), Error = Rejection> + Clone {
    limited_body(MAX_BODY_BYTES).and_then(|body: Bytes| async move {
        parse_optional_object(&body).map_err(|msg| warp::reject::custom(ApiError::Validation(msg)))
    })
}

fn parse_optional_object(body: &[u8]) -> Result<Option<Value>, String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Null) => Ok(None),
        Ok(value @ Value::Object(_)) => Ok(Some(value)),
        Ok(_) => Err("Invalid request body: expected a JSON object".to_string()),
        Err(e) => Err(format!("Invalid request body: {}", e)),
    }
}

/// Answers preflights from listed origins, allowing whatever method and
/// headers the browser asks for. Anything else falls through to the API
/// routes and the `warp::cors()` wrapper.
fn cors_preflight(
    origins: Arc<[String]>,
) -> impl Filter<Extract = (warp::reply::Response,), Error = Rejection> + Clone {
    warp::method()
        .and(warp::header::headers_cloned())
        .and_then(move |method: Method, headers: HeaderMap| {
            let origins = origins.clone();
            async move {
                if method != Method::OPTIONS {
                    return Err(warp::reject::not_found());
                }
                preflight_response(&origins, &headers).ok_or_else(warp::reject::not_found)
            }
        })
}

fn preflight_response(origins: &[String], headers: &HeaderMap) -> Option<warp::reply::Response> {
    let origin = headers.get(ORIGIN)?;
    let requested_method = headers.get(ACCESS_CONTROL_REQUEST_METHOD)?;

    let origin_str = origin.to_str().ok()?;
    if !origins.iter().any(|allowed| allowed == origin_str) {
        return None;
    }

    let mut response = warp::reply().into_response();
    let out = response.headers_mut();
    out.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
    out.insert(ACCESS_CONTROL_ALLOW_CREDENTIALS, HeaderValue::from_static("true"));
    out.insert(ACCESS_CONTROL_ALLOW_METHODS, requested_method.clone());
    if let Some(requested_headers) = headers.get(ACCESS_CONTROL_REQUEST_HEADERS) {
        out.insert(ACCESS_CONTROL_ALLOW_HEADERS, requested_headers.clone());
    }
    out.insert(VARY, HeaderValue::from_static("origin"));

    Some(response)
}

/// Origin check and response headers for actual (non-preflight) requests
fn cors(allowed_origins: &[String]) -> warp::cors::Cors {
    warp::cors()
        .allow_origins(allowed_origins.iter().map(String::as_str))
        .allow_credentials(true)
        .build()
}

fn log_request(info: warp::log::Info<'_>) {
    tracing::info!(
        method = %info.method(),
        path = info.path(),
        status = info.status().as_u16(),
        elapsed_ms = info.elapsed().as_millis() as u64,
        "request"
    );
}
