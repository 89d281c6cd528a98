mod common;

use std::sync::Arc;

use factcheck_backend::store::{init_schema, MessageRepository};
use serde_json::{json, Value};
use testcontainers::clients::Cli;
use warp::http::StatusCode;

// Macro to set up test environment
// Note: This keeps _docker and _container alive for the duration of the test
macro_rules! setup_test {
    ($docker:ident, $container:ident, $store:ident) => {
        let $docker = Cli::default();
        let $container = $docker.run(common::create_postgres_container());

        let host_port = $container.get_host_port_ipv4(common::POSTGRES_PORT);
        let $store = common::connect_store(host_port).await;
        init_schema($store.pool()).await.expect("Failed to initialize schema");
    };
}

// ============================================================================
// Schema
// ============================================================================

#[tokio::test]
async fn test_init_schema_is_idempotent() {
    setup_test!(_docker, _container, store);

    // A second run against the existing table must succeed
    init_schema(store.pool()).await.expect("Second schema init failed");

    let conn = store.pool().get().await.unwrap();
    let row = conn
        .query_one(
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_name = 'messages'",
            &[],
        )
        .await
        .unwrap();
    let tables: i64 = row.get(0);
    assert_eq!(tables, 1);
}

// ============================================================================
// insert / list
// ============================================================================

#[tokio::test]
async fn test_insert_returns_increasing_ids() {
    setup_test!(_docker, _container, store);

    let mut last_id = 0;
    for i in 0..5 {
        let id = store
            .insert("alice", &format!("message {}", i))
            .await
            .expect("Failed to insert message");
        assert!(id > 0);
        assert!(id > last_id, "id {} should exceed {}", id, last_id);
        last_id = id;
    }
}

#[tokio::test]
async fn test_list_returns_most_recent_first() {
    setup_test!(_docker, _container, store);

    let mut ids = Vec::new();
    for i in 0..5 {
        ids.push(store.insert("bob", &format!("message {}", i)).await.unwrap());
    }

    let messages = store.list(2).await.expect("Failed to list messages");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].id, ids[4]);
    assert_eq!(messages[1].id, ids[3]);
    assert_eq!(messages[0].username, "bob");
    assert_eq!(messages[0].message, "message 4");
    assert!(messages[0].created_at.is_some());

    let all = store.list(20).await.unwrap();
    assert_eq!(all.len(), 5);
    assert!(all.windows(2).all(|pair| pair[0].id > pair[1].id));
}

#[tokio::test]
async fn test_list_empty_store() {
    setup_test!(_docker, _container, store);

    let messages = store.list(20).await.unwrap();
    assert!(messages.is_empty());
}

#[tokio::test]
async fn test_insert_preserves_unicode_and_long_text() {
    setup_test!(_docker, _container, store);

    let long_text = "事實查核 ".repeat(10_000);
    let id = store.insert("測試用戶", &long_text).await.unwrap();

    let messages = store.list(1).await.unwrap();
    assert_eq!(messages[0].id, id);
    assert_eq!(messages[0].username, "測試用戶");
    assert_eq!(messages[0].message, long_text);
}

#[tokio::test]
async fn test_ping() {
    setup_test!(_docker, _container, store);

    assert_eq!(store.ping().await.unwrap(), 1);
}

// ============================================================================
// HTTP over a real store
// ============================================================================

#[tokio::test]
async fn test_http_round_trip_against_postgres() {
    setup_test!(_docker, _container, store);
    let routes = common::routes_with(Arc::new(store.clone()));

    for i in 1..=3 {
        let resp = warp::test::request()
            .method("POST")
            .path("/api/message")
            .json(&json!({"user": "dave", "message": format!("claim {}", i)}))
            .reply(&routes)
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = warp::test::request()
        .method("GET")
        .path("/api/messages?limit=2")
        .reply(&routes)
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(resp.body()).unwrap();
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["message"], "claim 3");
    assert_eq!(messages[1]["message"], "claim 2");
}

#[tokio::test]
async fn test_http_rejected_message_inserts_nothing() {
    setup_test!(_docker, _container, store);
    let routes = common::routes_with(Arc::new(store.clone()));

    store.insert("erin", "existing").await.unwrap();
    let before = store.list(1000).await.unwrap().len();

    let resp = warp::test::request()
        .method("POST")
        .path("/api/message")
        .json(&json!({"user": "erin"}))
        .reply(&routes)
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let after = store.list(1000).await.unwrap().len();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_http_db_test_connected() {
    setup_test!(_docker, _container, store);
    let routes = common::routes_with(Arc::new(store));

    let resp = warp::test::request()
        .method("GET")
        .path("/api/db-test")
        .reply(&routes)
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(body["database"], "connected");
    assert_eq!(body["test_result"], 1);
}
