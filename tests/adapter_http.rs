//! Integration tests driving the adapter against an in-process stub
//! backend that speaks the document-search REST dialect.

use std::time::Duration;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use docstore_elasticsearch::{
    AdapterConfig, AdapterError, DocumentStore, ElasticsearchAdapter,
};

/// Serves the router on an ephemeral port and returns its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn adapter_for(app: Router) -> ElasticsearchAdapter {
    let address = serve(app).await;
    ElasticsearchAdapter::with_config(AdapterConfig::new(address))
}

#[tokio::test]
async fn load_returns_inner_source() {
    let app = Router::new().route(
        "/{db}/{ty}/{id}",
        get(|| async { Json(json!({"_index": "app", "_source": {"label": "first"}})) }),
    );
    let adapter = adapter_for(app).await;

    let loaded = adapter.load("app", "widgets", "w-1").await.unwrap();
    assert_eq!(loaded, Some(json!({"label": "first"})));
}

#[tokio::test]
async fn load_without_source_is_none() {
    let app = Router::new().route(
        "/{db}/{ty}/{id}",
        get(|| async { Json(json!({"found": false})) }),
    );
    let adapter = adapter_for(app).await;

    let loaded = adapter.load("app", "widgets", "w-1").await.unwrap();
    assert_eq!(loaded, None);
}

#[tokio::test]
async fn load_error_status_carries_backend_body() {
    let app = Router::new().route(
        "/{db}/{ty}/{id}",
        get(|| async { (StatusCode::NOT_FOUND, "no such widget") }),
    );
    let adapter = adapter_for(app).await;

    let err = adapter.load("app", "widgets", "w-1").await.unwrap_err();
    match err {
        AdapterError::Backend { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "no such widget");
        }
        other => panic!("expected backend error, got {other}"),
    }
}

#[tokio::test]
async fn load_connection_failure_is_transport_error() {
    // Nothing listens on the discard port.
    let adapter = ElasticsearchAdapter::with_config(AdapterConfig::new("http://127.0.0.1:9"));

    let err = adapter.load("app", "widgets", "w-1").await.unwrap_err();
    assert!(matches!(err, AdapterError::Transport { .. }));
}

#[tokio::test]
async fn path_segments_arrive_lowercased() {
    let app = Router::new().route(
        "/{db}/{ty}/{id}",
        get(|Path((db, ty, id)): Path<(String, String, String)>| async move {
            Json(json!({"_source": {"db": db, "type": ty, "id": id}}))
        }),
    );
    let adapter = adapter_for(app).await;

    let loaded = adapter.load("App", "Widgets", "ID-1").await.unwrap();
    assert_eq!(
        loaded,
        Some(json!({"db": "app", "type": "widgets", "id": "id-1"}))
    );
}

#[tokio::test]
async fn find_preserves_hit_order() {
    let app = Router::new().route(
        "/{db}/{ty}/_search",
        get(|| async {
            Json(json!({
                "hits": {
                    "total": {"value": 2},
                    "hits": [
                        {"_id": "1", "_source": {"rank": "a"}},
                        {"_id": "2", "_source": {"rank": "b"}},
                    ]
                }
            }))
        }),
    );
    let adapter = adapter_for(app).await;

    let found = adapter
        .find("app", "widgets", &json!({"query": {"match_all": {}}}))
        .await
        .unwrap();
    assert_eq!(found, vec![json!({"rank": "a"}), json!({"rank": "b"})]);
}

#[tokio::test]
async fn find_without_hits_is_empty() {
    let app = Router::new().route(
        "/{db}/{ty}/_search",
        get(|| async { Json(json!({"took": 1})) }),
    );
    let adapter = adapter_for(app).await;

    let found = adapter
        .find("app", "widgets", &json!({"query": {"match_all": {}}}))
        .await
        .unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn find_forwards_query_descriptor_verbatim() {
    let app = Router::new().route(
        "/{db}/{ty}/_search",
        get(|Json(query): Json<Value>| async move {
            Json(json!({"hits": {"hits": [{"_source": query}]}}))
        }),
    );
    let adapter = adapter_for(app).await;

    let query = json!({"query": {"term": {"label": "first"}}, "size": 3});
    let found = adapter.find("app", "widgets", &query).await.unwrap();
    assert_eq!(found, vec![query]);
}

#[tokio::test]
async fn save_sends_content_verbatim_and_returns_source() {
    let app = Router::new().route(
        "/{db}/{ty}/{id}",
        post(|Json(content): Json<Value>| async move {
            Json(json!({"_source": content}))
        }),
    );
    let adapter = adapter_for(app).await;

    let content = json!({"label": "first", "tags": ["a", "b"]});
    let saved = adapter
        .save("app", "widgets", "w-1", &content)
        .await
        .unwrap();
    assert_eq!(saved, Some(content));
}

#[tokio::test]
async fn save_without_source_is_none() {
    let app = Router::new().route(
        "/{db}/{ty}/{id}",
        post(|| async { Json(json!({"result": "created"})) }),
    );
    let adapter = adapter_for(app).await;

    let saved = adapter
        .save("app", "widgets", "w-1", &json!({"label": "first"}))
        .await
        .unwrap();
    assert_eq!(saved, None);
}

#[tokio::test]
async fn delete_acknowledged_only_by_literal_true() {
    // The stub answers with a different acknowledgment shape per id.
    let app = Router::new().route(
        "/{db}/{ty}/{id}",
        delete(|Path((_, _, id)): Path<(String, String, String)>| async move {
            let body = match id.as_str() {
                "boolean" => json!({"ok": true}),
                "number" => json!({"ok": 1}),
                "string" => json!({"ok": "true"}),
                _ => json!({}),
            };
            Json(body)
        }),
    );
    let adapter = adapter_for(app).await;

    assert!(adapter.delete("app", "widgets", "boolean").await.unwrap());
    assert!(!adapter.delete("app", "widgets", "number").await.unwrap());
    assert!(!adapter.delete("app", "widgets", "string").await.unwrap());
    assert!(!adapter.delete("app", "widgets", "absent").await.unwrap());
}

#[tokio::test]
async fn detached_save_still_issues_the_request() {
    let (tx, mut rx) = tokio::sync::mpsc::channel::<Value>(1);
    let app = Router::new().route(
        "/{db}/{ty}/{id}",
        post(move |Json(content): Json<Value>| {
            let tx = tx.clone();
            async move {
                let _ = tx.send(content).await;
                Json(json!({"_source": {}}))
            }
        }),
    );
    let adapter = adapter_for(app).await;

    adapter.dispatch_save("app", "widgets", "w-1", &json!({"label": "detached"}));

    let seen = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("stub backend never saw the detached save")
        .unwrap();
    assert_eq!(seen, json!({"label": "detached"}));
}

#[tokio::test]
async fn detached_delete_against_dead_backend_does_not_panic() {
    let adapter = ElasticsearchAdapter::with_config(AdapterConfig::new("http://127.0.0.1:9"));

    adapter.dispatch_delete("app", "widgets", "w-1");

    // Give the spawned task time to fail and log its error.
    tokio::time::sleep(Duration::from_millis(100)).await;
}
