use axum::{
    Json, Router,
    body::{Body, to_bytes},
    extract::Path,
    http::{Request, StatusCode},
    routing::get,
};
use serde_json::{Value, json};
use std::{
    fs,
    time::{SystemTime, UNIX_EPOCH},
};
use tokio::net::TcpListener;
use tower::ServiceExt;
use url::Url;

fn unique_sqlite_path(prefix: &str) -> std::path::PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "menagerie-{prefix}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));
    temp_path
}

async fn spawn_test_server(app: Router) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    let base = Url::parse(&format!("http://{}", addr)).expect("valid base url");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server run");
    });

    base
}

async fn app_with_lookup_base(prefix: &str, base_url: Url) -> (Router, std::path::PathBuf) {
    let temp_path = unique_sqlite_path(prefix);
    let database_url = format!("sqlite:{}", temp_path.display());
    let store = menagerie::db::spawn(&database_url).await.expect("spawn store");

    let lookup = menagerie::config::LookupConfig {
        base_url,
        ..menagerie::config::LookupConfig::default()
    };
    let state = menagerie::server::router::MenagerieState::new(store, &lookup);
    (menagerie::server::router::menagerie_router(state), temp_path)
}

fn luke() -> Value {
    json!({
        "name": "Luke Skywalker",
        "height": "172",
        "mass": "77",
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male"
    })
}

async fn luke_handler(Path(id): Path<String>) -> Json<Value> {
    assert_eq!(id, "1");
    Json(luke())
}

#[tokio::test]
async fn character_route_relays_upstream_payload_verbatim() {
    let upstream = Router::new().route("/people/{id}", get(luke_handler));
    let base = spawn_test_server(upstream).await;
    let (app, temp_path) = app_with_lookup_base("characters-ok", base).await;

    let resp = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/characters/1")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let payload: Value = serde_json::from_slice(&body).expect("response body was not json");
    assert_eq!(payload, luke());

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn character_route_maps_upstream_error_status_to_server_error() {
    async fn failing_handler() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    let upstream = Router::new().route("/people/{id}", get(failing_handler));
    let base = spawn_test_server(upstream).await;
    let (app, temp_path) = app_with_lookup_base("characters-status", base).await;

    let resp = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/characters/1")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    assert_eq!(&body[..], b"Server error.");

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn character_route_maps_malformed_upstream_body_to_server_error() {
    async fn garbage_handler() -> &'static str {
        "not-json"
    }

    let upstream = Router::new().route("/people/{id}", get(garbage_handler));
    let base = spawn_test_server(upstream).await;
    let (app, temp_path) = app_with_lookup_base("characters-garbage", base).await;

    let resp = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/characters/1")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    assert_eq!(&body[..], b"Server error.");

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn character_route_maps_unreachable_upstream_to_server_error() {
    // Bind, record the port, then drop the listener so nothing answers there.
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let base = Url::parse(&format!("http://{}", addr)).expect("valid base url");
    let (app, temp_path) = app_with_lookup_base("characters-down", base).await;

    let resp = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/characters/1")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    assert_eq!(&body[..], b"Server error.");

    let _ = fs::remove_file(&temp_path);
}
