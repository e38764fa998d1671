use crate::api::CharacterClient;
use crate::config::LookupConfig;
use crate::db::PetStoreHandle;
use crate::server::routes::{characters, pets};

use axum::{
    Router,
    extract::Request,
    http::{HeaderName, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use base64::Engine as _;
use rand::RngCore;
use reqwest::header::HeaderValue;
use std::time::Instant;
use tracing::{error, info, warn};

const MAX_REQUEST_ID_LEN: usize = 128;
const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

fn generate_request_id() -> String {
    // 96 bits => 16 chars base64url (no padding).
    let mut bytes = [0u8; 12];
    rand::rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Shared state for all route handlers: the store handle and the upstream
/// lookup client, built once and passed in explicitly.
#[derive(Clone)]
pub struct MenagerieState {
    pub store: PetStoreHandle,
    pub characters: CharacterClient,
}

impl MenagerieState {
    pub fn new(store: PetStoreHandle, lookup_cfg: &LookupConfig) -> Self {
        Self {
            store,
            characters: CharacterClient::new(lookup_cfg),
        }
    }
}

async fn greeting() -> &'static str {
    "Hello World!"
}

async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn access_log(req: Request, next: Next) -> Response {
    // Capture request metadata before moving `req` into the handler stack.
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let request_id = req
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map(str::to_string)
        .unwrap_or_else(generate_request_id);

    let start = Instant::now();
    let mut resp = next.run(req).await;

    // Always reflect `x-request-id` for easier correlation, even if the client didn't send one.
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(X_REQUEST_ID, value);
    }

    let status = resp.status();
    let latency_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        error!(
            "| {:>3} | {} | {:^7} | {} | {}ms",
            status.as_u16(),
            request_id,
            method.as_str(),
            path,
            latency_ms
        );
    } else if status.is_client_error() {
        warn!(
            "| {:>3} | {} | {:^7} | {} | {}ms",
            status.as_u16(),
            request_id,
            method.as_str(),
            path,
            latency_ms
        );
    } else {
        info!(
            "| {:>3} | {} | {:^7} | {} | {}ms",
            status.as_u16(),
            request_id,
            method.as_str(),
            path,
            latency_ms
        );
    }

    resp
}

pub fn menagerie_router(state: MenagerieState) -> Router {
    Router::new()
        .route("/", get(greeting))
        .merge(pets::router())
        .merge(characters::router())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(middleware::from_fn(access_log))
}
