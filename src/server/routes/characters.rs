use crate::error::LookupError;
use crate::server::router::MenagerieState;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde_json::Value;

pub fn router() -> Router<MenagerieState> {
    Router::new().route("/characters/{id}", get(fetch_character))
}

/// Proxy the upstream character payload verbatim.
async fn fetch_character(
    State(state): State<MenagerieState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, LookupError> {
    let character = state.characters.fetch_character(&id).await?;
    Ok(Json(character))
}
