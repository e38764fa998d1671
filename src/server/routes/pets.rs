use crate::db::Pet;
use crate::error::StoreError;
use crate::server::router::MenagerieState;

use axum::{Json, Router, extract::State, routing::post};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreatePetRequest {
    pub name: String,
}

pub fn router() -> Router<MenagerieState> {
    Router::new().route("/pets", post(create_pet))
}

/// Insert a pet and return the created record (id + name), not the raw
/// driver result.
async fn create_pet(
    State(state): State<MenagerieState>,
    Json(req): Json<CreatePetRequest>,
) -> Result<Json<Pet>, StoreError> {
    let pet = state.store.insert_pet(req.name).await?;
    Ok(Json(pet))
}
