//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use emporium_core::Product;
use tracing::instrument;

use crate::error::Result;
use crate::services::parse_product_id;
use crate::state::AppState;

/// List every catalog product. Served straight from memory, no delay.
pub async fn index(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog().all().to_vec())
}

/// Look up a single product.
///
/// The raw path segment is parsed leniently; anything unparseable becomes
/// id 0, which is reported as not found rather than as a bad request.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(raw_id): Path<String>) -> Result<Json<Product>> {
    let id = parse_product_id(&raw_id);
    let product = state.lookup().lookup(id).await?;
    Ok(Json(product))
}
