//! Home page and health check handlers.

use axum::{extract::State, response::IntoResponse};

use crate::state::AppState;

/// Home page. Also the target of every denied navigation.
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    format!(
        "Emporium storefront - {} products available at /api/products\n",
        state.catalog().len()
    )
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. The catalog is in memory, so there
/// are no dependencies to check.
pub async fn health() -> &'static str {
    "ok"
}
