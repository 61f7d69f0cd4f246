//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Liveness check
//!
//! # Products
//! GET  /api/products           - Full catalog listing
//! GET  /api/products/{id}      - Single product lookup (simulated latency)
//!
//! # Admin
//! ANY  /admin/*                - Always redirected to / by the navigation guard
//! ```

pub mod home;
pub mod products;

use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::middleware::{navigation_guard, request_id_middleware};
use crate::state::AppState;

/// Create the product API routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        .route("/health", get(home::health))
        // Product API
        .nest("/api/products", product_routes())
}

/// Build the complete application with its middleware stack.
///
/// Sentry layers are added by the binary on top of this, since they only
/// make sense once a Sentry client has been initialized.
pub fn app(state: AppState) -> Router {
    routes()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            navigation_guard,
        ))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
