//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, start transactions)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (tag each request, echo it back)
//! 4. Navigation guard (deny the admin area)

pub mod navigation;
pub mod request_id;

pub use navigation::{NavigationDecision, check_navigation, navigation_guard};
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
