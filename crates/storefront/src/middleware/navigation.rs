//! Navigation guard for the admin area.
//!
//! Every navigation into `/admin` is denied and redirected home. There is no
//! credential check behind this: the admin area is simply not served.

use axum::{
    extract::{Request, State},
    http::header::REFERER,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use url::Url;

use crate::state::AppState;
use crate::storage::ExecutionContext;

/// Paths under this prefix are never reachable.
pub const ADMIN_PREFIX: &str = "/admin";

/// Where denied navigations are sent.
pub const HOME_PATH: &str = "/";

/// Outcome of checking a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Let the navigation through.
    Proceed,
    /// Send the user to the given path instead.
    Redirect(&'static str),
}

/// Decide whether a navigation from `from` to `to` may proceed.
///
/// Denials are always logged. Allowed navigations are logged only in the
/// client context, where there is a user actually moving between pages.
#[must_use]
pub fn check_navigation(to: &str, from: &str, context: ExecutionContext) -> NavigationDecision {
    if to.starts_with(ADMIN_PREFIX) {
        tracing::info!(to, from, "Access denied - redirecting to home");
        return NavigationDecision::Redirect(HOME_PATH);
    }

    if context.is_client() {
        tracing::info!("Navigating from {from} to {to}");
    }

    NavigationDecision::Proceed
}

/// Path component of the `Referer` header, or `/` when there is none.
fn origin_path(request: &Request) -> String {
    request
        .headers()
        .get(REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(|referer| match Url::parse(referer) {
            Ok(url) => Some(url.path().to_string()),
            Err(_) if referer.starts_with('/') => Some(referer.to_string()),
            Err(_) => None,
        })
        .unwrap_or_else(|| HOME_PATH.to_string())
}

/// Middleware applying [`check_navigation`] to every request.
pub async fn navigation_guard(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let from = origin_path(&request);
    let to = request.uri().path().to_string();

    match check_navigation(&to, &from, state.context()) {
        NavigationDecision::Proceed => next.run(request).await,
        NavigationDecision::Redirect(target) => Redirect::to(target).into_response(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;

    use super::*;

    #[test]
    fn test_admin_paths_redirect_home() {
        for context in [ExecutionContext::Client, ExecutionContext::Server] {
            for from in ["/", "/products/1", "/admin", ""] {
                assert_eq!(
                    check_navigation("/admin/anything", from, context),
                    NavigationDecision::Redirect("/")
                );
            }
            assert_eq!(
                check_navigation("/admin", "/", context),
                NavigationDecision::Redirect("/")
            );
        }
    }

    #[test]
    fn test_prefix_match_is_literal() {
        assert_eq!(
            check_navigation("/administrator", "/", ExecutionContext::Server),
            NavigationDecision::Redirect("/")
        );
        assert_eq!(
            check_navigation("/products/admin", "/", ExecutionContext::Server),
            NavigationDecision::Proceed
        );
    }

    #[test]
    fn test_other_paths_proceed() {
        assert_eq!(
            check_navigation("/cart", "/", ExecutionContext::Client),
            NavigationDecision::Proceed
        );
        assert_eq!(
            check_navigation("/", "/cart", ExecutionContext::Server),
            NavigationDecision::Proceed
        );
    }

    #[test]
    fn test_origin_path_from_referer() {
        let request = Request::builder()
            .uri("/cart")
            .header(REFERER, "http://localhost:3000/products/3?tab=specs")
            .body(Body::empty())
            .unwrap();
        assert_eq!(origin_path(&request), "/products/3");

        let relative = Request::builder()
            .uri("/cart")
            .header(REFERER, "/products/4")
            .body(Body::empty())
            .unwrap();
        assert_eq!(origin_path(&relative), "/products/4");

        let none = Request::builder().uri("/cart").body(Body::empty()).unwrap();
        assert_eq!(origin_path(&none), "/");
    }
}
