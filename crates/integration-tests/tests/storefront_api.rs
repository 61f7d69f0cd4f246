//! Integration tests for the storefront HTTP API.
//!
//! Each test starts its own storefront on an ephemeral port and talks to it
//! over real HTTP.

#![allow(clippy::unwrap_used)]

use std::time::{Duration, Instant};

use emporium_integration_tests::TestServer;
use reqwest::{Client, StatusCode, header};
use serde_json::{Value, json};

fn client() -> Client {
    Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

#[tokio::test]
async fn test_health() {
    let server = TestServer::start(Duration::ZERO).await;
    let resp = client().get(server.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_product_lookup_honours_delay() {
    let delay = Duration::from_millis(200);
    let server = TestServer::start(delay).await;

    let start = Instant::now();
    let resp = client().get(server.url("/api/products/1")).send().await.unwrap();
    assert!(start.elapsed() >= delay);

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Premium Wireless Headphones");
    assert_eq!(body["price"], json!(299.99));
}

#[tokio::test]
async fn test_unknown_product_is_404() {
    let server = TestServer::start(Duration::ZERO).await;

    for path in ["/api/products/9999", "/api/products/headphones"] {
        let resp = client().get(server.url(path)).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{path}");
        let body: Value = resp.json().await.unwrap();
        assert_eq!(
            body,
            json!({ "statusCode": 404, "statusMessage": "Product not found" })
        );
    }
}

#[tokio::test]
async fn test_catalog_listing() {
    let server = TestServer::start(Duration::ZERO).await;
    let resp = client().get(server.url("/api/products")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(body.len(), 12);
    assert!(body.iter().all(|p| p["features"].is_array()));
}

#[tokio::test]
async fn test_admin_redirects_home() {
    let server = TestServer::start(Duration::ZERO).await;

    for path in ["/admin", "/admin/orders", "/admin/users/1?tab=roles"] {
        let resp = client().get(server.url(path)).send().await.unwrap();
        assert!(resp.status().is_redirection(), "{path}");
        assert_eq!(resp.headers()[header::LOCATION], "/");
    }
}

#[tokio::test]
async fn test_concurrent_lookups_are_independent() {
    let server = TestServer::start(Duration::from_millis(50)).await;
    let http = client();

    let (found, missing) = tokio::join!(
        http.get(server.url("/api/products/2")).send(),
        http.get(server.url("/api/products/0")).send(),
    );
    assert_eq!(found.unwrap().status(), StatusCode::OK);
    assert_eq!(missing.unwrap().status(), StatusCode::NOT_FOUND);
}
