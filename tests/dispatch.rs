//! End-to-end dispatch tests: tag routing through a running server.

use axum::http::StatusCode as AxumStatus;
use axum::response::IntoResponse;

use api_server::dispatch::{handler, HandlerRegistry};
use api_server::http::X_REQUEST_ID;

mod common;

fn static_reply(body: &'static str) -> api_server::dispatch::Handler {
    handler(move |_request| async move { body.into_response() })
}

#[tokio::test]
async fn test_registered_tag_routes_to_its_handler() {
    let mut registry = HandlerRegistry::new();
    registry.register("alpha", static_reply("alpha reply"));
    registry.register("beta", static_reply("beta reply"));
    let addr = common::start_api_server(registry).await;

    let client = common::test_client();
    let body = client
        .get(format!("http://{addr}/alpha/anything"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "alpha reply");

    let body = client
        .get(format!("http://{addr}/beta"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "beta reply");
}

#[tokio::test]
async fn test_unmatched_tag_gets_default_404() {
    let mut registry = HandlerRegistry::new();
    registry.register("alpha", static_reply("alpha reply"));
    let addr = common::start_api_server(registry).await;

    let client = common::test_client();
    let response = client
        .get(format!("http://{addr}/missing"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), AxumStatus::NOT_FOUND.as_u16());
}

#[tokio::test]
async fn test_root_path_resolves_to_default() {
    let registry = HandlerRegistry::new();
    let addr = common::start_api_server(registry).await;

    let client = common::test_client();
    let response = client.get(format!("http://{addr}/")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), AxumStatus::NOT_FOUND.as_u16());
}

#[tokio::test]
async fn test_custom_default_handler_catches_misses() {
    let mut registry = HandlerRegistry::new();
    registry.set_default(static_reply("catch-all"));
    let addr = common::start_api_server(registry).await;

    let client = common::test_client();
    for path in ["/", "/missing", "/missing/deeper"] {
        let body = client
            .get(format!("http://{addr}{path}"))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, "catch-all", "path {path}");
    }
}

#[tokio::test]
async fn test_responses_carry_a_request_id() {
    let registry = HandlerRegistry::new();
    let addr = common::start_api_server(registry).await;

    let client = common::test_client();
    let response = client.get(format!("http://{addr}/")).send().await.unwrap();
    assert!(response.headers().contains_key(X_REQUEST_ID.as_str()));
}
