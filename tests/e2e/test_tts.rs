use crate::e2e::helpers;

use helpers::{provider, TestContext};
use hyper::StatusCode;
use pretty_assertions::assert_eq;

fn synthesize_path(text: &str) -> String {
    format!("/capi/tts/tts?text={}", urlencoding::encode(text))
}

#[tokio::test]
async fn it_should_synthesize_text_and_serve_audio() {
    let ctx = TestContext::new().await.unwrap();
    let audio = b"binary mp3 audio".to_vec();
    provider::mock_success(&ctx.provider, &audio, 1).await;

    let response = ctx.client.get(&synthesize_path("Hello world")).await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.header("content-type"), Some("audio/mpeg"));
    assert_eq!(response.header("content-disposition"), Some("inline"));
    assert_eq!(response.header("accept-ranges"), Some("bytes"));
    assert_eq!(response.body_bytes, audio);
}

#[tokio::test]
async fn it_should_serve_repeat_requests_from_the_cache() {
    let ctx = TestContext::new().await.unwrap();
    let audio = b"cached audio".to_vec();
    // The mock verifies on drop that the provider was called exactly once
    provider::mock_success(&ctx.provider, &audio, 1).await;

    let first = ctx.client.get(&synthesize_path("Hello world")).await.unwrap();
    first.assert_status(StatusCode::OK);

    let second = ctx.client.get(&synthesize_path("Hello world")).await.unwrap();
    second.assert_status(StatusCode::OK);
    assert_eq!(second.body_bytes, first.body_bytes);
}

#[tokio::test]
async fn it_should_reject_missing_text() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/capi/tts/tts").await.unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "Text is required");
    assert_eq!(response.json()["code"], 400);
}

#[tokio::test]
async fn it_should_reject_empty_text() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/capi/tts/tts?text=").await.unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "Text is required");
    assert_eq!(response.json()["code"], 400);
}

#[tokio::test]
async fn it_should_reject_text_longer_than_2000_characters() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .get(&synthesize_path(&"a".repeat(2001)))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json()["error"],
        "Text too long (max 2000 characters)"
    );
    assert_eq!(response.json()["code"], 400);
}

#[tokio::test]
async fn it_should_accept_text_of_exactly_2000_characters() {
    let ctx = TestContext::new().await.unwrap();
    provider::mock_success(&ctx.provider, b"audio", 1).await;

    let response = ctx
        .client
        .get(&synthesize_path(&"a".repeat(2000)))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn it_should_surface_provider_domain_errors_as_500() {
    let ctx = TestContext::new().await.unwrap();
    provider::mock_domain_error(&ctx.provider, 4000, "invalid token").await;

    let response = ctx.client.get(&synthesize_path("Hello world")).await.unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json()["error"], "Failed to synthesize speech");
    assert_eq!(response.json()["code"], 500);
    let details = response.json()["details"].as_str().unwrap();
    assert!(
        details.contains("invalid token"),
        "details should carry the provider message, got: {details}"
    );
}

#[tokio::test]
async fn it_should_surface_provider_http_errors_as_500() {
    let ctx = TestContext::new().await.unwrap();
    provider::mock_http_error(&ctx.provider, 503, "service unavailable").await;

    let response = ctx.client.get(&synthesize_path("Hello world")).await.unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json()["error"], "Failed to synthesize speech");
    let details = response.json()["details"].as_str().unwrap();
    assert!(details.contains("service unavailable"));
}

#[tokio::test]
async fn it_should_not_cache_failed_synthesis() {
    let ctx = TestContext::new().await.unwrap();
    provider::mock_domain_error(&ctx.provider, 4000, "invalid token").await;

    let failed = ctx.client.get(&synthesize_path("Hello world")).await.unwrap();
    failed.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let listing = ctx.client.get("/capi/tts/tts/files").await.unwrap();
    listing.assert_status(StatusCode::OK);
    assert_eq!(listing.json()["count"], 0);
}

#[tokio::test]
async fn it_should_report_disabled_status_without_credentials() {
    let ctx = TestContext::new_disabled().await.unwrap();

    let response = ctx.client.get("/capi/tts/status").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json()["status"], "disabled");
    assert!(response.json()["message"].as_str().unwrap().contains("disabled"));
    assert!(response.json()["required_env"].is_array());
}

#[tokio::test]
async fn it_should_not_mount_synthesis_routes_when_disabled() {
    let ctx = TestContext::new_disabled().await.unwrap();

    let response = ctx.client.get(&synthesize_path("Hello world")).await.unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
}
