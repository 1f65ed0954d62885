//! API Integration Tests
//!
//! Every test starts its own server on the in-memory store; no external
//! services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::time::Duration;

use confession_common::{hash_identifier, AppConfig};
use futures::future::join_all;
use integration_tests::{
    assert_error, assert_json, unique_ip, Confession, ConfessionPage, NewConfession, NewReaction,
    TestServer,
};
use reqwest::{Method, StatusCode};
use serde_json::json;

async fn create(server: &TestServer, ip: &str, message: &str) -> Confession {
    let response = server
        .post_as(ip, "/confessions", &NewConfession::new(message))
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn react(server: &TestServer, ip: &str, id: &str, kind: &str) -> reqwest::Response {
    server
        .post_as(ip, "/reactions", &NewReaction::new(id, kind))
        .await
        .unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.unwrap();

    let body: serde_json::Value = assert_json(server.get("/health").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");

    let ready: serde_json::Value =
        assert_json(server.get("/health/ready").await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert_eq!(ready["status"], "ready");
}

// ============================================================================
// Confession Tests
// ============================================================================

#[tokio::test]
async fn test_create_confession() {
    let server = TestServer::start().await.unwrap();
    let ip = unique_ip();

    let confession = create(&server, &ip, "  I ate the last cookie  ").await;

    assert_eq!(confession.message, "I ate the last cookie");
    assert_eq!(confession.total_reactions, 0);
    assert_eq!(confession.reactions.love, 0);
    assert!(confession.id.parse::<i64>().is_ok());
}

/// The creator's IP hash is part of every confession payload. Anyone can
/// group confessions by author with it; clients must not rely on it.
#[tokio::test]
async fn test_ip_hash_is_exposed() {
    let server = TestServer::start().await.unwrap();
    let ip = unique_ip();

    let first = create(&server, &ip, "one").await;
    let second = create(&server, &ip, "two").await;

    assert_eq!(first.ip_hash, hash_identifier(&ip));
    assert_eq!(first.ip_hash, second.ip_hash);
}

#[tokio::test]
async fn test_create_validation() {
    let server = TestServer::start().await.unwrap();

    for body in [json!({ "message": "" }), json!({ "message": "   " }), json!({})] {
        let response = server.post_as(&unique_ip(), "/confessions", &body).await.unwrap();
        assert_error(response, StatusCode::BAD_REQUEST, "Message is required")
            .await
            .unwrap();
    }

    let response = server
        .post_as(&unique_ip(), "/confessions", &NewConfession::new("x".repeat(301)))
        .await
        .unwrap();
    assert_error(
        response,
        StatusCode::BAD_REQUEST,
        "Message too long (max 300 characters)",
    )
    .await
    .unwrap();

    let longest = create(&server, &unique_ip(), &"é".repeat(300)).await;
    assert_eq!(longest.message.chars().count(), 300);
}

#[tokio::test]
async fn test_profanity_is_masked() {
    let server = TestServer::start().await.unwrap();
    let confession = create(&server, &unique_ip(), "this damn bug").await;
    assert_eq!(confession.message, "this **** bug");
}

#[tokio::test]
async fn test_sixth_confession_is_rate_limited() {
    let server = TestServer::start().await.unwrap();
    let ip = unique_ip();

    for i in 0..5 {
        create(&server, &ip, &format!("confession {i}")).await;
    }

    let response = server
        .post_as(&ip, "/confessions", &NewConfession::new("one more"))
        .await
        .unwrap();
    assert_error(
        response,
        StatusCode::TOO_MANY_REQUESTS,
        "Too many requests. Please wait a moment.",
    )
    .await
    .unwrap();

    // Denied requests are not stored, other clients are unaffected
    create(&server, &unique_ip(), "hello").await;
    let page: ConfessionPage =
        assert_json(server.get("/confessions?limit=100").await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert_eq!(page.confessions.len(), 6);
}

#[tokio::test]
async fn test_rate_limit_window_expires() {
    let mut config = AppConfig::in_memory();
    config.rate_limit.confession.window_ms = 300;
    config.rate_limit.confession.max_requests = 1;
    let server = TestServer::start_with_config(config).await.unwrap();
    let ip = unique_ip();

    create(&server, &ip, "first").await;
    let denied = server
        .post_as(&ip, "/confessions", &NewConfession::new("second"))
        .await
        .unwrap();
    assert_eq!(denied.status(), StatusCode::TOO_MANY_REQUESTS);

    tokio::time::sleep(Duration::from_millis(400)).await;
    create(&server, &ip, "third").await;
}

// ============================================================================
// Listing Tests
// ============================================================================

#[tokio::test]
async fn test_list_new_with_pagination() {
    let server = TestServer::start().await.unwrap();
    for i in 0..3 {
        create(&server, &unique_ip(), &format!("m{i}")).await;
    }

    let first: ConfessionPage = assert_json(
        server.get("/confessions?sort=new&page=1&limit=2").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let messages: Vec<_> = first.confessions.iter().map(|c| c.message.as_str()).collect();
    assert_eq!(messages, vec!["m2", "m1"]);
    assert!(first.has_more);
    assert_eq!(first.page, 1);

    let second: ConfessionPage = assert_json(
        server.get("/confessions?sort=new&page=2&limit=2").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(second.confessions.len(), 1);
    assert_eq!(second.confessions[0].message, "m0");
    assert!(!second.has_more);
    assert_eq!(second.page, 2);
}

#[tokio::test]
async fn test_list_trending_and_random() {
    let server = TestServer::start().await.unwrap();
    let quiet = create(&server, &unique_ip(), "quiet").await;
    let popular = create(&server, &unique_ip(), "popular").await;
    let newest = create(&server, &unique_ip(), "newest").await;

    for _ in 0..3 {
        assert_eq!(react(&server, &unique_ip(), &popular.id, "fire").await.status(), StatusCode::OK);
    }
    assert_eq!(react(&server, &unique_ip(), &quiet.id, "sad").await.status(), StatusCode::OK);

    let trending: ConfessionPage = assert_json(
        server.get("/confessions?sort=trending").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let ids: Vec<_> = trending.confessions.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec![popular.id.as_str(), quiet.id.as_str(), newest.id.as_str()]);

    let random: ConfessionPage = assert_json(
        server.get("/confessions?sort=random&page=5&limit=2").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(random.confessions.len(), 2);
    assert_eq!(random.page, 1);
    assert!(!random.has_more);
}

#[tokio::test]
async fn test_list_page_past_the_end() {
    let server = TestServer::start().await.unwrap();
    create(&server, &unique_ip(), "lonely").await;

    let page: ConfessionPage = assert_json(
        server
            .get("/confessions?page=9223372036854775807&limit=10")
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(page.confessions.is_empty());
    assert!(!page.has_more);
    assert_eq!(page.page, i64::MAX);
}

#[tokio::test]
async fn test_list_rejects_bad_pagination() {
    let server = TestServer::start().await.unwrap();

    assert_error(
        server.get("/confessions?page=0").await.unwrap(),
        StatusCode::BAD_REQUEST,
        "page must be a positive integer",
    )
    .await
    .unwrap();

    assert_error(
        server.get("/confessions?limit=lots").await.unwrap(),
        StatusCode::BAD_REQUEST,
        "limit must be a positive integer",
    )
    .await
    .unwrap();
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_react_increments_counts() {
    let server = TestServer::start().await.unwrap();
    let confession = create(&server, &unique_ip(), "hello").await;
    let ip = unique_ip();

    let updated: Confession = assert_json(react(&server, &ip, &confession.id, "funny").await, StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(updated.reactions.funny, 1);
    assert_eq!(updated.total_reactions, 1);

    let updated: Confession = assert_json(react(&server, &ip, &confession.id, "love").await, StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(updated.reactions.funny, 1);
    assert_eq!(updated.reactions.love, 1);
    assert_eq!(updated.total_reactions, 2);
}

#[tokio::test]
async fn test_react_validation() {
    let server = TestServer::start().await.unwrap();
    let confession = create(&server, &unique_ip(), "hello").await;
    let ip = unique_ip();

    for body in [
        json!({}),
        json!({ "confessionId": confession.id }),
        json!({ "reactionType": "love" }),
        json!({ "confessionId": "", "reactionType": "love" }),
    ] {
        let response = server.post_as(&ip, "/reactions", &body).await.unwrap();
        assert_error(response, StatusCode::BAD_REQUEST, "Missing required fields")
            .await
            .unwrap();
    }

    assert_error(
        react(&server, &ip, &confession.id, "meh").await,
        StatusCode::BAD_REQUEST,
        "Invalid reaction type",
    )
    .await
    .unwrap();

    assert_error(
        react(&server, &ip, "123456789", "love").await,
        StatusCode::NOT_FOUND,
        "Confession not found",
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_twenty_first_reaction_is_rate_limited() {
    let server = TestServer::start().await.unwrap();
    let target = create(&server, &unique_ip(), "target").await;
    let other = create(&server, &unique_ip(), "other").await;
    let ip = unique_ip();

    for _ in 0..20 {
        assert_eq!(react(&server, &ip, &target.id, "love").await.status(), StatusCode::OK);
    }

    assert_error(
        react(&server, &ip, &target.id, "love").await,
        StatusCode::TOO_MANY_REQUESTS,
        "Too many reactions. Please wait a moment.",
    )
    .await
    .unwrap();

    // The window is per confession
    let updated: Confession = assert_json(react(&server, &ip, &other.id, "love").await, StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(updated.reactions.love, 1);

    server.state.reset_limits();
    let updated: Confession = assert_json(react(&server, &ip, &target.id, "love").await, StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(updated.reactions.love, 21);
}

#[tokio::test]
async fn test_concurrent_reactions_are_all_counted() {
    let server = TestServer::start().await.unwrap();
    let confession = create(&server, &unique_ip(), "hello").await;

    let ips: Vec<String> = (0..25).map(|_| unique_ip()).collect();
    let responses = join_all(
        ips.iter()
            .map(|ip| react(&server, ip, &confession.id, "angry")),
    )
    .await;
    assert!(responses.iter().all(|r| r.status() == StatusCode::OK));

    let page: ConfessionPage = assert_json(server.get("/confessions").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(page.confessions[0].reactions.angry, 25);
    assert_eq!(page.confessions[0].total_reactions, 25);
}

// ============================================================================
// Method Handling Tests
// ============================================================================

#[tokio::test]
async fn test_unsupported_methods() {
    let server = TestServer::start().await.unwrap();

    for (method, path) in [
        (Method::DELETE, "/confessions"),
        (Method::PATCH, "/confessions"),
        (Method::GET, "/reactions"),
        (Method::PUT, "/reactions"),
    ] {
        let response = server.request(method, path).send().await.unwrap();
        assert_error(response, StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
            .await
            .unwrap();
    }

    for path in ["/confessions", "/reactions"] {
        let response = server.request(Method::HEAD, path).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}

#[tokio::test]
async fn test_options_and_cors() {
    let server = TestServer::start().await.unwrap();

    for path in ["/confessions", "/reactions"] {
        let response = server.request(Method::OPTIONS, path).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.text().await.unwrap().is_empty());
    }

    let preflight = server
        .request(Method::OPTIONS, "/confessions")
        .header("origin", "https://board.example")
        .header("access-control-request-method", "POST")
        .send()
        .await
        .unwrap();
    assert_eq!(preflight.status(), StatusCode::OK);
    assert_eq!(preflight.headers()["access-control-allow-origin"], "*");

    let response = server
        .request(Method::GET, "/confessions")
        .header("origin", "https://board.example")
        .send()
        .await
        .unwrap();
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
