mod common;

use common::{mock_token, test_config};
use mockito::Server;
use sendpulse_client::client::HttpClient;
use sendpulse_client::model::balance::Balance;
use std::sync::Arc;

const BALANCE_BODY: &str = r#"{"currency":"USD","balance_currency":10.5}"#;

#[tokio::test]
async fn first_authenticated_call_fetches_token_once() {
    let mut server = Server::new_async().await;
    let token_mock = mock_token(&mut server, 1).await;
    let balance_mock = server
        .mock("GET", "/balance")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_body(BALANCE_BODY)
        .expect(1)
        .create_async()
        .await;

    let client = HttpClient::new(test_config(server.url()));
    assert_eq!(client.auth().cached().await, None);

    let balance: Balance = client.get("balance").await.expect("balance request");
    assert_eq!(balance.currency, "USD");
    assert_eq!(client.auth().cached().await.as_deref(), Some("test-token"));

    token_mock.assert_async().await;
    balance_mock.assert_async().await;
}

#[tokio::test]
async fn cached_token_is_reused_across_calls() {
    let mut server = Server::new_async().await;
    let token_mock = mock_token(&mut server, 1).await;
    let balance_mock = server
        .mock("GET", "/balance")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_body(BALANCE_BODY)
        .expect(3)
        .create_async()
        .await;

    let client = HttpClient::new(test_config(server.url()));

    for _ in 0..3 {
        let _: Balance = client.get("balance").await.expect("balance request");
    }

    token_mock.assert_async().await;
    balance_mock.assert_async().await;
}

#[tokio::test]
async fn concurrent_requests_share_one_client_without_corruption() {
    let mut server = Server::new_async().await;
    // Concurrent tasks may race to fetch the first token; every fetch must
    // still succeed and every request must carry a valid token.
    let token_mock = server
        .mock("POST", "/oauth/access_token")
        .with_status(200)
        .with_body(common::TOKEN_BODY)
        .expect_at_least(1)
        .create_async()
        .await;
    let balance_mock = server
        .mock("GET", "/balance")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_body(BALANCE_BODY)
        .expect(8)
        .create_async()
        .await;

    let client = Arc::new(HttpClient::new(test_config(server.url())));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            let balance: Balance = client.get("balance").await.expect("balance request");
            balance
        }));
    }

    for handle in handles {
        let balance = handle.await.expect("task join");
        assert_eq!(balance.currency, "USD");
    }

    assert_eq!(client.auth().cached().await.as_deref(), Some("test-token"));
    token_mock.assert_async().await;
    balance_mock.assert_async().await;
}

#[tokio::test]
async fn failed_token_fetch_surfaces_http_error() {
    let mut server = Server::new_async().await;
    let token_mock = server
        .mock("POST", "/oauth/access_token")
        .with_status(400)
        .with_body(r#"{"error":"invalid_client"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = HttpClient::new(test_config(server.url()));
    let err = client.get::<Balance>("balance").await.unwrap_err();

    match err {
        sendpulse_client::error::AppError::Http { status, path, body } => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(path, "oauth/access_token");
            assert!(body.contains("invalid_client"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    token_mock.assert_async().await;
}
