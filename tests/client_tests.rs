mod common;

use common::{mock_token, test_config};
use mockito::Server;
use sendpulse_client::client::HttpClient;
use sendpulse_client::error::AppError;
use sendpulse_client::model::balance::Balance;

const BALANCE_BODY: &str = r#"{"currency":"EUR","balance_currency":3.25}"#;

#[tokio::test]
async fn rejected_token_is_refreshed_and_request_retried_once() {
    let mut server = Server::new_async().await;
    let token_mock = mock_token(&mut server, 1).await;
    let stale_mock = server
        .mock("GET", "/balance")
        .match_header("authorization", "Bearer stale-token")
        .with_status(401)
        .with_body(r#"{"error":"token expired"}"#)
        .expect(1)
        .create_async()
        .await;
    let fresh_mock = server
        .mock("GET", "/balance")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_body(BALANCE_BODY)
        .expect(1)
        .create_async()
        .await;

    let client = HttpClient::new(test_config(server.url()));
    client.auth().prime("stale-token").await;

    let balance: Balance = client.get("balance").await.expect("balance request");
    assert_eq!(balance.currency, "EUR");
    assert_eq!(client.auth().cached().await.as_deref(), Some("test-token"));

    token_mock.assert_async().await;
    stale_mock.assert_async().await;
    fresh_mock.assert_async().await;
}

#[tokio::test]
async fn second_unauthorized_surfaces_without_third_attempt() {
    let mut server = Server::new_async().await;
    // Initial fetch plus one refresh after the first 401, nothing more.
    let token_mock = mock_token(&mut server, 2).await;
    let balance_mock = server
        .mock("GET", "/balance")
        .with_status(401)
        .with_body(r#"{"error":"token invalid"}"#)
        .expect(2)
        .create_async()
        .await;

    let client = HttpClient::new(test_config(server.url()));
    let err = client.get::<Balance>("balance").await.unwrap_err();

    match err {
        AppError::Unauthorized { path, body } => {
            assert_eq!(path, "balance");
            assert!(body.contains("token invalid"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    token_mock.assert_async().await;
    balance_mock.assert_async().await;
}

#[tokio::test]
async fn server_error_carries_status_and_body() {
    let mut server = Server::new_async().await;
    let _token_mock = mock_token(&mut server, 1).await;
    let balance_mock = server
        .mock("GET", "/balance")
        .with_status(500)
        .with_body("internal error")
        .expect(1)
        .create_async()
        .await;

    let client = HttpClient::new(test_config(server.url()));
    let err = client.get::<Balance>("balance").await.unwrap_err();

    match err {
        AppError::Http { status, path, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(path, "balance");
            assert_eq!(body, "internal error");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    balance_mock.assert_async().await;
}

#[tokio::test]
async fn malformed_json_on_success_is_a_decode_error() {
    let mut server = Server::new_async().await;
    let _token_mock = mock_token(&mut server, 1).await;
    let _balance_mock = server
        .mock("GET", "/balance")
        .with_status(200)
        .with_body("{not json")
        .expect(1)
        .create_async()
        .await;

    let client = HttpClient::new(test_config(server.url()));
    let err = client.get::<Balance>("balance").await.unwrap_err();

    match err {
        AppError::Deserialization { path, body, .. } => {
            assert_eq!(path, "balance");
            assert_eq!(body, "{not json");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn connection_failure_maps_to_service_unavailable() {
    // Nothing listens on port 1; the connection is refused immediately.
    let client = HttpClient::new(test_config("http://127.0.0.1:1".to_string()));
    let err = client.get::<Balance>("balance").await.unwrap_err();

    match err {
        AppError::Http { status, .. } => assert_eq!(status.as_u16(), 503),
        other => panic!("unexpected error: {other:?}"),
    }
}
