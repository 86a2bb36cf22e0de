//! Tests for HttpClient request handling, escalation and circuit breaking.

use eventcatalog::client::http::{CircuitState, EscalationPolicy};
use mockito::Matcher;
use serde_json::json;

use super::*;

/// Tests that mutating calls carry the bearer token and a JSON body.
///
/// Expected: Ok with the mock matched on headers and body
#[tokio::test]
async fn post_sends_bearer_token_and_json_body() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/basket")
                .match_header("authorization", "Bearer secret-token")
                .match_header("content-type", Matcher::Regex("^application/json".to_string()))
                .match_body(Matcher::Json(json!({ "buyerId": "buyer-1" })))
                .with_status(201)
                .create()
        })
        .build()
        .await?;

    let client = HttpClient::default();
    let resp = client
        .post(
            &format!("{}/basket", test.server_url()),
            &json!({ "buyerId": "buyer-1" }),
            Some("secret-token"),
        )
        .await
        .unwrap();

    assert_eq!(resp.status.as_u16(), 201);
    test.assert_mocks();

    Ok(())
}

/// Tests that the authorization scheme can be changed.
///
/// Expected: Ok with the custom scheme in the header
#[tokio::test]
async fn uses_configured_authorization_scheme() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("DELETE", "/basket/1")
                .match_header("authorization", "Token abc")
                .with_status(204)
                .create()
        })
        .build()
        .await?;

    let client = HttpClient::new(HttpClientConfig {
        authorization_scheme: "Token".to_string(),
        ..HttpClientConfig::default()
    });
    let resp = client
        .delete(&format!("{}/basket/1", test.server_url()), Some("abc"))
        .await
        .unwrap();

    assert_eq!(resp.status.as_u16(), 204);
    test.assert_mocks();

    Ok(())
}

/// Tests that no authorization header is sent without a token.
///
/// Expected: Ok with the body returned
#[tokio::test]
async fn get_without_token_omits_authorization() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/eventtypes")
                .match_header("authorization", Matcher::Missing)
                .with_status(200)
                .with_body("[]")
                .create()
        })
        .build()
        .await?;

    let client = HttpClient::default();
    let body = client
        .get_string(&format!("{}/eventtypes", test.server_url()), None)
        .await
        .unwrap();

    assert_eq!(body, "[]");
    test.assert_mocks();

    Ok(())
}

/// Tests that a 500 on POST and PUT fails fast.
///
/// Expected: Err(HttpClientError::ServerError) for both
#[tokio::test]
async fn mutating_call_fails_on_internal_server_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/basket")
                .with_status(500)
                .create()
        })
        .with_mock_endpoint(|server| {
            server
                .mock("PUT", "/basket")
                .with_status(500)
                .create()
        })
        .build()
        .await?;

    let client = HttpClient::default();
    let uri = format!("{}/basket", test.server_url());

    let post = client.post(&uri, &json!({}), None).await;
    let put = client.put(&uri, &json!({}), None).await;

    assert!(matches!(post, Err(HttpClientError::ServerError { .. })));
    assert!(matches!(put, Err(HttpClientError::ServerError { .. })));

    Ok(())
}

/// Tests that a 404 on POST returns normally with the status visible.
///
/// Expected: Ok with status 404
#[tokio::test]
async fn mutating_call_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/basket")
                .with_status(404)
                .create()
        })
        .build()
        .await?;

    let client = HttpClient::default();
    let resp = client
        .post(&format!("{}/basket", test.server_url()), &json!({}), None)
        .await
        .unwrap();

    assert_eq!(resp.status.as_u16(), 404);
    assert!(!resp.is_success());

    Ok(())
}

/// Tests that GET and DELETE return a 500 response under the default policy.
///
/// Expected: Ok with the error body and status
#[tokio::test]
async fn get_and_delete_return_internal_server_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/items")
                .with_status(500)
                .with_body("boom")
                .create()
        })
        .with_mock_endpoint(|server| {
            server
                .mock("DELETE", "/items")
                .with_status(500)
                .create()
        })
        .build()
        .await?;

    let client = HttpClient::default();
    let uri = format!("{}/items", test.server_url());

    let body = client.get_string(&uri, None).await.unwrap();
    let resp = client.delete(&uri, None).await.unwrap();

    assert_eq!(body, "boom");
    assert_eq!(resp.status.as_u16(), 500);

    Ok(())
}

/// Tests that the escalation policy can cover every method.
///
/// Expected: Err(HttpClientError::ServerError) for GET
#[tokio::test]
async fn all_methods_policy_escalates_get() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| server.mock("GET", "/items").with_status(500).create())
        .build()
        .await?;

    let client = HttpClient::new(HttpClientConfig {
        escalation: EscalationPolicy::AllMethods,
        ..HttpClientConfig::default()
    });
    let result = client
        .get_string(&format!("{}/items", test.server_url()), None)
        .await;

    assert!(matches!(result, Err(HttpClientError::ServerError { .. })));

    Ok(())
}

/// Tests that a JSON payload is refused for methods other than POST and PUT.
///
/// Expected: Err(HttpClientError::InvalidMethod) without a request
#[tokio::test]
async fn json_payload_requires_post_or_put() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| server.mock("PATCH", "/basket").expect(0).create())
        .build()
        .await?;

    let client = HttpClient::default();
    let result = client
        .send_json(
            reqwest::Method::PATCH,
            &format!("{}/basket", test.server_url()),
            &json!({}),
            None,
        )
        .await;

    assert!(matches!(result, Err(HttpClientError::InvalidMethod(_))));
    test.assert_mocks();

    Ok(())
}

/// Tests that the circuit opens after consecutive failures and stops sending requests.
///
/// Expected: Err(HttpClientError::BrokenCircuit) with only the threshold number of requests sent
#[tokio::test]
async fn circuit_opens_after_threshold() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/items")
                .with_status(503)
                .expect(3)
                .create()
        })
        .build()
        .await?;

    let client = client_with_breaker(3, Duration::from_secs(30));
    let uri = format!("{}/items", test.server_url());

    for _ in 0..3 {
        let resp = client.get(&uri, None).await.unwrap();
        assert_eq!(resp.status.as_u16(), 503);
    }

    let result = client.get(&uri, None).await;

    assert!(matches!(result, Err(HttpClientError::BrokenCircuit { .. })));
    assert_eq!(client.circuit_breaker().state(), CircuitState::Open);
    test.assert_mocks();

    Ok(())
}

/// Tests that transport failures count towards opening the circuit.
///
/// Expected: Err(HttpClientError::Network) then Err(HttpClientError::BrokenCircuit)
#[tokio::test]
async fn network_errors_open_circuit() -> Result<(), TestError> {
    // Reserve a free port, then release it so connections are refused
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .unwrap()
        .port();
    let uri = format!("http://127.0.0.1:{}/items", port);

    let client = client_with_breaker(1, Duration::from_secs(30));
    let first = client.get(&uri, None).await;
    let second = client.get(&uri, None).await;

    assert!(matches!(first, Err(HttpClientError::Network { .. })));
    assert!(matches!(second, Err(HttpClientError::BrokenCircuit { .. })));

    Ok(())
}

/// Tests that a successful trial call after the break closes the circuit.
///
/// Expected: Ok after the break, with the circuit closed again
#[tokio::test]
async fn trial_call_closes_circuit() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let uri = format!("{}/items", test.server_url());

    let failing = test
        .server()
        .mock("GET", "/items")
        .with_status(500)
        .expect(2)
        .create_async()
        .await;

    let client = client_with_breaker(2, Duration::from_millis(100));
    for _ in 0..2 {
        client.get(&uri, None).await.unwrap();
    }
    assert!(client.get(&uri, None).await.unwrap_err().is_broken_circuit());
    failing.assert_async().await;
    failing.remove_async().await;

    let healthy = test
        .server()
        .mock("GET", "/items")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    tokio::time::sleep(Duration::from_millis(150)).await;

    let body = client.get_string(&uri, None).await.unwrap();

    assert_eq!(body, "[]");
    assert_eq!(client.circuit_breaker().state(), CircuitState::Closed);
    healthy.assert_async().await;

    Ok(())
}

/// Tests that clones and per-call timeout overrides share one circuit.
///
/// Expected: Err(HttpClientError::BrokenCircuit) from the original after the clone failed
#[tokio::test]
async fn timeout_override_shares_circuit() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| server.mock("GET", "/items").with_status(502).create())
        .build()
        .await?;

    let client = client_with_breaker(1, Duration::from_secs(30));
    let uri = format!("{}/items", test.server_url());

    client
        .with_timeout(Duration::from_secs(2))
        .get(&uri, None)
        .await
        .unwrap();

    let result = client.get(&uri, None).await;

    assert!(matches!(result, Err(HttpClientError::BrokenCircuit { .. })));

    Ok(())
}

/// Tests that a trial call cancelled mid-request doesn't keep the circuit half-open.
///
/// Expected: Open after the cancelled trial, then a new trial reaching the remote after the break
#[tokio::test]
async fn cancelled_trial_reopens_circuit() -> Result<(), TestError> {
    // Accepts connections but never answers
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let uri = format!("http://{}/items", listener.local_addr().unwrap());
    let _silent = tokio::spawn(async move {
        let mut connections = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            connections.push(stream);
        }
    });

    let client = client_with_breaker(1, Duration::from_millis(50));
    let first = client
        .with_timeout(Duration::from_millis(50))
        .get(&uri, None)
        .await;
    assert!(matches!(first, Err(HttpClientError::Network { .. })));
    assert_eq!(client.circuit_breaker().state(), CircuitState::Open);

    tokio::time::sleep(Duration::from_millis(100)).await;

    let cancelled = tokio::time::timeout(Duration::from_millis(100), client.get(&uri, None)).await;
    assert!(cancelled.is_err());
    assert_eq!(client.circuit_breaker().state(), CircuitState::Open);

    tokio::time::sleep(Duration::from_millis(100)).await;

    let retried = client
        .with_timeout(Duration::from_millis(50))
        .get(&uri, None)
        .await;
    assert!(matches!(retried, Err(HttpClientError::Network { .. })));

    Ok(())
}
