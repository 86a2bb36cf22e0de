//! Tests for the front-end HTTP client and services.
//!
//! Remote APIs are stood in for by the mockito server of the test context.

mod cart_service;
mod event_service;
mod http_client;

use std::time::Duration;

use eventcatalog::client::http::{HttpClient, HttpClientConfig, HttpClientError};
use eventcatalog_test_utils::prelude::*;

/// Client with a short break so half-open recovery can be exercised.
fn client_with_breaker(failure_threshold: u32, break_duration: Duration) -> HttpClient {
    HttpClient::new(HttpClientConfig {
        failure_threshold,
        break_duration,
        ..HttpClientConfig::default()
    })
}
