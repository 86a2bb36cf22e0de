//! Resilient HTTP client for the catalog and cart APIs.
//!
//! [`HttpClient`] wraps `reqwest` with an optional authorization token, fail-fast escalation
//! of `500` responses and a [`CircuitBreaker`] shared by every clone of the client. Transport
//! errors, `5xx` and `408` responses count as failures; any other response closes the circuit.

pub mod api_paths;
pub mod circuit_breaker;
pub mod config;
pub mod error;

use std::time::Duration;

use dioxus_logger::tracing;
use reqwest::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    Method, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};

pub use circuit_breaker::{CallPermit, CircuitBreaker, CircuitState};
pub use config::{EscalationPolicy, HttpClientConfig};
pub use error::HttpClientError;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Response returned to the caller once escalation and circuit checks passed.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub method: Method,
    pub uri: String,
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    /// Whether the status is within `200..=299`.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Converts an unsuccessful status into [`HttpClientError::UnexpectedStatus`].
    pub fn error_for_status(self) -> Result<Self, HttpClientError> {
        if self.is_success() {
            return Ok(self);
        }

        Err(HttpClientError::UnexpectedStatus {
            method: self.method,
            uri: self.uri,
            status: self.status,
        })
    }

    /// Deserializes the body from JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpClientError> {
        serde_json::from_str(&self.body).map_err(|source| HttpClientError::Deserialize {
            uri: self.uri.clone(),
            source,
        })
    }
}

/// HTTP client with a shared circuit breaker.
///
/// Cloning is cheap; clones share the connection pool and the circuit.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    config: HttpClientConfig,
    breaker: CircuitBreaker,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(HttpClientConfig::default())
    }
}

impl HttpClient {
    /// Creates a client with its own closed circuit.
    pub fn new(config: HttpClientConfig) -> Self {
        let breaker = CircuitBreaker::new(config.failure_threshold, config.break_duration);

        Self {
            client: reqwest::Client::new(),
            config,
            breaker,
        }
    }

    /// Returns a clone sharing this client's circuit, using `timeout` for its calls.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        let mut client = self.clone();
        client.config.timeout = timeout;
        client
    }

    /// Circuit guarding this client.
    pub fn circuit_breaker(&self) -> &CircuitBreaker {
        &self.breaker
    }

    /// Sends a `GET` request and returns the response body.
    ///
    /// Unsuccessful statuses are returned as the body unless the escalation policy covers
    /// `GET`.
    ///
    /// # Returns
    /// - `Ok(String)` - Response body
    /// - `Err(HttpClientError::BrokenCircuit)` - Circuit open, nothing sent
    /// - `Err(HttpClientError::Network)` - Transport failure or timeout
    /// - `Err(HttpClientError::ServerError)` - `500` under [`EscalationPolicy::AllMethods`]
    pub async fn get_string(
        &self,
        uri: &str,
        token: Option<&str>,
    ) -> Result<String, HttpClientError> {
        Ok(self.get(uri, token).await?.body)
    }

    /// Sends a `GET` request, returning the status alongside the body.
    pub async fn get(&self, uri: &str, token: Option<&str>) -> Result<ApiResponse, HttpClientError> {
        self.execute(Method::GET, uri, None, token).await
    }

    /// Sends `payload` as JSON in a `POST` request.
    ///
    /// Under the default policy a `500` response fails with [`HttpClientError::ServerError`];
    /// other statuses, `404` included, are returned to the caller.
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        uri: &str,
        payload: &T,
        token: Option<&str>,
    ) -> Result<ApiResponse, HttpClientError> {
        self.send_json(Method::POST, uri, payload, token).await
    }

    /// Sends `payload` as JSON in a `PUT` request, escalating like [`Self::post`].
    pub async fn put<T: Serialize + ?Sized>(
        &self,
        uri: &str,
        payload: &T,
        token: Option<&str>,
    ) -> Result<ApiResponse, HttpClientError> {
        self.send_json(Method::PUT, uri, payload, token).await
    }

    /// Sends a `DELETE` request.
    pub async fn delete(
        &self,
        uri: &str,
        token: Option<&str>,
    ) -> Result<ApiResponse, HttpClientError> {
        self.execute(Method::DELETE, uri, None, token).await
    }

    /// Sends `payload` as a UTF-8 JSON body.
    ///
    /// # Returns
    /// - `Err(HttpClientError::InvalidMethod)` - `method` is neither `POST` nor `PUT`
    /// - `Err(HttpClientError::Serialize)` - `payload` can't be represented as JSON
    pub async fn send_json<T: Serialize + ?Sized>(
        &self,
        method: Method,
        uri: &str,
        payload: &T,
        token: Option<&str>,
    ) -> Result<ApiResponse, HttpClientError> {
        if method != Method::POST && method != Method::PUT {
            return Err(HttpClientError::InvalidMethod(method));
        }

        let body = serde_json::to_string(payload).map_err(HttpClientError::Serialize)?;

        self.execute(method, uri, Some(body), token).await
    }

    async fn execute(
        &self,
        method: Method,
        uri: &str,
        body: Option<String>,
        token: Option<&str>,
    ) -> Result<ApiResponse, HttpClientError> {
        // Dropped without an outcome if this future is cancelled mid-request
        let Some(permit) = self.breaker.try_acquire() else {
            tracing::debug!("Rejected {} {} while circuit is open", method, uri);

            return Err(HttpClientError::BrokenCircuit {
                uri: uri.to_string(),
            });
        };

        let mut request = self.client.request(method.clone(), uri);

        // Browsers enforce their own deadlines on fetch
        #[cfg(not(target_arch = "wasm32"))]
        {
            request = request.timeout(self.config.timeout);
        }

        if let Some(token) = token {
            request = request.header(
                AUTHORIZATION,
                format!("{} {}", self.config.authorization_scheme, token),
            );
        }

        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(body);
        }

        tracing::debug!("Sending {} {}", method, uri);

        let result = match request.send().await {
            Ok(response) => {
                let status = response.status();
                response.text().await.map(|body| (status, body))
            }
            Err(e) => Err(e),
        };

        let (status, body) = match result {
            Ok(response) => response,
            Err(source) => {
                permit.failure();

                return Err(HttpClientError::Network {
                    method,
                    uri: uri.to_string(),
                    source,
                });
            }
        };

        if status.is_server_error() || status == StatusCode::REQUEST_TIMEOUT {
            permit.failure();
        } else {
            permit.success();
        }

        if self.config.escalation.escalates(&method, status) {
            tracing::error!("{} {} failed with status {}", method, uri, status);

            return Err(HttpClientError::ServerError {
                method,
                uri: uri.to_string(),
                status,
            });
        }

        Ok(ApiResponse {
            method,
            uri: uri.to_string(),
            status,
            body,
        })
    }
}
