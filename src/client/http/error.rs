use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Errors returned by [`HttpClient`](super::HttpClient) calls.
#[derive(Error, Debug)]
pub enum HttpClientError {
    /// The request couldn't be sent or its response couldn't be read, including timeouts.
    #[error("Failed to send {method} request to {uri}: {source}")]
    Network {
        method: Method,
        uri: String,
        #[source]
        source: reqwest::Error,
    },
    /// The remote answered `500 Internal Server Error` to a request the escalation policy covers.
    #[error("{method} request to {uri} failed with status {status}")]
    ServerError {
        method: Method,
        uri: String,
        status: StatusCode,
    },
    /// The remote answered with a status the caller can't handle.
    #[error("{method} request to {uri} returned unexpected status {status}")]
    UnexpectedStatus {
        method: Method,
        uri: String,
        status: StatusCode,
    },
    /// The circuit is open; the request was rejected without touching the network.
    #[error("Circuit is open, request to {uri} was not sent")]
    BrokenCircuit { uri: String },
    /// The payload couldn't be serialized to JSON.
    #[error("Failed to serialize request payload: {0}")]
    Serialize(#[source] serde_json::Error),
    /// The response body couldn't be deserialized from JSON.
    #[error("Failed to deserialize response from {uri}: {source}")]
    Deserialize {
        uri: String,
        #[source]
        source: serde_json::Error,
    },
    /// A JSON body was requested with a method other than POST or PUT.
    #[error("Method {0} cannot carry a JSON payload, expected POST or PUT")]
    InvalidMethod(Method),
}

impl HttpClientError {
    /// Whether the error was raised by an open circuit.
    pub fn is_broken_circuit(&self) -> bool {
        matches!(self, Self::BrokenCircuit { .. })
    }
}
