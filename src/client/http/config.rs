use std::time::Duration;

use reqwest::{Method, StatusCode};

/// Which responses with a `500 Internal Server Error` status are turned into
/// [`HttpClientError::ServerError`](super::error::HttpClientError::ServerError).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EscalationPolicy {
    /// Only `POST` and `PUT` fail fast; `GET` and `DELETE` return the response to the caller.
    #[default]
    MutatingOnly,
    /// Every method fails fast.
    AllMethods,
    /// No method fails fast; the caller always receives the response.
    Never,
}

impl EscalationPolicy {
    /// Whether a response with `status` to a `method` request is raised as an error.
    pub fn escalates(&self, method: &Method, status: StatusCode) -> bool {
        if status != StatusCode::INTERNAL_SERVER_ERROR {
            return false;
        }

        match self {
            Self::MutatingOnly => *method == Method::POST || *method == Method::PUT,
            Self::AllMethods => true,
            Self::Never => false,
        }
    }
}

/// Settings of an [`HttpClient`](super::HttpClient).
#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    /// Deadline of each request unless overridden for a call.
    pub timeout: Duration,
    /// Consecutive failures opening the circuit.
    pub failure_threshold: u32,
    /// How long the circuit stays open before a trial call is let through.
    pub break_duration: Duration,
    /// Which `500` responses are raised as errors.
    pub escalation: EscalationPolicy,
    /// Scheme preceding the token in the `Authorization` header.
    pub authorization_scheme: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            failure_threshold: 5,
            break_duration: Duration::from_secs(30),
            escalation: EscalationPolicy::default(),
            authorization_scheme: "Bearer".to_string(),
        }
    }
}
