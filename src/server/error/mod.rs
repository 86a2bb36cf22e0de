//! Error types for the event catalog server.
//!
//! Domain-specific error enums (configuration, catalog query validation) are aggregated into a
//! single [`Error`] together with external library errors. All errors implement `IntoResponse`
//! for Axum HTTP responses and use `thiserror` for their `Display` and `Error` implementations.

pub mod catalog;
pub mod config;

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{catalog::CatalogError, config::ConfigError},
};

/// Main error type for the event catalog server.
///
/// Uses `thiserror`'s `#[from]` attribute so the `?` operator converts underlying errors
/// automatically. The `IntoResponse` implementation maps errors to HTTP responses for API
/// consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Catalog errors (invalid pagination or filter values)
/// - Deadline errors (store round-trip exceeded the configured timeout)
/// - External library errors (database, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Catalog query rejected before reaching the store.
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// A store round-trip did not complete within the configured deadline.
    #[error("Catalog query did not complete within {0:?}")]
    Timeout(Duration),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding or serving the listener).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For invalid pagination or filter values
/// - 504 Gateway Timeout - When the store did not answer within the deadline
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            Self::Timeout(deadline) => {
                tracing::warn!("Catalog query exceeded deadline of {:?}", deadline);

                (
                    StatusCode::GATEWAY_TIMEOUT,
                    Json(ErrorDto {
                        error: "The catalog did not respond in time, please try again."
                            .to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
