use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised while validating a catalog query.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// Requested page size was zero or negative.
    #[error("Page size must be greater than zero")]
    InvalidPageSize,
    /// Requested page index was negative.
    #[error("Page index {0} must not be negative")]
    InvalidPageIndex(i64),
    /// The page size or offset of the requested page exceeds what the store accepts.
    #[error("Page {page_index} with page size {page_size} is out of range")]
    PageOutOfRange {
        /// Requested page index.
        page_index: u64,
        /// Requested page size.
        page_size: u64,
    },
    /// Month outside of 1 to 12.
    #[error("Month {0} is not between 1 and 12")]
    InvalidMonth(i64),
    /// Day, month and year do not form a calendar date.
    #[error("{day}-{month}-{year} is not a valid calendar date")]
    InvalidDate {
        /// Day of month.
        day: u32,
        /// Month of year.
        month: u32,
        /// Year.
        year: i32,
    },
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected catalog query: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
