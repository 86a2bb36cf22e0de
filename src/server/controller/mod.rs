//! HTTP controller endpoints for the event items API.
//!
//! This module contains Axum handlers for the catalog routes. Controllers parse path and
//! query parameters into catalog queries, delegate to the catalog service and return JSON
//! responses. Every handler is annotated with utoipa for OpenAPI documentation.

pub mod event_items;
pub mod util;
