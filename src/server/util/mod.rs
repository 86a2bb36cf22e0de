//! Utility functions and helpers for server operations.
//!
//! This module provides reusable helpers for the catalog query service: bounding store
//! round-trips by the configured deadline and resolving stored image URLs against the external
//! catalog base URL.

pub mod deadline;
pub mod image_url;
