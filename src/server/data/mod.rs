//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations. The catalog is
//! read-only from the server's perspective, so repositories only expose queries.

pub mod catalog;
