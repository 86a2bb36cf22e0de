//! Test configuration constants for catalog setup.
//!
//! These values mirror the production configuration surface but point at hosts that are
//! never contacted during tests.

/// External catalog base URL substituted into image URLs during tests.
pub static TEST_EXTERNAL_CATALOG_BASE_URL: &str = "http://localhost:7000";

/// Host token stored in front of every persisted image URL.
///
/// Must match the token the catalog service replaces at read time.
pub static TEST_IMAGE_URL_PLACEHOLDER: &str = "http://externaleventbaseurltoberplaced";
