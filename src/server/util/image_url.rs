//! Image URL resolution.
//!
//! Event item image URLs are persisted behind a placeholder host so the catalog can be served
//! from any deployment. The placeholder is swapped for the configured external catalog base URL
//! before items leave the service.

/// Host token every stored image URL begins with.
pub const PLACEHOLDER_HOST: &str = "http://externaleventbaseurltoberplaced";

/// Replaces the placeholder host of a stored image URL with `base_url`.
///
/// URLs not starting with the placeholder are returned unchanged. A trailing slash on
/// `base_url` is dropped so the path keeps a single separator.
pub fn resolve(image_url: &str, base_url: &str) -> String {
    match image_url.strip_prefix(PLACEHOLDER_HOST) {
        Some(path) => format!("{}{}", base_url.trim_end_matches('/'), path),
        None => image_url.to_string(),
    }
}
