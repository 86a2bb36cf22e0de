//! Lenient parsing of numeric path segments.
//!
//! A segment that is not a number at all is treated as absent so the route widens to the
//! whole catalog. A number that is out of range is a client error.

use std::str::FromStr;

use crate::server::error::catalog::CatalogError;

/// Parses a numeric path segment, mapping anything non-numeric to `None`.
pub fn optional_number<T: FromStr>(segment: &str) -> Option<T> {
    segment.trim().parse().ok()
}

/// Parses the month segment of `filterbymonth`.
///
/// # Returns
/// - `Ok(Some(month))` - Month between 1 and 12
/// - `Ok(None)` - Segment isn't a number
/// - `Err(CatalogError::InvalidMonth)` - Number outside of 1 to 12
pub fn month(segment: &str) -> Result<Option<u32>, CatalogError> {
    let Some(month) = optional_number::<i64>(segment) else {
        return Ok(None);
    };

    match u32::try_from(month) {
        Ok(m) if (1..=12).contains(&m) => Ok(Some(m)),
        _ => Err(CatalogError::InvalidMonth(month)),
    }
}

/// Splits a `{day}-{month}-{year}` segment into its components.
///
/// Each component that is missing or not a number is `None`.
pub fn date_parts(segment: &str) -> (Option<u32>, Option<u32>, Option<i32>) {
    let mut parts = segment.splitn(3, '-');

    let day = parts.next().and_then(optional_number);
    let month = parts.next().and_then(optional_number);
    let year = parts.next().and_then(optional_number);

    (day, month, year)
}
