//! Deadline enforcement for store round-trips.

use std::{future::Future, time::Duration};

use crate::server::error::Error;

/// Runs a store operation, failing with [`Error::Timeout`] if it doesn't complete in time.
///
/// The operation is dropped once the deadline elapses, cancelling the pending query.
///
/// # Arguments
/// - `deadline` - Maximum time the operation may take
/// - `operation` - Future performing the store round-trip
///
/// # Returns
/// - `Ok(T)` - The operation completed within the deadline
/// - `Err(Error::Timeout)` - The deadline elapsed first
/// - `Err(Error)` - The operation itself failed
pub async fn with_deadline<T, E, F>(deadline: Duration, operation: F) -> Result<T, Error>
where
    F: Future<Output = Result<T, E>>,
    Error: From<E>,
{
    match tokio::time::timeout(deadline, operation).await {
        Ok(result) => result.map_err(Error::from),
        Err(_) => Err(Error::Timeout(deadline)),
    }
}
