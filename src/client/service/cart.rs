use dioxus_logger::tracing;
use reqwest::StatusCode;
use thiserror::Error;

use crate::{
    client::http::{api_paths, HttpClient, HttpClientError},
    model::cart::CartDto,
};

/// Errors returned by [`CartService`].
#[derive(Error, Debug)]
pub enum CartError {
    /// The cart API's circuit is open.
    #[error("Cart service is unavailable")]
    ServiceUnavailable,
    /// Any other failure calling the cart API.
    #[error(transparent)]
    Request(HttpClientError),
}

impl From<HttpClientError> for CartError {
    fn from(err: HttpClientError) -> Self {
        if err.is_broken_circuit() {
            return Self::ServiceUnavailable;
        }

        Self::Request(err)
    }
}

/// Reads buyers' carts from the cart API.
#[derive(Clone, Debug)]
pub struct CartService {
    client: HttpClient,
    base_uri: String,
}

impl CartService {
    /// Creates a cart service for the API at `base_uri`, e.g. `http://host/api/v1/`.
    pub fn new(client: HttpClient, base_uri: impl Into<String>) -> Self {
        Self {
            client,
            base_uri: base_uri.into(),
        }
    }

    /// Retrieves the cart of `buyer_id`.
    ///
    /// A buyer without a cart gets an empty one.
    ///
    /// # Returns
    /// - `Ok(CartDto)` - The buyer's cart
    /// - `Err(CartError::ServiceUnavailable)` - Circuit open, no request sent
    /// - `Err(CartError::Request)` - Transport failure, unexpected status or malformed body
    pub async fn get_cart(&self, buyer_id: &str, token: Option<&str>) -> Result<CartDto, CartError> {
        let uri = api_paths::cart::basket(&self.base_uri, buyer_id);
        let response = self.client.get(&uri, token).await?;

        if response.status == StatusCode::NOT_FOUND {
            tracing::debug!("No cart found for buyer {}, using an empty cart", buyer_id);

            return Ok(CartDto {
                buyer_id: buyer_id.to_string(),
                items: Vec::new(),
            });
        }

        let cart = response.error_for_status()?.json()?;

        Ok(cart)
    }
}
