use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{error::catalog::CatalogError, model::catalog::PageRequest};

/// Pagination query parameters accepted by the paged catalog routes.
///
/// Omitted parameters fall back to page `0` and the route's default page size. Both are
/// signed so negative values are rejected as catalog errors rather than by the extractor.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Zero-based index of the requested page
    pub page_index: Option<i64>,
    /// Maximum number of items on the page
    pub page_size: Option<i64>,
}

impl PageParams {
    /// Resolves the parameters into a validated page request.
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - Parameters form a valid page
    /// - `Err(CatalogError::InvalidPageIndex)` - Negative page index
    /// - `Err(CatalogError::InvalidPageSize)` - Page size of zero or less
    /// - `Err(CatalogError::PageOutOfRange)` - Offset beyond what the store accepts
    pub fn page_request(&self, default_page_size: u64) -> Result<PageRequest, CatalogError> {
        let page_index = match self.page_index {
            None => 0,
            Some(index) => {
                u64::try_from(index).map_err(|_| CatalogError::InvalidPageIndex(index))?
            }
        };
        let page_size = match self.page_size {
            None => default_page_size,
            Some(size) => u64::try_from(size).map_err(|_| CatalogError::InvalidPageSize)?,
        };

        PageRequest::new(page_index, page_size)
    }
}
