use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A page of results from a paginated catalog query
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PageDto<T> {
    /// Zero-based index of the returned page
    pub page_index: u64,
    /// Number of items actually returned, never the requested size
    pub page_size: u64,
    /// Total number of items matching the filter, independent of pagination
    pub count: u64,
    /// Items on this page
    pub data: Vec<T>,
}

impl<T> PageDto<T> {
    /// Builds a page from the items retrieved for `page_index`, deriving the page size from the
    /// number of items.
    pub fn new(page_index: u64, count: u64, data: Vec<T>) -> Self {
        Self {
            page_index,
            page_size: data.len() as u64,
            count,
            data,
        }
    }

    /// A page with no matches
    pub fn empty(page_index: u64) -> Self {
        Self::new(page_index, 0, Vec::new())
    }
}

/// An event listed in the catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EventItemDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Image URL resolved against the external catalog base URL
    pub image_url: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub type_id: i32,
    pub category_id: i32,
    pub address_id: i32,
}

/// An event joined with the address it takes place at
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EventItemWithAddressDto {
    pub event_id: i32,
    pub event_name: String,
    pub description: String,
    pub price: f64,
    /// Image URL resolved against the external catalog base URL
    pub event_image: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub type_id: i32,
    pub category_id: i32,
    pub address_id: i32,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EventTypeDto {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EventCategoryDto {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    pub id: i32,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}
