//! URI builders for the remote APIs.
//!
//! Every builder takes the API base URI including its trailing slash, e.g.
//! `http://localhost:7000/api/eventitems/`. Free-text path segments are percent-encoded.

/// Legacy catalog API paths.
pub mod catalog {
    pub fn all_types(base_uri: &str) -> String {
        format!("{}catalogtypes", base_uri)
    }

    pub fn all_brands(base_uri: &str) -> String {
        format!("{}catalogbrands", base_uri)
    }

    /// Items page, with a `/type/{type}/brand/{brand}` segment when either filter is set.
    ///
    /// An unset filter inside the segment is written as `null`.
    pub fn all_items(
        base_uri: &str,
        page: u64,
        take: u64,
        brand: Option<i32>,
        item_type: Option<i32>,
    ) -> String {
        let filter = if brand.is_some() || item_type.is_some() {
            format!("/type/{}/brand/{}", or_null(item_type), or_null(brand))
        } else {
            String::new()
        };

        format!(
            "{}items{}?pageIndex={}&pageSize={}",
            base_uri, filter, page, take
        )
    }

    fn or_null(value: Option<i32>) -> String {
        value.map_or_else(|| "null".to_string(), |v| v.to_string())
    }
}

/// Event items API paths.
pub mod event_items {
    pub fn event_types(base_uri: &str) -> String {
        format!("{}eventtypes", base_uri)
    }

    pub fn event_categories(base_uri: &str) -> String {
        format!("{}eventcategories", base_uri)
    }

    pub fn addresses(base_uri: &str) -> String {
        format!("{}addresses", base_uri)
    }

    pub fn items(base_uri: &str, page: u64, size: u64) -> String {
        format!("{}items{}", base_uri, page_query(page, size))
    }

    pub fn items_by_type(base_uri: &str, type_id: i32, page: u64, size: u64) -> String {
        format!(
            "{}eventtypes/{}{}",
            base_uri,
            type_id,
            page_query(page, size)
        )
    }

    pub fn items_by_category(base_uri: &str, category_id: i32, page: u64, size: u64) -> String {
        format!(
            "{}eventcategories/{}{}",
            base_uri,
            category_id,
            page_query(page, size)
        )
    }

    pub fn items_by_month(base_uri: &str, month: u32, page: u64, size: u64) -> String {
        format!(
            "{}filterbymonth/{}{}",
            base_uri,
            month,
            page_query(page, size)
        )
    }

    pub fn items_by_date(
        base_uri: &str,
        day: u32,
        month: u32,
        year: i32,
        page: u64,
        size: u64,
    ) -> String {
        format!(
            "{}filterbydate/{}-{}-{}{}",
            base_uri,
            day,
            month,
            year,
            page_query(page, size)
        )
    }

    /// City projection page, with the city encoded as a single path segment.
    pub fn items_by_city(base_uri: &str, city: &str, page: u64, size: u64) -> String {
        format!(
            "{}addresses/filtered/{}{}",
            base_uri,
            url_escape::encode_component(city),
            page_query(page, size)
        )
    }

    fn page_query(page: u64, size: u64) -> String {
        format!("?pageIndex={}&pageSize={}", page, size)
    }
}

/// Cart API paths.
pub mod cart {
    pub fn basket(base_uri: &str, buyer_id: &str) -> String {
        format!(
            "{}basket/{}",
            base_uri,
            url_escape::encode_component(buyer_id)
        )
    }
}
