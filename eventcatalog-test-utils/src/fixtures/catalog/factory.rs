//! Factory functions for generating mock catalog models.
//!
//! Pure functions returning in-memory models with standard test values. Suitable for unit
//! tests and as input to the database fixtures.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::{
    constant::TEST_IMAGE_URL_PLACEHOLDER,
    model::{AddressModel, EventItemModel},
};

/// Build a naive start time at the given calendar date and hour.
///
/// # Panics
/// Panics on an invalid date, which is a bug in the test itself.
pub fn event_time(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .expect("invalid test date")
}

/// Create a mock event item model.
///
/// The item references type, category and address `1` and stores its image URL behind the
/// placeholder host, as persisted rows do.
///
/// # Arguments
/// - `id` - Primary key of the event item
/// - `name` - Event name, also used as the default sort key
/// - `start_time` - Event start time; the end time is three hours later
pub fn mock_event_item(id: i32, name: &str, start_time: NaiveDateTime) -> EventItemModel {
    EventItemModel {
        id,
        name: name.to_string(),
        description: format!("{} description", name),
        price: 25.0,
        image_url: format!("{}/api/pic/{}", TEST_IMAGE_URL_PLACEHOLDER, id),
        start_time,
        end_time: start_time + Duration::hours(3),
        type_id: 1,
        category_id: 1,
        address_id: 1,
    }
}

/// Create a mock address model located in `city`.
pub fn mock_address(id: i32, city: &str) -> AddressModel {
    AddressModel {
        id,
        street: format!("{} Main Street", id),
        city: city.to_string(),
        state: "WA".to_string(),
        zip: "98101".to_string(),
    }
}
