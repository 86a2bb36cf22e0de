//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main eventcatalog crate to keep fixture signatures
//! readable.

pub type EventItemModel = entity::event_item::Model;

pub type EventTypeModel = entity::event_type::Model;

pub type EventCategoryModel = entity::event_category::Model;

pub type AddressModel = entity::address::Model;
