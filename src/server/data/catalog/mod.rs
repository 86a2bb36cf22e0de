//! Catalog repositories.
//!
//! One repository per entity: event items carry the filtered and paginated queries, the
//! lookup repositories return their full tables.

pub mod address;
pub mod event_category;
pub mod event_item;
pub mod event_type;
