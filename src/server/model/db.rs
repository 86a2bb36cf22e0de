//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models used throughout the server, so signatures
//! don't need to spell out the `entity` crate paths.

/// Type alias for an event item database model.
///
/// # Fields (from `entity::event_item::Model`)
/// - `id` - Primary key
/// - `name` - Event name
/// - `description` - Free-text description
/// - `price` - Ticket price
/// - `image_url` - Image URL stored behind the placeholder host
/// - `start_time` / `end_time` - Naive schedule timestamps
/// - `type_id` - Foreign key to the event type
/// - `category_id` - Foreign key to the event category
/// - `address_id` - Foreign key to the event address
pub type EventItemModel = entity::event_item::Model;

/// Type alias for an event type lookup model.
pub type EventTypeModel = entity::event_type::Model;

/// Type alias for an event category lookup model.
pub type EventCategoryModel = entity::event_category::Model;

/// Type alias for an address database model.
///
/// # Fields (from `entity::address::Model`)
/// - `id` - Primary key
/// - `street`, `city`, `state`, `zip` - Display fields
pub type AddressModel = entity::address::Model;
