//! Test fixture modules for database records.
//!
//! - `catalog` - Event types, categories, addresses and event items
pub mod catalog;
