//! Data transfer objects shared by the API server and the front-end client.

pub mod api;
pub mod cart;
pub mod catalog;
