//! Front-end services calling the remote APIs through [`HttpClient`](super::http::HttpClient).

pub mod cart;
pub mod event;

pub use cart::{CartError, CartService};
pub use event::{EventService, SelectOption};
