use dioxus::prelude::*;

use crate::client::{
    http::HttpClient,
    router::Route,
    service::{CartService, EventService},
};

/// Base URI of the event items API, overridable at build time.
const EVENT_ITEMS_API: &str = match option_env!("EVENT_ITEMS_API_URL") {
    Some(uri) => uri,
    None => "http://localhost:8080/api/eventitems/",
};

/// Base URI of the cart API, overridable at build time.
const CART_API: &str = match option_env!("CART_API_URL") {
    Some(uri) => uri,
    None => "http://localhost:5500/api/v1/",
};

#[component]
pub fn App() -> Element {
    // One client per remote API so an open cart circuit doesn't block the catalog
    use_context_provider(|| EventService::new(HttpClient::default(), EVENT_ITEMS_API));
    use_context_provider(|| CartService::new(HttpClient::default(), CART_API));

    rsx! {
        Router::<Route> {}
    }
}
