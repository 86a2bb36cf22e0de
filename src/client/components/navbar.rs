use dioxus::prelude::*;

use crate::client::components::Cart;
pub use crate::client::router::Route;

/// Buyer shown in the navbar until sign-in exists.
const GUEST_BUYER_ID: &str = "guest";

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                div { class: "flex items-center gap-2",
                    Link { to: Route::Home {}, class: "text-xl",
                        "Event Catalog"
                    }
                    p { class: "text-xs",
                        "v0.1.0.Alpha-1"
                    }
                }
            }
            div {
                class: "navbar-end",
                Cart { buyer_id: GUEST_BUYER_ID.to_string() }
            }
        }

        Outlet::<Route> {}
    }
}
