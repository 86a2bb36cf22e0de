use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page { class: "flex items-center justify-center",
            p { class: "text-xl",
                "Nothing found at /{path}"
            }
        }
    )
}
