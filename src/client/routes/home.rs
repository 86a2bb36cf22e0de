use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{components::Page, service::EventService};

const PAGE_SIZE: u64 = 4;

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Event Catalog" }
        Meta {
            name: "description",
            content: "Browse upcoming events."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-4",
                h1 { class: "text-2xl", "Upcoming events" }
                EventList { }
            }
        }
    )
}

#[component]
pub fn EventList() -> Element {
    let event_service = use_context::<EventService>();
    let mut page_index = use_signal(|| 0u64);

    let events = use_resource(move || {
        let service = event_service.clone();
        let page_index = page_index();

        async move { service.get_event_items(page_index, PAGE_SIZE, None, None).await }
    });

    match &*events.read_unchecked() {
        Some(Ok(page)) => {
            let has_next = (page_index() + 1) * PAGE_SIZE < page.count;

            rsx!(
                ul { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    {page.data.iter().map(|event| rsx! {
                        li { key: "{event.id}", class: "card shadow-sm",
                            figure {
                                img { src: "{event.image_url}", alt: "{event.name}" }
                            }
                            div { class: "card-body",
                                h2 { class: "card-title", "{event.name}" }
                                p { "{event.start_time}" }
                                p { class: "font-semibold", {format!("${:.2}", event.price)} }
                            }
                        }
                    })}
                }
                div { class: "flex justify-center gap-2",
                    button {
                        class: "btn btn-outline",
                        disabled: page_index() == 0,
                        onclick: move |_| page_index -= 1,
                        "Previous"
                    }
                    button {
                        class: "btn btn-outline",
                        disabled: !has_next,
                        onclick: move |_| page_index += 1,
                        "Next"
                    }
                }
            )
        }
        Some(Err(err)) => {
            tracing::error!("Failed to load events: {}", err);

            rsx!(p { class: "text-error", "Events are unavailable right now." })
        }
        None => rsx!(div { class: "skeleton h-32 w-full" }),
    }
}
