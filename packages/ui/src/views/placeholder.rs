use dioxus::prelude::*;

/// Empty state for pages served elsewhere (browse, map, dashboard, auth).
#[component]
pub fn PagePlaceholder(title: String, message: String) -> Element {
    rsx! {
        div {
            class: "flex-1 flex flex-col items-center justify-center text-neutral-600 py-24",
            h2 { class: "m-0 mb-2 font-normal text-neutral-800 text-lg", "{title}" }
            p { class: "m-0 text-sm text-neutral-600", "{message}" }
        }
    }
}
