//! Host side of the chat widget.
//!
//! Message transport, history and delivery errors belong to the chat service;
//! this component only honours the widget contract: it is shown while
//! `is_open`, it knows who is chatting (`current_user_id`, `token`), and it may
//! be pinned to one peer and listing.

use dioxus::prelude::*;

use crate::icons::{FaMessage, FaXmark};
use crate::Icon;

#[component]
pub fn ChatWidget(
    is_open: bool,
    on_close: EventHandler<()>,
    current_user_id: String,
    token: String,
    /// Listing the conversation is about, when opened from a listing page.
    initial_listing_id: Option<String>,
    /// Peer to message, when opened from a listing page.
    initial_receiver_id: Option<String>,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    let subtitle = match (&initial_receiver_id, &initial_listing_id) {
        (Some(_), Some(_)) => "New conversation about this listing",
        (Some(_), None) => "New conversation",
        _ => "Your conversations",
    };

    rsx! {
        // Overlay; a click outside the panel closes the chat
        div {
            class: "fixed inset-0 flex items-center justify-center bg-black/30",
            style: "z-index: 2000",
            onclick: move |_| on_close.call(()),
            div {
                class: "chat-widget bg-white rounded-lg shadow-lg max-w-lg w-full mx-4",
                "data-user": "{current_user_id}",
                "data-receiver": initial_receiver_id.clone().unwrap_or_default(),
                "data-listing": initial_listing_id.clone().unwrap_or_default(),
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "chat-widget-header",
                    Icon { icon: FaMessage, width: 16, height: 16 }
                    div {
                        class: "flex-1",
                        h2 { class: "text-base font-semibold", "Messages" }
                        p { class: "text-xs text-gray-500", "{subtitle}" }
                    }
                    button {
                        class: "chat-widget-close",
                        aria_label: "Close messages",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 16, height: 16 }
                    }
                }
                div {
                    class: "chat-widget-body",
                    if token.is_empty() {
                        p { class: "text-sm text-gray-600", "Sign in again to load your messages." }
                    } else {
                        p { class: "text-sm text-gray-600", "Loading conversations..." }
                    }
                }
            }
        }
    }
}
