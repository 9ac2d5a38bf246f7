//! Client-wide context: storage, API client and toasts.

use api::ApiClient;
use dioxus::prelude::*;
use dioxus_primitives::toast::ToastProvider;
use store::{ClientConfig, SharedStore};

use crate::{make_store, UI_CSS};

/// Wrap the app with this component. It provides the [`SharedStore`] the
/// session is read from and the [`ApiClient`], and mounts the toast provider
/// that [`crate::use_toast`] talks to.
#[component]
pub fn ClientProvider(config: ClientConfig, children: Element) -> Element {
    use_context_provider(|| -> SharedStore { make_store() });
    use_context_provider(|| ApiClient::from_config(&config));

    rsx! {
        document::Stylesheet { href: UI_CSS }
        ToastProvider {
            {children}
        }
    }
}
