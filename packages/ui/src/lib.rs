//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod storage;
pub use storage::make_store;

pub mod views;

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod provider;
pub use provider::ClientProvider;

// Toasts come from the primitives crate; `ClientProvider` installs the host
pub use dioxus_primitives::toast::{use_toast, ToastOptions};

mod header;
pub use header::{is_auth_path, ConditionalHeader, Header};

mod chat;
pub use chat::ChatWidget;
