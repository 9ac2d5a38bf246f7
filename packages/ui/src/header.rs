//! Site header: navigation, identity badge, unread badge and the global chat.
//!
//! The header reads the persisted session once on mount. A signed-in visitor
//! gets the messages button with an unread badge (fetched once, not polled),
//! a dashboard badge with their name and a logout button; anonymous visitors
//! get Sign In / Sign Up. The chat opened from here has no pre-selected peer.

use api::ApiClient;
use dioxus::prelude::*;
use store::format::unread_badge;
use store::session::read_session;
use store::{HeaderModel, NavTarget, SharedStore};

use crate::icons::{
    FaBars, FaClover, FaMap, FaMessage, FaPlus, FaRightFromBracket, FaTableCellsLarge, FaUser,
    FaXmark,
};
use crate::{use_toast, ChatWidget, Icon, ToastOptions};

/// Whether `path` belongs to the login/signup flow, where no header is shown.
pub fn is_auth_path(path: &str) -> bool {
    path == "/auth" || path.starts_with("/auth/")
}

/// [`Header`] on every route except the `/auth` pages.
#[component]
pub fn ConditionalHeader(path: String, on_navigate: EventHandler<NavTarget>) -> Element {
    if is_auth_path(&path) {
        return rsx! {};
    }
    rsx! {
        Header { on_navigate: on_navigate }
    }
}

#[component]
pub fn Header(on_navigate: EventHandler<NavTarget>) -> Element {
    let store = use_context::<SharedStore>();
    let api = use_context::<ApiClient>();
    let toasts = use_toast();
    let mut model = use_signal(HeaderModel::new);

    // Read the session on mount; fetch the unread count in the background
    let mount_store = store.clone();
    use_effect(move || {
        let session = read_session(&*mount_store);
        let Some(token) = model.write().hydrate(session) else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            let result = api.fetch_unread_count(&token).await;
            model.write().unread_fetched(&token, result);
        });
    });

    let go = use_callback(move |target: NavTarget| {
        let target = model.write().navigate(target);
        on_navigate.call(target);
    });

    let logout = use_callback(move |_: ()| {
        let target = model.write().logout(&*store);
        tracing::info!("Logged out");
        toasts.success("Logged out successfully!".to_string(), ToastOptions::new());
        on_navigate.call(target);
    });

    let header = model();
    let session = header.session().cloned();
    let badge = unread_badge(header.unread());
    let menu_open = header.mobile_menu_open();
    let chat_open = header.chat().is_open();
    let display_name = session.as_ref().map(|s| s.display_name().to_string());

    let user_actions = match (header.is_loading(), &display_name) {
        (true, _) => rsx! {
            div { class: "avatar-placeholder animate-pulse" }
        },
        (false, Some(name)) => rsx! {
            button {
                class: "message-button relative",
                title: "Messages",
                onclick: move |_| {
                    if model.write().open_chat() {
                        tracing::debug!("Opening chat from header");
                    }
                },
                Icon { icon: FaMessage, width: 22, height: 22 }
                if let Some(ref badge) = badge {
                    span { class: "unread-badge", "{badge}" }
                }
            }
            button {
                class: "identity-badge",
                onclick: move |_| go.call(NavTarget::Dashboard),
                Icon { icon: FaUser, width: 14, height: 14 }
                span { class: "text-sm font-medium", "{name}" }
            }
            button {
                class: "btn btn-ghost",
                onclick: move |_| logout.call(()),
                Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                " Logout"
            }
        },
        (false, None) => rsx! {
            button {
                class: "btn btn-ghost",
                onclick: move |_| go.call(NavTarget::Login),
                "Sign In"
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| go.call(NavTarget::Signup),
                "Sign Up"
            }
        },
    };

    rsx! {
        header {
            class: "site-header border-b bg-white/80 sticky top-0",
            style: "z-index: 50",
            div {
                class: "container mx-auto px-4 py-4",
                div {
                    class: "flex items-center justify-between",

                    // Logo
                    button {
                        class: "flex items-center gap-2",
                        onclick: move |_| go.call(NavTarget::Home),
                        div {
                            class: "brand-mark",
                            Icon { icon: FaClover, width: 22, height: 22 }
                        }
                        div {
                            class: "hidden sm:block text-left",
                            h1 { class: "text-xl font-bold text-emerald-800", "LuckyLease" }
                            p { class: "text-xs text-emerald-600", "Find your lucky sublease" }
                        }
                    }

                    // Mobile menu toggle
                    button {
                        class: "md:hidden p-2 rounded-lg",
                        aria_label: "Toggle mobile menu",
                        onclick: move |_| model.write().toggle_mobile_menu(),
                        if menu_open {
                            Icon { icon: FaXmark, width: 20, height: 20 }
                        } else {
                            Icon { icon: FaBars, width: 20, height: 20 }
                        }
                    }

                    // Desktop navigation
                    nav {
                        class: "hidden md:flex items-center gap-6",
                        button {
                            class: "nav-link",
                            onclick: move |_| go.call(NavTarget::Browse),
                            Icon { icon: FaTableCellsLarge, width: 14, height: 14 }
                            " Browse"
                        }
                        button {
                            class: "nav-link",
                            onclick: move |_| go.call(NavTarget::Map),
                            Icon { icon: FaMap, width: 14, height: 14 }
                            " Map"
                        }
                        if display_name.is_some() {
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| go.call(NavTarget::CreateListing),
                                Icon { icon: FaPlus, width: 14, height: 14 }
                                " List Your Space"
                            }
                        }
                    }

                    div {
                        class: "hidden md:flex items-center gap-3",
                        {user_actions}
                    }
                }

                if menu_open {
                    MobileMenu {
                        display_name: display_name.clone(),
                        badge: badge.clone(),
                        on_navigate: go,
                        on_messages: move |_| {
                            if model.write().open_chat_from_menu() {
                                tracing::debug!("Opening chat from mobile menu");
                            }
                        },
                        on_logout: logout,
                    }
                }
            }
        }

        // Chat controlled from the header
        if let Some(session) = session {
            ChatWidget {
                is_open: chat_open,
                on_close: move |_| model.write().close_chat(),
                current_user_id: session.user.id.clone(),
                token: session.token.clone(),
            }
        }
    }
}

/// Dropdown shown under the header on small screens.
#[component]
fn MobileMenu(
    /// Name of the signed-in user; `None` for anonymous visitors.
    display_name: Option<String>,
    badge: Option<String>,
    on_navigate: EventHandler<NavTarget>,
    on_messages: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "md:hidden mt-4 pb-4 border-t",
            nav {
                class: "flex flex-col gap-4 pt-4",
                button {
                    class: "mobile-link",
                    onclick: move |_| on_navigate.call(NavTarget::Browse),
                    Icon { icon: FaTableCellsLarge, width: 14, height: 14 }
                    " Browse Listings"
                }
                button {
                    class: "mobile-link",
                    onclick: move |_| on_navigate.call(NavTarget::Map),
                    Icon { icon: FaMap, width: 14, height: 14 }
                    " Map View"
                }

                if let Some(ref name) = display_name {
                    button {
                        class: "mobile-link text-emerald-600",
                        onclick: move |_| on_navigate.call(NavTarget::CreateListing),
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        " List Your Space"
                    }
                    button {
                        class: "mobile-link relative",
                        onclick: move |_| on_messages.call(()),
                        Icon { icon: FaMessage, width: 14, height: 14 }
                        " Messages"
                        if let Some(ref badge) = badge {
                            span { class: "unread-badge unread-badge--inline", "{badge}" }
                        }
                    }
                    button {
                        class: "mobile-link",
                        onclick: move |_| on_navigate.call(NavTarget::Dashboard),
                        Icon { icon: FaUser, width: 14, height: 14 }
                        " Dashboard ({name})"
                    }
                }

                div {
                    class: "border-t pt-4 flex flex-col gap-2",
                    if display_name.is_none() {
                        button {
                            class: "mobile-link justify-center text-emerald-600",
                            onclick: move |_| on_navigate.call(NavTarget::Login),
                            "Sign In"
                        }
                        button {
                            class: "btn btn-primary w-full",
                            onclick: move |_| on_navigate.call(NavTarget::Signup),
                            "Sign Up"
                        }
                    } else {
                        button {
                            class: "mobile-link justify-center text-red-600",
                            onclick: move |_| on_logout.call(()),
                            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                            " Logout"
                        }
                    }
                }
            }
        }
    }
}
