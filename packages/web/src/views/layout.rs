use dioxus::prelude::*;

use store::NavTarget;
use ui::ConditionalHeader;

use crate::Route;

/// Shell shared by every page: the site header (hidden on the auth pages)
/// above the routed content.
#[component]
pub fn SiteLayout() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div {
            class: "min-h-screen flex flex-col",
            ConditionalHeader {
                path: route.to_string(),
                on_navigate: move |target: NavTarget| {
                    nav.push(Route::from(target));
                },
            }
            main {
                class: "flex-1 flex flex-col",
                Outlet::<Route> {}
            }
        }
    }
}
