//! Pages served by other parts of the product. They exist so the header and
//! listing page have somewhere to navigate to.

use dioxus::prelude::*;
use ui::views::PagePlaceholder;

#[component]
pub fn Home() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Find your next sublease",
            message: "Browse student subleases near campus, or list your own space.",
        }
    }
}

#[component]
pub fn Browse() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Browse listings",
            message: "Search and filters are coming soon.",
        }
    }
}

#[component]
pub fn Map() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Map",
            message: "The map view is coming soon.",
        }
    }
}

#[component]
pub fn CreateListing() -> Element {
    rsx! {
        PagePlaceholder {
            title: "List your space",
            message: "Listing creation is coming soon.",
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Dashboard",
            message: "Your listings and favorites will show up here.",
        }
    }
}

#[component]
pub fn Login() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Sign in",
            message: "Sign in to message hosts and manage your listings.",
        }
    }
}

#[component]
pub fn Signup() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Create an account",
            message: "Join LuckyLease to find or post a sublease.",
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        PagePlaceholder {
            title: "Page not found",
            message: "Nothing lives at /{path}.",
        }
    }
}
