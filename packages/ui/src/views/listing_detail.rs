//! Listing detail page.
//!
//! Fetches the listing named by the route on mount and again whenever the
//! route id changes, reading the persisted session alongside. The page owns
//! its own chat, pinned to the listing's owner and the listing itself; it is
//! independent of the header's chat.

use api::{listing_error_toast, ApiClient};
use dioxus::prelude::*;
use store::format::{self, long_date, month_year};
use store::models::Amenity;
use store::session::read_session;
use store::{
    like_message, ContactOutcome, Gallery, Listing, ListingLoad, ListingPageModel, NavTarget,
    Owner, SharedStore,
};

use crate::icons::{
    FaArrowLeft, FaBath, FaBed, FaCalendarDays, FaCar, FaCircleCheck, FaGear, FaHeart,
    FaLocationDot, FaMessage, FaPaw, FaShieldHalved, FaSnowflake, FaUser,
};
use crate::{use_toast, ChatWidget, Icon, ToastOptions};

#[component]
pub fn ListingDetailView(listing_id: String, on_navigate: EventHandler<NavTarget>) -> Element {
    // Track the id in a signal so use_resource re-runs on route param change
    let mut id_signal = use_signal(|| listing_id.clone());
    if *id_signal.peek() != listing_id {
        id_signal.set(listing_id.clone());
    }

    let store = use_context::<SharedStore>();
    let api = use_context::<ApiClient>();
    let toasts = use_toast();
    let mut model = use_signal(|| ListingPageModel::new(listing_id.clone()));

    let _loader = use_resource(move || {
        let id = id_signal();
        let api = api.clone();
        let store = store.clone();
        async move {
            {
                let mut page = model.write();
                page.route_changed(&id);
                page.session_read(read_session(&*store));
            }
            match api.fetch_listing(&id).await {
                Ok(listing) => {
                    model.write().listing_loaded(&id, listing);
                }
                Err(e) => {
                    tracing::warn!("Error fetching listing {id}: {e}");
                    if model.write().listing_failed(&id) {
                        toasts.error(listing_error_toast(&e), ToastOptions::new());
                    }
                }
            }
        }
    });

    let page = model();
    let listing = match page.load() {
        ListingLoad::Loading => {
            return rsx! {
                div {
                    class: "min-h-screen flex items-center justify-center",
                    div {
                        class: "text-center",
                        div { class: "spinner mx-auto" }
                        p { class: "mt-4 text-gray-600", "Loading listing..." }
                    }
                }
            };
        }
        ListingLoad::NotFound => {
            return rsx! {
                div {
                    class: "min-h-screen flex items-center justify-center",
                    div {
                        class: "text-center",
                        h2 { class: "text-2xl font-bold text-gray-900 mb-2", "Listing not found" }
                        p { class: "text-gray-600 mb-6", "The listing you're looking for doesn't exist." }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| on_navigate.call(NavTarget::Browse),
                            "Back to Browse"
                        }
                    }
                }
            };
        }
        ListingLoad::Loaded(listing) => listing.as_ref().clone(),
    };

    let on_contact = move |_: MouseEvent| {
        let outcome = model.write().contact();
        match outcome {
            ContactOutcome::Opened(target) => {
                tracing::debug!(
                    "Opening chat for listing {} with user {}",
                    target.listing_id,
                    target.receiver_id
                );
            }
            ContactOutcome::LoginRequired => {
                toasts.error("Please log in to send messages".to_string(), ToastOptions::new());
                on_navigate.call(NavTarget::Login);
            }
            ContactOutcome::Ignored => {}
        }
    };

    let on_like = move |_: MouseEvent| {
        let liked = model.write().toggle_like();
        toasts.success(like_message(liked).to_string(), ToastOptions::new());
    };

    let chat = page.chat().target().cloned().zip(page.session().cloned());

    rsx! {
        div {
            class: "min-h-screen listing-page",
            div {
                class: "container mx-auto px-4 py-8",
                div {
                    class: "mb-6",
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| on_navigate.call(NavTarget::Browse),
                        Icon { icon: FaArrowLeft, width: 14, height: 14 }
                        " Back to Browse"
                    }
                }

                div {
                    class: "grid lg:grid-cols-3 gap-8",

                    // Main content
                    div {
                        class: "lg:col-span-2",
                        ListingGallery {
                            title: listing.title.clone(),
                            image_urls: listing.image_urls.clone(),
                            gallery: page.gallery(),
                            liked: page.liked(),
                            on_select: move |index: usize| {
                                model.write().select_image(index);
                            },
                            on_like: on_like,
                        }
                        ListingSummary { listing: listing.clone() }
                        ListingSections { listing: listing.clone() }
                    }

                    // Sidebar
                    div {
                        class: "lg:col-span-1",
                        PriceCard {
                            price: listing.price,
                            likes: listing.counts.likes,
                            contact_disabled: page.chat().is_open(),
                            on_contact: on_contact,
                        }
                        HostCard { owner: listing.user.clone() }
                    }
                }
            }

            if let Some((target, session)) = chat {
                ChatWidget {
                    is_open: true,
                    on_close: move |_| model.write().close_chat(),
                    current_user_id: session.user.id.clone(),
                    token: session.token.clone(),
                    initial_listing_id: target.listing_id.clone(),
                    initial_receiver_id: target.receiver_id.clone(),
                }
            }
        }
    }
}

/// Cover image, like button and thumbnail strip.
#[component]
fn ListingGallery(
    title: String,
    image_urls: Vec<String>,
    gallery: Gallery,
    liked: bool,
    on_select: EventHandler<usize>,
    on_like: EventHandler<MouseEvent>,
) -> Element {
    let cover = gallery.current().and_then(|i| image_urls.get(i)).cloned();
    let selected = gallery.selected();

    rsx! {
        div {
            class: "mb-8",
            div {
                class: "relative mb-4",
                if let Some(src) = cover {
                    img {
                        class: "w-full h-96 object-cover rounded-2xl",
                        src: "{src}",
                        alt: "{title}",
                    }
                } else {
                    div {
                        class: "w-full h-96 rounded-2xl bg-gray-100 flex items-center justify-center text-gray-500",
                        "No photos yet"
                    }
                }
                div {
                    class: "absolute top-4 right-4 flex gap-2",
                    button {
                        class: if liked { "icon-button icon-button--liked" } else { "icon-button" },
                        title: if liked { "Remove from favorites" } else { "Add to favorites" },
                        onclick: move |evt| on_like.call(evt),
                        Icon { icon: FaHeart, width: 16, height: 16 }
                    }
                }
            }

            if gallery.shows_thumbnails() {
                div {
                    class: "flex gap-2 overflow-x-auto",
                    for (index, url) in image_urls.iter().enumerate() {
                        button {
                            key: "{index}",
                            class: if index == selected { "thumbnail thumbnail--selected" } else { "thumbnail" },
                            onclick: move |_| on_select.call(index),
                            img {
                                class: "w-full h-full object-cover",
                                src: "{url}",
                                alt: "{title} {index + 1}",
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Title, location, dates and room counts.
#[component]
fn ListingSummary(listing: Listing) -> Element {
    let dates = format!("{} - {}", long_date(&listing.start_date), long_date(&listing.end_date));

    rsx! {
        div {
            class: "mb-8",
            h1 { class: "text-3xl font-bold text-gray-900 mb-4", "{listing.title}" }
            div {
                class: "flex flex-wrap items-center gap-6 text-gray-600 mb-4",
                div {
                    class: "flex items-center gap-2",
                    Icon { icon: FaLocationDot, width: 16, height: 16 }
                    span { "{listing.location}" }
                }
                div {
                    class: "flex items-center gap-2",
                    Icon { icon: FaCalendarDays, width: 16, height: 16 }
                    span { "{dates}" }
                }
            }
            div {
                class: "flex items-center gap-6 text-gray-600",
                div {
                    class: "flex items-center gap-2",
                    Icon { icon: FaBed, width: 16, height: 16 }
                    span { "{listing.bedrooms} bedroom" }
                }
                div {
                    class: "flex items-center gap-2",
                    Icon { icon: FaBath, width: 16, height: 16 }
                    span { "{listing.bathrooms} bathroom" }
                }
            }
        }
        div { class: "border-t mb-8" }
    }
}

/// Description, amenities and the optional lists.
#[component]
fn ListingSections(listing: Listing) -> Element {
    let amenities = listing.amenities();

    rsx! {
        div {
            class: "mb-8",
            h2 { class: "section-title", "About this place" }
            p { class: "text-gray-700 leading-relaxed whitespace-pre-line", "{listing.about_text()}" }
        }
        div { class: "border-t mb-8" }

        div {
            class: "mb-8",
            h2 { class: "section-title", "Amenities & Policies" }
            div {
                class: "grid grid-cols-1 gap-4",
                for amenity in amenities {
                    AmenityRow { key: "{amenity.title()}", amenity: amenity }
                }
            }
        }
        div { class: "border-t mb-8" }

        StringSection { title: "House rules", items: listing.rules().to_vec(), checked: true }
        StringSection { title: "Utilities included", items: listing.utilities().to_vec(), checked: true }
        StringSection { title: "What's nearby", items: listing.nearby_amenities().to_vec(), checked: false }
    }
}

#[component]
fn AmenityRow(amenity: Amenity) -> Element {
    let icon = match amenity {
        Amenity::PetsAllowed => rsx! { Icon { icon: FaPaw, width: 18, height: 18 } },
        Amenity::Laundry => rsx! { Icon { icon: FaGear, width: 18, height: 18 } },
        Amenity::Parking => rsx! { Icon { icon: FaCar, width: 18, height: 18 } },
        Amenity::AirConditioning => rsx! { Icon { icon: FaSnowflake, width: 18, height: 18 } },
    };

    rsx! {
        div {
            class: "amenity-row",
            span { class: "text-emerald-600", {icon} }
            div {
                div { class: "font-medium text-gray-900", "{amenity.title()}" }
                if let Some(detail) = amenity.detail() {
                    div { class: "text-sm text-gray-600", "{detail}" }
                }
            }
        }
    }
}

/// A titled list of strings; renders nothing when `items` is empty.
#[component]
fn StringSection(title: String, items: Vec<String>, checked: bool) -> Element {
    if items.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "mb-8",
            h2 { class: "section-title", "{title}" }
            div {
                class: if checked { "flex flex-col gap-2" } else { "grid grid-cols-2 gap-4" },
                for (index, item) in items.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "flex items-start gap-3",
                        if checked {
                            span { class: "text-emerald-600", Icon { icon: FaCircleCheck, width: 16, height: 16 } }
                        } else {
                            span { class: "text-gray-400", Icon { icon: FaLocationDot, width: 14, height: 14 } }
                        }
                        span { class: "text-gray-700", "{item}" }
                    }
                }
            }
        }
        div { class: "border-t mb-8" }
    }
}

/// Monthly price and the "Send Message" action.
#[component]
fn PriceCard(
    price: f64,
    likes: u32,
    contact_disabled: bool,
    on_contact: EventHandler<MouseEvent>,
) -> Element {
    let amount = format::price(price);

    rsx! {
        div {
            class: "card mb-6",
            div {
                class: "mb-4",
                span { class: "text-3xl font-bold text-emerald-600", "{amount}" }
                span { class: "text-gray-600 ml-1", "/month" }
            }
            button {
                class: "btn btn-primary w-full",
                disabled: contact_disabled,
                onclick: move |evt| on_contact.call(evt),
                Icon { icon: FaMessage, width: 14, height: 14 }
                " Send Message"
            }
            div {
                class: "text-center text-sm text-gray-500 mt-4",
                p { "No booking fees • Secure payment" }
                p {
                    class: "mt-1",
                    Icon { icon: FaHeart, width: 12, height: 12 }
                    if likes == 1 { " 1 person saved this" } else { " {likes} people saved this" }
                }
            }
        }
    }
}

/// Who posted the listing.
#[component]
fn HostCard(owner: Owner) -> Element {
    let since = month_year(&owner.member_since);

    rsx! {
        div {
            class: "card mb-6",
            div {
                class: "flex items-center gap-4 mb-4",
                div {
                    class: "host-avatar",
                    if let Some(ref avatar) = owner.avatar {
                        img { class: "w-16 h-16 rounded-full object-cover", src: "{avatar}", alt: "{owner.name}" }
                    } else {
                        Icon { icon: FaUser, width: 28, height: 28 }
                    }
                }
                div {
                    h3 { class: "font-semibold text-gray-900", "{owner.name}" }
                    div {
                        class: "flex items-center gap-2",
                        if owner.verified {
                            span {
                                class: "badge",
                                Icon { icon: FaShieldHalved, width: 10, height: 10 }
                                " Verified"
                            }
                        }
                        if !since.is_empty() {
                            span { class: "text-sm text-gray-600", "Member since {since}" }
                        }
                    }
                }
            }
            div {
                class: "text-sm text-gray-600 flex flex-col gap-1",
                if let Some(rate) = owner.response_rate {
                    p { "Response rate: {rate:.0}%" }
                }
                if let Some(ref time) = owner.response_time {
                    p { "Responds {time}" }
                }
            }
        }
    }
}
