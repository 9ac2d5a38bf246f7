use dioxus::prelude::*;

use store::NavTarget;
use ui::views::ListingDetailView;

use crate::Route;

#[component]
pub fn ListingDetail(listing: String) -> Element {
    let nav = use_navigator();

    rsx! {
        ListingDetailView {
            listing_id: listing,
            on_navigate: move |target: NavTarget| {
                nav.push(Route::from(target));
            },
        }
    }
}
