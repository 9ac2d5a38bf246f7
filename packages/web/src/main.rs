use dioxus::prelude::*;

use store::{ClientConfig, NavTarget};
use ui::ClientProvider;
use views::{
    Browse, CreateListing, Dashboard, Home, ListingDetail, Login, Map, NotFound, Signup,
    SiteLayout,
};

mod logging;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/listings/browse")]
        Browse {},
        #[route("/listings/browse/:listing")]
        ListingDetail { listing: String },
        #[route("/listings/create")]
        CreateListing {},
        #[route("/map")]
        Map {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/auth/login")]
        Login {},
        #[route("/auth/signup")]
        Signup {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Home => Route::Home {},
            NavTarget::Browse => Route::Browse {},
            NavTarget::Map => Route::Map {},
            NavTarget::CreateListing => Route::CreateListing {},
            NavTarget::Dashboard => Route::Dashboard {},
            NavTarget::Login => Route::Login {},
            NavTarget::Signup => Route::Signup {},
        }
    }
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let config = ClientConfig::from_env();
    logging::init(&config.log.level);
    tracing::debug!("API base URL: {}", config.api.base_url);

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(ClientConfig::from_env);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ClientProvider {
            config: config,
            Router::<Route> {}
        }
    }
}
