mod layout;
pub use layout::SiteLayout;

mod listing;
pub use listing::ListingDetail;

mod pages;
pub use pages::{Browse, CreateListing, Dashboard, Home, Login, Map, NotFound, Signup};
