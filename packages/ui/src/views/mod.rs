mod placeholder;
pub use placeholder::PagePlaceholder;

mod listing_detail;
pub use listing_detail::ListingDetailView;
