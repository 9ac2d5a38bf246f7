pub mod config;
pub mod format;
pub mod kv;
pub mod models;
pub mod session;
pub mod state;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::ClientConfig;
pub use kv::{KeyValueStore, SharedStore, StorageError};
pub use models::{Amenity, ConversationSummary, Listing, ListingCounts, Owner};
pub use session::{read_session, clear_session, Session, UserProfile};
pub use state::{
    ChatTarget, ChatVisibility, ContactOutcome, Gallery, HeaderModel, HeaderState,
    ListingLoad, ListingPageModel, NavTarget, SessionStatus, like_message,
};
