//! Shared storage constructor for all platforms.
//!
//! Returns a [`store::SharedStore`] backed by:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Anything else**: an empty [`store::MemoryStore`], so every visitor is anonymous

use std::rc::Rc;

use store::SharedStore;

/// Create the platform-appropriate session storage.
pub fn make_store() -> SharedStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Rc::new(store::LocalStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Rc::new(store::MemoryStore::new())
    }
}
