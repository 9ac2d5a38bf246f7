//! # Persisted session
//!
//! The login flow (outside this client) leaves two entries in local storage:
//! [`TOKEN_KEY`] holds the bearer token and [`USER_KEY`] holds the user profile
//! as JSON. [`read_session`] turns those into a [`Session`] and is the only
//! place the header and the listing page learn who is signed in.
//!
//! A session is all or nothing. If the token is present but the profile does
//! not decode, both keys are purged so every later read agrees the visitor is
//! anonymous.

use serde::{Deserialize, Serialize};

use crate::kv::KeyValueStore;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-encoded user profile.
pub const USER_KEY: &str = "user";
/// Legacy profile key written by older builds of the login flow.
pub const LEGACY_USER_INFO_KEY: &str = "userInfo";

/// Cached profile of the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Locally persisted proof of authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

impl Session {
    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    /// Name to show in the header, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.user.name.is_empty() {
            &self.user.email
        } else {
            &self.user.name
        }
    }
}

/// Read the persisted session from `store`.
///
/// Returns `None` without touching storage when either key is missing or
/// empty. Returns `None` and deletes both keys when the profile is corrupt.
pub fn read_session<S: KeyValueStore + ?Sized>(store: &S) -> Option<Session> {
    let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
    let raw_user = store.get(USER_KEY).filter(|u| !u.is_empty())?;

    match serde_json::from_str::<UserProfile>(&raw_user) {
        Ok(user) => Some(Session { token, user }),
        Err(e) => {
            tracing::warn!("Discarding corrupt session profile: {e}");
            purge(store, &[TOKEN_KEY, USER_KEY]);
            None
        }
    }
}

/// Remove every session key, including the legacy profile key.
pub fn clear_session<S: KeyValueStore + ?Sized>(store: &S) {
    purge(store, &[TOKEN_KEY, USER_KEY, LEGACY_USER_INFO_KEY]);
}

fn purge<S: KeyValueStore + ?Sized>(store: &S, keys: &[&str]) {
    for key in keys {
        if let Err(e) = store.delete(key) {
            tracing::warn!("Failed to remove '{key}' from storage: {e}");
        }
    }
}
