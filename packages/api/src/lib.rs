//! # API crate: client for the LuckyLease REST API
//!
//! The marketplace backend is a separate service; this crate is the only place
//! the web client talks to it. Every call goes through [`ApiClient`], which is
//! cheap to clone and is shared with components through context.
//!
//! ## Endpoints used
//!
//! | Method | Path | Auth | Client method |
//! |--------|------|------|---------------|
//! | `GET` | `/api/listings/{id}` | none | [`ApiClient::fetch_listing`] |
//! | `GET` | `/api/messages/conversations` | bearer | [`ApiClient::fetch_conversations`], [`ApiClient::fetch_unread_count`] |
//!
//! Failures come back as [`ApiError`]. Non-2xx responses carry the server's
//! `{ "error": "..." }` message when the body has one.

mod client;
mod error;

pub use client::ApiClient;
pub use error::{listing_error_toast, ApiError};
pub use store::{ConversationSummary, Listing};
