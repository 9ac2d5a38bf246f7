//! # UI state machines
//!
//! Renderer-independent state for the two session-aware units of the client.
//! Components keep one of these models in a signal and forward user events to
//! its methods; the methods enforce the transitions, so the components stay
//! thin and the rules are testable without a DOM.
//!
//! | Model | Owns |
//! |-------|------|
//! | [`HeaderModel`] | `Loading → Anonymous / Authenticated`, unread count, untargeted chat flag, mobile menu. |
//! | [`ListingPageModel`] | `Loading → Loaded / NotFound`, session snapshot, targeted chat flag, gallery, like flag. |
//!
//! The two chat flags are deliberately separate instances of
//! [`ChatVisibility`]: the header and the listing page do not coordinate, so
//! opening one never closes the other.

use crate::kv::KeyValueStore;
use crate::models::Listing;
use crate::session::{clear_session, Session};

/// Places a session-aware unit can send the visitor to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Browse,
    Map,
    CreateListing,
    Dashboard,
    Login,
    Signup,
}

/// Peer and listing a targeted chat is opened for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatTarget {
    pub receiver_id: String,
    pub listing_id: String,
}

/// Whether a host's chat widget is open, and for whom.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatVisibility {
    open: bool,
    target: Option<ChatTarget>,
}

impl ChatVisibility {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Target of the open chat; `None` when closed or untargeted.
    pub fn target(&self) -> Option<&ChatTarget> {
        self.target.as_ref().filter(|_| self.open)
    }

    /// Open without a pre-selected peer. Returns `false` if already open.
    pub fn open_untargeted(&mut self) -> bool {
        self.open_with(None)
    }

    /// Open for `target`. While open the target is fixed; a second call is a
    /// no-op and returns `false`.
    pub fn open_targeted(&mut self, target: ChatTarget) -> bool {
        self.open_with(Some(target))
    }

    fn open_with(&mut self, target: Option<ChatTarget>) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        self.target = target;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
        self.target = None;
    }
}

/// Authentication state of the header.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum HeaderState {
    #[default]
    Loading,
    Anonymous,
    Authenticated(Session),
}

/// State of the site header.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeaderModel {
    state: HeaderState,
    unread: u32,
    chat: ChatVisibility,
    mobile_menu_open: bool,
}

impl HeaderModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &HeaderState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, HeaderState::Loading)
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            HeaderState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn unread(&self) -> u32 {
        self.unread
    }

    pub fn chat(&self) -> &ChatVisibility {
        &self.chat
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Leave `Loading` with the result of the session read.
    ///
    /// Returns the token the unread count should be fetched with, if any. Only
    /// the first hydration counts; later calls are ignored and return `None`.
    pub fn hydrate(&mut self, session: Option<Session>) -> Option<String> {
        if !self.is_loading() {
            return None;
        }
        match session {
            Some(session) => {
                let token = session.token.clone();
                self.state = HeaderState::Authenticated(session);
                Some(token)
            }
            None => {
                self.state = HeaderState::Anonymous;
                None
            }
        }
    }

    /// Store a fetched unread count. Dropped unless still authenticated with
    /// `token`, so a response landing after logout cannot revive the badge.
    pub fn apply_unread(&mut self, token: &str, count: u32) -> bool {
        match &self.state {
            HeaderState::Authenticated(session) if session.token == token => {
                self.unread = count;
                true
            }
            _ => false,
        }
    }

    /// Apply the outcome of an unread fetch. A failure is logged and leaves the
    /// badge at its previous value.
    pub fn unread_fetched<E: std::fmt::Display>(
        &mut self,
        token: &str,
        result: Result<u32, E>,
    ) -> bool {
        match result {
            Ok(count) => self.apply_unread(token, count),
            Err(e) => {
                tracing::warn!("Error fetching unread count: {e}");
                false
            }
        }
    }

    /// Open the untargeted chat. Refused unless authenticated.
    pub fn open_chat(&mut self) -> bool {
        if self.session().is_none() {
            return false;
        }
        self.chat.open_untargeted()
    }

    /// Mobile-menu "Messages" entry: open the chat and collapse the menu.
    pub fn open_chat_from_menu(&mut self) -> bool {
        let opened = self.open_chat();
        self.mobile_menu_open = false;
        opened
    }

    pub fn close_chat(&mut self) {
        self.chat.close();
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Record a navigation action; collapses the mobile menu.
    pub fn navigate(&mut self, target: NavTarget) -> NavTarget {
        self.mobile_menu_open = false;
        target
    }

    /// Clear the persisted session and every piece of derived state.
    /// Returns where the visitor should be sent.
    pub fn logout<S: KeyValueStore + ?Sized>(&mut self, store: &S) -> NavTarget {
        clear_session(store);
        self.state = HeaderState::Anonymous;
        self.unread = 0;
        self.chat.close();
        self.mobile_menu_open = false;
        NavTarget::Home
    }
}

/// Selected image of a listing gallery. The index is always valid for the
/// image list it was built for, or 0 when the list is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gallery {
    len: usize,
    selected: usize,
}

impl Gallery {
    pub fn new(len: usize) -> Self {
        Self { len, selected: 0 }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Index of the image to show large, or `None` when there are no images.
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.selected)
    }

    pub fn shows_thumbnails(&self) -> bool {
        self.len > 1
    }

    /// Select image `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.selected = index;
            true
        } else {
            false
        }
    }
}

/// Load state of the listing on the detail page.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ListingLoad {
    #[default]
    Loading,
    Loaded(Box<Listing>),
    NotFound,
}

/// What the listing page knows about the visitor.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionStatus {
    #[default]
    Loading,
    Known(Option<Session>),
}

/// Result of pressing "Send Message" on a listing.
#[derive(Clone, Debug, PartialEq)]
pub enum ContactOutcome {
    /// The chat opened for this owner and listing.
    Opened(ChatTarget),
    /// Nobody is signed in; prompt and send the visitor to the login page.
    LoginRequired,
    /// Nothing to do: listing or session not ready, chat already open, or a
    /// login redirect is already underway.
    Ignored,
}

/// State of the listing detail page.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingPageModel {
    listing_id: String,
    load: ListingLoad,
    session: SessionStatus,
    chat: ChatVisibility,
    gallery: Gallery,
    liked: bool,
    redirecting: bool,
}

impl ListingPageModel {
    pub fn new(listing_id: impl Into<String>) -> Self {
        Self {
            listing_id: listing_id.into(),
            load: ListingLoad::Loading,
            session: SessionStatus::Loading,
            chat: ChatVisibility::default(),
            gallery: Gallery::default(),
            liked: false,
            redirecting: false,
        }
    }

    pub fn listing_id(&self) -> &str {
        &self.listing_id
    }

    pub fn load(&self) -> &ListingLoad {
        &self.load
    }

    pub fn listing(&self) -> Option<&Listing> {
        match &self.load {
            ListingLoad::Loaded(listing) => Some(listing.as_ref()),
            _ => None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.session {
            SessionStatus::Known(session) => session.as_ref(),
            SessionStatus::Loading => None,
        }
    }

    pub fn chat(&self) -> &ChatVisibility {
        &self.chat
    }

    pub fn gallery(&self) -> Gallery {
        self.gallery
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    /// URL of the image currently shown large.
    pub fn current_image(&self) -> Option<&str> {
        let listing = self.listing()?;
        let index = self.gallery.current()?;
        listing.image_urls.get(index).map(String::as_str)
    }

    /// Start over for a different listing id. Returns `false` if the id is
    /// unchanged.
    pub fn route_changed(&mut self, listing_id: &str) -> bool {
        if self.listing_id == listing_id {
            return false;
        }
        *self = Self {
            session: std::mem::take(&mut self.session),
            ..Self::new(listing_id)
        };
        true
    }

    pub fn session_read(&mut self, session: Option<Session>) {
        self.session = SessionStatus::Known(session);
    }

    /// Apply a fetch result. Results for an id the page has moved away from are
    /// dropped and `false` is returned. An empty payload means not found.
    pub fn listing_loaded(&mut self, requested_id: &str, listing: Option<Listing>) -> bool {
        if requested_id != self.listing_id {
            return false;
        }
        self.load = match listing {
            Some(listing) => {
                self.gallery = Gallery::new(listing.image_urls.len());
                ListingLoad::Loaded(Box::new(listing))
            }
            None => ListingLoad::NotFound,
        };
        true
    }

    /// Record a failed fetch; same staleness rule as [`Self::listing_loaded`].
    pub fn listing_failed(&mut self, requested_id: &str) -> bool {
        self.listing_loaded(requested_id, None)
    }

    /// Handle the "Send Message" action.
    pub fn contact(&mut self) -> ContactOutcome {
        let Some(listing) = self.listing() else {
            return ContactOutcome::Ignored;
        };
        if self.redirecting || self.chat.is_open() {
            return ContactOutcome::Ignored;
        }
        let target = ChatTarget {
            receiver_id: listing.user.id.clone(),
            listing_id: listing.id.clone(),
        };
        match &self.session {
            SessionStatus::Loading => ContactOutcome::Ignored,
            SessionStatus::Known(None) => {
                self.redirecting = true;
                ContactOutcome::LoginRequired
            }
            SessionStatus::Known(Some(_)) => {
                self.chat.open_targeted(target.clone());
                ContactOutcome::Opened(target)
            }
        }
    }

    pub fn close_chat(&mut self) {
        self.chat.close();
    }

    /// Flip the local like flag and return its new value. Not persisted, and
    /// the listing's server like count is left untouched.
    pub fn toggle_like(&mut self) -> bool {
        self.liked = !self.liked;
        self.liked
    }

    pub fn select_image(&mut self, index: usize) -> bool {
        self.gallery.select(index)
    }
}

/// Toast text after the like flag changed to `liked`.
pub fn like_message(liked: bool) -> &'static str {
    if liked {
        "Added to favorites"
    } else {
        "Removed from favorites"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{read_session, UserProfile, LEGACY_USER_INFO_KEY, TOKEN_KEY, USER_KEY};
    use crate::MemoryStore;

    fn session(token: &str) -> Session {
        Session {
            token: token.to_string(),
            user: UserProfile {
                id: "u1".into(),
                name: "Jo".into(),
                email: "jo@x.com".into(),
            },
        }
    }

    fn listing(id: &str, owner: &str, images: &[&str]) -> Listing {
        let json = serde_json::json!({
            "id": id,
            "title": "Room",
            "price": 800,
            "startDate": "2025-06-01",
            "endDate": "2025-08-31",
            "imageUrls": images,
            "user": { "id": owner, "name": "Owner" },
            "_count": { "likes": 4 }
        });
        serde_json::from_value(json).unwrap()
    }

    // Header

    #[test]
    fn test_header_starts_loading() {
        let header = HeaderModel::new();
        assert!(header.is_loading());
        assert_eq!(header.unread(), 0);
        assert!(!header.chat().is_open());
    }

    #[test]
    fn test_hydrate_authenticated_requests_unread() {
        let mut header = HeaderModel::new();
        assert_eq!(header.hydrate(Some(session("abc"))).as_deref(), Some("abc"));
        assert_eq!(header.session().unwrap().user_id(), "u1");
    }

    #[test]
    fn test_hydrate_anonymous() {
        let mut header = HeaderModel::new();
        assert!(header.hydrate(None).is_none());
        assert_eq!(header.state(), &HeaderState::Anonymous);
    }

    #[test]
    fn test_hydrate_only_once() {
        let mut header = HeaderModel::new();
        header.hydrate(None);
        assert!(header.hydrate(Some(session("abc"))).is_none());
        assert_eq!(header.state(), &HeaderState::Anonymous);
    }

    #[test]
    fn test_unread_applies_only_to_current_session() {
        let mut header = HeaderModel::new();
        header.hydrate(Some(session("abc")));
        assert!(header.apply_unread("abc", 3));
        assert_eq!(header.unread(), 3);
        assert!(!header.apply_unread("other", 9));
        assert_eq!(header.unread(), 3);
    }

    #[test]
    fn test_failed_unread_fetch_keeps_previous_count() {
        let mut header = HeaderModel::new();
        header.hydrate(Some(session("abc")));
        assert!(header.unread_fetched::<String>("abc", Ok(3)));
        assert!(!header.unread_fetched("abc", Err("HTTP 401: Unauthorized")));
        assert_eq!(header.unread(), 3);
        assert_eq!(header.session().map(|s| s.token.as_str()), Some("abc"));
    }

    #[test]
    fn test_failed_first_unread_fetch_leaves_zero() {
        let mut header = HeaderModel::new();
        header.hydrate(Some(session("abc")));
        assert!(!header.unread_fetched("abc", Err("network error")));
        assert_eq!(header.unread(), 0);
    }

    #[test]
    fn test_anonymous_cannot_open_chat() {
        let mut header = HeaderModel::new();
        header.hydrate(None);
        assert!(!header.open_chat());
        assert!(!header.chat().is_open());
    }

    #[test]
    fn test_authenticated_chat_is_untargeted() {
        let mut header = HeaderModel::new();
        header.hydrate(Some(session("abc")));
        assert!(header.open_chat());
        assert!(header.chat().is_open());
        assert!(header.chat().target().is_none());
        assert!(!header.open_chat());
        header.close_chat();
        assert!(!header.chat().is_open());
    }

    #[test]
    fn test_mobile_menu_closes_on_navigation() {
        let mut header = HeaderModel::new();
        header.toggle_mobile_menu();
        assert!(header.mobile_menu_open());
        assert_eq!(header.navigate(NavTarget::Browse), NavTarget::Browse);
        assert!(!header.mobile_menu_open());
    }

    #[test]
    fn test_messages_from_mobile_menu() {
        let mut header = HeaderModel::new();
        header.hydrate(Some(session("abc")));
        header.toggle_mobile_menu();
        assert!(header.open_chat_from_menu());
        assert!(header.chat().is_open());
        assert!(!header.mobile_menu_open());
    }

    #[test]
    fn test_logout_clears_everything() {
        let store = MemoryStore::with_entries([
            (TOKEN_KEY, "abc"),
            (USER_KEY, r#"{"id":"u1","name":"Jo","email":"jo@x.com"}"#),
            (LEGACY_USER_INFO_KEY, "{}"),
        ]);
        let mut header = HeaderModel::new();
        header.hydrate(read_session(&store));
        header.apply_unread("abc", 5);
        header.open_chat();
        header.toggle_mobile_menu();

        assert_eq!(header.logout(&store), NavTarget::Home);

        assert_eq!(header.state(), &HeaderState::Anonymous);
        assert_eq!(header.unread(), 0);
        assert!(!header.chat().is_open());
        assert!(!header.mobile_menu_open());
        assert!(store.is_empty());
        // A late unread response for the old token is dropped.
        assert!(!header.apply_unread("abc", 5));
        assert_eq!(header.unread(), 0);
    }

    // Listing page

    #[test]
    fn test_listing_loaded() {
        let mut page = ListingPageModel::new("l1");
        assert_eq!(page.load(), &ListingLoad::Loading);
        assert!(page.listing_loaded("l1", Some(listing("l1", "u2", &["a", "b"]))));
        assert_eq!(page.listing().unwrap().id, "l1");
        assert_eq!(page.current_image(), Some("a"));
        assert!(page.gallery().shows_thumbnails());
    }

    #[test]
    fn test_failed_fetch_is_not_found() {
        let mut page = ListingPageModel::new("l1");
        assert!(page.listing_failed("l1"));
        assert_eq!(page.load(), &ListingLoad::NotFound);
        assert_eq!(page.contact(), ContactOutcome::Ignored);
    }

    #[test]
    fn test_empty_payload_is_not_found() {
        let mut page = ListingPageModel::new("l1");
        page.listing_loaded("l1", None);
        assert_eq!(page.load(), &ListingLoad::NotFound);
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut page = ListingPageModel::new("l1");
        assert!(page.route_changed("l2"));
        assert!(!page.listing_loaded("l1", Some(listing("l1", "u2", &[]))));
        assert_eq!(page.load(), &ListingLoad::Loading);
        assert_eq!(page.listing_id(), "l2");
    }

    #[test]
    fn test_route_change_resets_page_but_keeps_session() {
        let mut page = ListingPageModel::new("l1");
        page.session_read(Some(session("abc")));
        page.listing_loaded("l1", Some(listing("l1", "u2", &["a", "b", "c"])));
        page.select_image(2);
        page.toggle_like();
        page.contact();

        assert!(!page.route_changed("l1"));
        assert!(page.route_changed("l2"));

        assert_eq!(page.load(), &ListingLoad::Loading);
        assert_eq!(page.gallery().selected(), 0);
        assert!(!page.liked());
        assert!(!page.chat().is_open());
        assert!(page.session().is_some());
    }

    #[test]
    fn test_anonymous_contact_requires_login() {
        let mut page = ListingPageModel::new("l1");
        page.session_read(None);
        page.listing_loaded("l1", Some(listing("l1", "u2", &[])));

        assert_eq!(page.contact(), ContactOutcome::LoginRequired);
        assert!(!page.chat().is_open());
        // A second click while the redirect is underway does nothing.
        assert_eq!(page.contact(), ContactOutcome::Ignored);
    }

    #[test]
    fn test_authenticated_contact_opens_targeted_chat() {
        let mut page = ListingPageModel::new("l1");
        page.session_read(Some(session("abc")));
        page.listing_loaded("l1", Some(listing("l1", "u2", &[])));

        let expected = ChatTarget {
            receiver_id: "u2".into(),
            listing_id: "l1".into(),
        };
        assert_eq!(page.contact(), ContactOutcome::Opened(expected.clone()));
        assert_eq!(page.chat().target(), Some(&expected));
        // Double click does not reopen.
        assert_eq!(page.contact(), ContactOutcome::Ignored);

        page.close_chat();
        assert!(page.chat().target().is_none());
        assert_eq!(page.contact(), ContactOutcome::Opened(expected));
    }

    #[test]
    fn test_contact_waits_for_session_read() {
        let mut page = ListingPageModel::new("l1");
        page.listing_loaded("l1", Some(listing("l1", "u2", &[])));
        assert_eq!(page.contact(), ContactOutcome::Ignored);
    }

    #[test]
    fn test_header_and_page_chats_are_independent() {
        let mut header = HeaderModel::new();
        header.hydrate(Some(session("abc")));
        let mut page = ListingPageModel::new("l1");
        page.session_read(Some(session("abc")));
        page.listing_loaded("l1", Some(listing("l1", "u2", &[])));

        header.open_chat();
        page.contact();
        assert!(header.chat().is_open());
        assert!(page.chat().is_open());

        page.close_chat();
        assert!(header.chat().is_open());
    }

    #[test]
    fn test_like_is_local_only() {
        let mut page = ListingPageModel::new("l1");
        page.listing_loaded("l1", Some(listing("l1", "u2", &[])));
        assert!(page.toggle_like());
        assert_eq!(like_message(page.liked()), "Added to favorites");
        assert_eq!(page.listing().unwrap().counts.likes, 4);
        assert!(!page.toggle_like());
        assert_eq!(like_message(page.liked()), "Removed from favorites");
    }

    #[test]
    fn test_empty_gallery() {
        let mut page = ListingPageModel::new("l1");
        page.listing_loaded("l1", Some(listing("l1", "u2", &[])));
        assert_eq!(page.gallery().selected(), 0);
        assert!(!page.gallery().shows_thumbnails());
        assert_eq!(page.current_image(), None);
        assert!(!page.select_image(0));
        assert_eq!(page.gallery().selected(), 0);
    }

    #[test]
    fn test_gallery_ignores_out_of_range() {
        let mut gallery = Gallery::new(2);
        assert!(gallery.select(1));
        assert!(!gallery.select(2));
        assert_eq!(gallery.selected(), 1);
        assert!(!Gallery::new(1).shows_thumbnails());
    }
}
