//! # Domain models for listings and conversations
//!
//! Wire types returned by the marketplace REST API. Field names follow the
//! API's camelCase JSON; optional or variable-length fields default so that a
//! sparse record still decodes.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Listing`] | One sublease listing: pricing, dates, images, amenities and its [`Owner`]. |
//! | [`Owner`] | The user who posted the listing, with verification and responsiveness stats. |
//! | [`ConversationSummary`] | One entry of the user's inbox; only `unreadCount` is consumed. |
//!
//! [`total_unread`] reduces an inbox to the header's unread badge value.

use serde::{Deserialize, Serialize};

/// A sublease listing as served by `GET /api/listings/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub detailed_description: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub bedrooms: String,
    #[serde(default)]
    pub bathrooms: String,
    /// Monthly rent.
    pub price: f64,
    pub start_date: String,
    pub end_date: String,
    /// Display order; the first entry is the cover image.
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub pets_allowed: bool,
    #[serde(default)]
    pub laundry_in_building: bool,
    #[serde(default)]
    pub parking_available: bool,
    #[serde(default)]
    pub air_conditioning: bool,
    #[serde(default)]
    pub rules: Option<Vec<String>>,
    #[serde(default)]
    pub utilities: Option<Vec<String>>,
    #[serde(default)]
    pub nearby_amenities: Option<Vec<String>>,
    pub user: Owner,
    #[serde(rename = "_count", default)]
    pub counts: ListingCounts,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Listing {
    /// Body text for the "About this place" section.
    pub fn about_text(&self) -> &str {
        match self.detailed_description.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => &self.description,
        }
    }

    pub fn rules(&self) -> &[String] {
        self.rules.as_deref().unwrap_or_default()
    }

    pub fn utilities(&self) -> &[String] {
        self.utilities.as_deref().unwrap_or_default()
    }

    pub fn nearby_amenities(&self) -> &[String] {
        self.nearby_amenities.as_deref().unwrap_or_default()
    }

    /// Labels of the amenity flags that are set, in display order.
    pub fn amenities(&self) -> Vec<Amenity> {
        [
            (self.pets_allowed, Amenity::PetsAllowed),
            (self.laundry_in_building, Amenity::Laundry),
            (self.parking_available, Amenity::Parking),
            (self.air_conditioning, Amenity::AirConditioning),
        ]
        .into_iter()
        .filter_map(|(set, amenity)| set.then_some(amenity))
        .collect()
    }
}

/// Amenity flags a listing can advertise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Amenity {
    PetsAllowed,
    Laundry,
    Parking,
    AirConditioning,
}

impl Amenity {
    pub fn title(&self) -> &'static str {
        match self {
            Amenity::PetsAllowed => "Pets Allowed",
            Amenity::Laundry => "Laundry in Building",
            Amenity::Parking => "Parking Available",
            Amenity::AirConditioning => "Air Conditioning",
        }
    }

    pub fn detail(&self) -> Option<&'static str> {
        match self {
            Amenity::PetsAllowed => Some("Pets are welcome in this space"),
            Amenity::Laundry => Some("Washer and dryer available on-site"),
            Amenity::Parking => Some("Parking space included or available"),
            Amenity::AirConditioning => None,
        }
    }
}

/// The user who owns a listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub member_since: String,
    /// Percentage of conversations answered.
    #[serde(default)]
    pub response_rate: Option<f64>,
    #[serde(default)]
    pub response_time: Option<String>,
}

/// Server-side aggregate counters. Not updated by the local like toggle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingCounts {
    #[serde(default)]
    pub likes: u32,
}

/// Envelope of `GET /api/listings/{id}`.
#[derive(Clone, Debug, Deserialize)]
pub struct ListingEnvelope {
    #[serde(default)]
    pub listing: Option<Listing>,
}

/// One conversation in the user's inbox.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    #[serde(default)]
    pub unread_count: Option<u32>,
}

/// Envelope of `GET /api/messages/conversations`.
#[derive(Clone, Debug, Deserialize)]
pub struct ConversationsEnvelope {
    #[serde(default)]
    pub conversations: Vec<ConversationSummary>,
}

/// Error body the API returns alongside non-2xx statuses.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Sum of unread messages across `conversations`. Missing counters count as 0.
pub fn total_unread(conversations: &[ConversationSummary]) -> u32 {
    conversations
        .iter()
        .map(|c| c.unread_count.unwrap_or(0))
        .fold(0u32, u32::saturating_add)
}
