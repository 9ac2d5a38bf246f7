use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use store::config::ClientConfig;
use store::models::{
    total_unread, ConversationSummary, ConversationsEnvelope, ErrorBody, Listing, ListingEnvelope,
};

use crate::ApiError;

/// HTTP client bound to one API base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL with `segments` appended, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Fetch one listing. `Ok(None)` means the server answered 2xx without a
    /// listing in the payload.
    pub async fn fetch_listing(&self, id: &str) -> Result<Option<Listing>, ApiError> {
        let url = self.endpoint(&["api", "listings", id])?;
        tracing::debug!("GET {url}");
        let response = self.http.get(url).send().await?;
        let envelope: ListingEnvelope = decode(response).await?;
        Ok(envelope.listing)
    }

    /// Fetch the signed-in user's conversation summaries.
    pub async fn fetch_conversations(&self, token: &str) -> Result<Vec<ConversationSummary>, ApiError> {
        let url = self.endpoint(&["api", "messages", "conversations"])?;
        tracing::debug!("GET {url}");
        let response = self.http.get(url).bearer_auth(token).send().await?;
        let envelope: ConversationsEnvelope = decode(response).await?;
        Ok(envelope.conversations)
    }

    /// Total unread messages across the user's conversations.
    pub async fn fetch_unread_count(&self, token: &str) -> Result<u32, ApiError> {
        let conversations = self.fetch_conversations(token).await?;
        Ok(total_unread(&conversations))
    }
}

/// Turn a response into `T`, or into [`ApiError::Status`] for non-2xx.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::extract::Path;
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    /// Serve `router` on an ephemeral port and return its base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn listing_handler(Path(id): Path<String>) -> impl IntoResponse {
        match id.as_str() {
            "l1" => (
                StatusCode::OK,
                Json(json!({
                    "listing": {
                        "id": "l1",
                        "title": "Room",
                        "price": 900,
                        "startDate": "2025-06-01",
                        "endDate": "2025-08-31",
                        "imageUrls": ["a.jpg"],
                        "user": { "id": "u2", "name": "Sam" },
                        "_count": { "likes": 2 }
                    }
                })),
            ),
            "empty" => (StatusCode::OK, Json(json!({ "listing": null }))),
            "a b" => (StatusCode::OK, Json(json!({ "listing": null }))),
            "boom" => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "no error field" })),
            ),
            _ => (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))),
        }
    }

    async fn conversations_handler(headers: HeaderMap) -> impl IntoResponse {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if auth != "Bearer abc" {
            return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "unauthorized" })));
        }
        (
            StatusCode::OK,
            Json(json!({
                "conversations": [
                    { "id": "c1", "unreadCount": 3 },
                    { "id": "c2", "unreadCount": 0 },
                    { "id": "c3" }
                ]
            })),
        )
    }

    fn router() -> Router {
        Router::new()
            .route("/api/listings/{id}", get(listing_handler))
            .route("/api/messages/conversations", get(conversations_handler))
    }

    #[tokio::test]
    async fn test_fetch_listing() {
        let client = ApiClient::new(serve(router()).await);
        let listing = client.fetch_listing("l1").await.unwrap().unwrap();
        assert_eq!(listing.id, "l1");
        assert_eq!(listing.user.id, "u2");
        assert_eq!(listing.counts.likes, 2);
    }

    #[tokio::test]
    async fn test_fetch_listing_empty_payload() {
        let client = ApiClient::new(serve(router()).await);
        assert!(client.fetch_listing("empty").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_listing_id_is_encoded() {
        let client = ApiClient::new(serve(router()).await);
        assert!(client.fetch_listing("a b").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fetch_listing_not_found_carries_message() {
        let client = ApiClient::new(serve(router()).await);
        let err = client.fetch_listing("missing").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            err,
            ApiError::Status {
                status: 404,
                message: "not found".into()
            }
        );
        assert_eq!(crate::listing_error_toast(&err), "not found");
    }

    #[tokio::test]
    async fn test_error_without_error_field_uses_reason() {
        let client = ApiClient::new(serve(router()).await);
        let err = client.fetch_listing("boom").await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                message: "Internal Server Error".into()
            }
        );
        assert_eq!(crate::listing_error_toast(&err), "Internal Server Error");
    }

    #[tokio::test]
    async fn test_unread_count_sums_conversations() {
        let client = ApiClient::new(serve(router()).await);
        assert_eq!(client.fetch_unread_count("abc").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_unread_count_requires_token() {
        let client = ApiClient::new(serve(router()).await);
        let err = client.fetch_unread_count("wrong").await.unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_empty_inbox_is_zero() {
        let router = Router::new().route(
            "/api/messages/conversations",
            get(|| async { Json(json!({ "conversations": [] })) }),
        );
        let client = ApiClient::new(serve(router).await);
        assert_eq!(client.fetch_unread_count("abc").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let router = Router::new().route(
            "/api/messages/conversations",
            get(|| async { "not json" }),
        );
        let client = ApiClient::new(serve(router).await);
        let err = client.fetch_unread_count("abc").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::new(format!("http://{addr}"));
        let err = client.fetch_listing("l1").await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(crate::listing_error_toast(&err), "Failed to load listing");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = ApiClient::new("http://x.test/backend/");
        let url = client.endpoint(&["api", "listings", "l/1"]).unwrap();
        assert_eq!(url.as_str(), "http://x.test/backend/api/listings/l%2F1");
    }

    #[test]
    fn test_invalid_base_url() {
        let client = ApiClient::new("not a url");
        assert!(matches!(
            client.endpoint(&["api"]),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig::default().with_base_url("http://x.test/");
        assert_eq!(ApiClient::from_config(&config).base_url(), "http://x.test");
    }
}
