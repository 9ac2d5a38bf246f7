/// Failure of a request to the REST API.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The configured base URL cannot have API paths appended to it.
    #[error("invalid API URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Text fit for a toast: the server's own message for status errors, a
    /// generic line otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Status { status, .. } => format!("Request failed ({status})"),
            ApiError::Network(_) => "Could not reach the server".to_string(),
            ApiError::Decode(_) | ApiError::InvalidUrl(_) => "Something went wrong".to_string(),
        }
    }
}

/// Toast text for a failed listing fetch: the server's own message when it
/// answered, a fixed line when it could not be reached.
pub fn listing_error_toast(err: &ApiError) -> String {
    match err {
        ApiError::Status { .. } => err.user_message(),
        _ => "Failed to load listing".to_string(),
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Status {
            status: 404,
            message: "Listing not found".into(),
        };
        assert_eq!(err.user_message(), "Listing not found");
        assert!(err.is_not_found());
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_user_message_without_server_text() {
        let err = ApiError::Status {
            status: 502,
            message: String::new(),
        };
        assert_eq!(err.user_message(), "Request failed (502)");
        assert_eq!(
            ApiError::Network("refused".into()).user_message(),
            "Could not reach the server"
        );
    }

    #[test]
    fn test_listing_toast_uses_server_error_text() {
        let err = ApiError::Status {
            status: 404,
            message: "not found".into(),
        };
        assert_eq!(listing_error_toast(&err), "not found");
    }

    #[test]
    fn test_listing_toast_for_bare_server_error() {
        // decode() fills in the canonical reason when the body has no error field
        let err = ApiError::Status {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(listing_error_toast(&err), "Internal Server Error");
    }

    #[test]
    fn test_listing_toast_for_unreachable_server() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(listing_error_toast(&err), "Failed to load listing");
        let err = ApiError::Decode("expected value".into());
        assert_eq!(listing_error_toast(&err), "Failed to load listing");
    }

    #[test]
    fn test_forbidden_counts_as_unauthorized() {
        let err = ApiError::Status {
            status: 403,
            message: "nope".into(),
        };
        assert!(err.is_unauthorized());
        assert_eq!(ApiError::Decode("x".into()).status(), None);
    }
}
