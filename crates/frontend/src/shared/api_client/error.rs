use contracts::shared::ApiError;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiClientError>;

/// Failure of a single API call
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// No response was received
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("not found: {0}")]
    NotFound(ApiError),

    /// 401 / 403, typically a missing or expired token
    #[error("unauthorized ({status}): {error}")]
    Unauthorized { status: u16, error: ApiError },

    #[error("HTTP {status}: {error}")]
    Http { status: u16, error: ApiError },

    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to parse response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiClientError {
    /// Classify a non-2xx response.
    ///
    /// The body is read as `ApiError`; anything else becomes its `error` text.
    pub fn from_response(status: u16, reason: Option<&str>, body: &str) -> Self {
        let error = serde_json::from_str::<ApiError>(body).unwrap_or_else(|_| {
            let text = body.trim();
            if text.is_empty() {
                ApiError::new(reason.unwrap_or("request failed"))
            } else {
                ApiError::new(text)
            }
        });

        match status {
            404 => ApiClientError::NotFound(error),
            401 | 403 => ApiClientError::Unauthorized { status, error },
            _ => ApiClientError::Http { status, error },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiClientError::NotFound(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiClientError::Unauthorized { .. })
    }

    /// HTTP status, when a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiClientError::NotFound(_) => Some(404),
            ApiClientError::Unauthorized { status, .. } | ApiClientError::Http { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Structured error body, when the backend sent one
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ApiClientError::NotFound(error)
            | ApiClientError::Unauthorized { error, .. }
            | ApiClientError::Http { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Text shown to the user
    pub fn message(&self) -> String {
        match self.api_error() {
            Some(error) => error.to_string(),
            None => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_with_body() {
        let error = ApiClientError::from_response(404, Some("Not Found"), r#"{"error":"resource not found"}"#);
        assert!(error.is_not_found());
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.message(), "resource not found");
    }

    #[test]
    fn test_validation_details_survive() {
        let body = r#"{"error":"invalid input","details":{"name":"required"}}"#;
        let error = ApiClientError::from_response(400, Some("Bad Request"), body);
        match &error {
            ApiClientError::Http { status, error } => {
                assert_eq!(*status, 400);
                assert_eq!(error.field_message("name"), Some("required"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(error.message(), "invalid input; name: required");
    }

    #[test]
    fn test_unauthorized_plain_text_body() {
        let error = ApiClientError::from_response(401, Some("Unauthorized"), "token expired");
        assert!(error.is_unauthorized());
        assert_eq!(error.message(), "token expired");
    }

    #[test]
    fn test_empty_body_uses_reason() {
        let error = ApiClientError::from_response(503, Some("Service Unavailable"), "");
        assert_eq!(error.status(), Some(503));
        assert_eq!(error.message(), "Service Unavailable");
    }
}
