use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Error body returned by the API on non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    /// Field name -> validation message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, String>>,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.details
            .get_or_insert_with(BTreeMap::new)
            .insert(field.into(), message.into());
        self
    }

    /// Validation message for one field, if the backend sent one
    pub fn field_message(&self, field: &str) -> Option<&str> {
        self.details.as_ref()?.get(field).map(String::as_str)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)?;
        if let Some(details) = &self.details {
            for (field, message) in details {
                write!(f, "; {}: {}", field, message)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_details() {
        let json = r#"{"error":"validation failed","details":{"email":"invalid format"}}"#;
        let error: ApiError = serde_json::from_str(json).unwrap();
        assert_eq!(error.error, "validation failed");
        assert_eq!(error.field_message("email"), Some("invalid format"));
        assert_eq!(error.field_message("name"), None);
        assert_eq!(error.to_string(), "validation failed; email: invalid format");
    }

    #[test]
    fn test_parse_without_details() {
        let error: ApiError = serde_json::from_str(r#"{"error":"resource not found"}"#).unwrap();
        assert_eq!(error, ApiError::new("resource not found"));
        assert_eq!(
            serde_json::to_string(&error).unwrap(),
            r#"{"error":"resource not found"}"#
        );
    }
}
