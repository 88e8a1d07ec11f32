/// Credential attached to outgoing API requests.
///
/// Built by the token bridge and passed explicitly to every `ApiClient`,
/// so a request always carries the token it was created with.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Credentials {
    /// No token: requests go out without `Authorization`
    #[default]
    Anonymous,
    /// `Authorization: Bearer <token>`
    Bearer(String),
}

impl Credentials {
    /// Bearer credentials; an empty token yields `Anonymous`
    pub fn bearer(token: impl Into<String>) -> Self {
        let token: String = token.into();
        if token.trim().is_empty() {
            Credentials::Anonymous
        } else {
            Credentials::Bearer(token)
        }
    }

    pub fn from_token(token: Option<String>) -> Self {
        token.map(Self::bearer).unwrap_or_default()
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Credentials::Anonymous => None,
            Credentials::Bearer(token) => Some(token),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Value of the `Authorization` header, if any
    pub fn authorization_header(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {}", token))
    }
}

// Tokens never end up in logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Anonymous => f.write_str("Anonymous"),
            Credentials::Bearer(_) => f.write_str("Bearer(****)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_header() {
        assert_eq!(
            Credentials::bearer("abc.def").authorization_header().as_deref(),
            Some("Bearer abc.def")
        );
        assert_eq!(Credentials::Anonymous.authorization_header(), None);
    }

    #[test]
    fn test_empty_token_is_anonymous() {
        assert_eq!(Credentials::bearer(""), Credentials::Anonymous);
        assert_eq!(Credentials::from_token(None), Credentials::Anonymous);
        assert!(Credentials::from_token(Some("t".into())).is_authenticated());
    }

    #[test]
    fn test_debug_masks_token() {
        let debug = format!("{:?}", Credentials::bearer("secret-token"));
        assert_eq!(debug, "Bearer(****)");
        assert!(!debug.contains("secret"));
    }
}
