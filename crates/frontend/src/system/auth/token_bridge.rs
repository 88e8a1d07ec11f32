use async_trait::async_trait;

use super::Credentials;

/// Sign-in state exposed by the external identity provider
#[async_trait(?Send)]
pub trait IdentitySession {
    /// Whether the provider finished restoring its session
    fn is_loaded(&self) -> bool {
        true
    }

    fn is_signed_in(&self) -> bool;

    /// Fresh session token; `Ok(None)` when the provider has no session
    async fn get_token(&self) -> Result<Option<String>, String>;
}

/// Derives request credentials from the identity session.
///
/// Called on every sign-in state change. There is no retry: a failed token
/// fetch leaves the credentials anonymous and the backend rejects the
/// requests that need a token.
pub struct TokenBridge;

impl TokenBridge {
    pub async fn sync<S>(session: &S) -> Credentials
    where
        S: IdentitySession + ?Sized,
    {
        if !session.is_signed_in() {
            log::debug!("token bridge: signed out, clearing credentials");
            return Credentials::Anonymous;
        }

        match session.get_token().await {
            Ok(Some(token)) => {
                let credentials = Credentials::bearer(token);
                if !credentials.is_authenticated() {
                    log::warn!("token bridge: identity provider returned an empty token");
                }
                credentials
            }
            Ok(None) => {
                log::warn!("token bridge: signed in but no session token available");
                Credentials::Anonymous
            }
            Err(e) => {
                log::warn!("token bridge: failed to fetch session token: {}", e);
                Credentials::Anonymous
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;

    /// Scripted identity session
    pub(crate) struct StaticSession {
        pub signed_in: bool,
        pub token: Result<Option<String>, String>,
        pub token_calls: Cell<u32>,
    }

    impl StaticSession {
        pub(crate) fn new(signed_in: bool, token: Result<Option<String>, String>) -> Self {
            Self {
                signed_in,
                token,
                token_calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl IdentitySession for StaticSession {
        fn is_signed_in(&self) -> bool {
            self.signed_in
        }

        async fn get_token(&self) -> Result<Option<String>, String> {
            self.token_calls.set(self.token_calls.get() + 1);
            self.token.clone()
        }
    }

    #[tokio::test]
    async fn test_signed_in_with_token() {
        let session = StaticSession::new(true, Ok(Some("jwt-1".into())));
        let credentials = TokenBridge::sync(&session).await;
        assert_eq!(credentials, Credentials::bearer("jwt-1"));
        assert_eq!(session.token_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_signed_out_clears_without_fetching() {
        let session = StaticSession::new(false, Ok(Some("stale".into())));
        let credentials = TokenBridge::sync(&session).await;
        assert_eq!(credentials, Credentials::Anonymous);
        assert_eq!(session.token_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_fetch_failure_leaves_anonymous() {
        let session = StaticSession::new(true, Err("network down".into()));
        assert_eq!(TokenBridge::sync(&session).await, Credentials::Anonymous);
        assert_eq!(session.token_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_missing_or_empty_token() {
        let session = StaticSession::new(true, Ok(None));
        assert_eq!(TokenBridge::sync(&session).await, Credentials::Anonymous);

        let session = StaticSession::new(true, Ok(Some(String::new())));
        assert_eq!(TokenBridge::sync(&session).await, Credentials::Anonymous);
    }
}
