use leptos::prelude::*;
use leptos::task::spawn_local;

use super::clerk::{self, ClerkSession};
use super::{Credentials, IdentitySession, TokenBridge};
use crate::shared::api_client::ApiClient;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    /// Identity provider finished restoring its session
    pub loaded: bool,
    pub signed_in: bool,
    pub credentials: Credentials,
}

impl AuthState {
    /// Snapshot of the session with freshly bridged credentials
    pub async fn from_session<S>(session: &S) -> Self
    where
        S: IdentitySession + ?Sized,
    {
        Self {
            loaded: session.is_loaded(),
            signed_in: session.is_signed_in(),
            credentials: TokenBridge::sync(session).await,
        }
    }

    /// Signed-out state after the provider has loaded
    pub fn signed_out() -> Self {
        Self {
            loaded: true,
            ..Default::default()
        }
    }

    /// API client bound to these credentials
    pub fn api(&self) -> ApiClient {
        ApiClient::from_env().with_credentials(self.credentials.clone())
    }
}

/// Numbers session syncs so a slow, older sync cannot overwrite a newer one
#[derive(Clone, Copy)]
struct SyncSequence(StoredValue<u64>);

impl SyncSequence {
    fn new() -> Self {
        Self(StoredValue::new(0))
    }

    /// Start a sync and return its ticket
    fn begin(&self) -> u64 {
        self.0.update_value(|n| *n += 1);
        self.0.get_value()
    }

    fn is_latest(&self, ticket: u64) -> bool {
        self.0.get_value() == ticket
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    let sequence = SyncSequence::new();

    let resync = move || {
        let ticket = sequence.begin();
        spawn_local(async move {
            let state = AuthState::from_session(&ClerkSession).await;
            if !sequence.is_latest(ticket) {
                log::debug!("auth state: dropping stale sync #{}", ticket);
                return;
            }
            log::debug!(
                "auth state: loaded={}, signed_in={}, credentials={:?}",
                state.loaded,
                state.signed_in,
                state.credentials
            );
            set_auth_state.set(state);
        });
    };

    // Sync once on mount, then on every sign-in state change
    Effect::new(move |_| {
        if !clerk::is_available() {
            log::error!("Identity provider SDK not found on the page");
            set_auth_state.set(AuthState::signed_out());
            return;
        }
        resync();
        clerk::add_listener(resync);
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform sign-out
pub async fn do_sign_out(set_auth_state: WriteSignal<AuthState>) -> Result<(), String> {
    let result = clerk::sign_out().await;
    if let Err(e) = &result {
        log::warn!("Sign-out failed: {}", e);
    }

    // Local state is cleared either way
    set_auth_state.set(AuthState::signed_out());
    result
}
