use leptos::prelude::*;

use super::context::use_auth;
use crate::shared::i18n::use_i18n;
use crate::system::pages::sign_in::SignInPage;

/// Renders children only for a signed-in user.
///
/// Shows a loading placeholder until the identity provider has restored its
/// session, and the sign-in page when nobody is signed in.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let i18n = use_i18n();

    move || {
        let state = auth_state.get();
        if !state.loaded {
            view! {
                <div class="auth-loading">{i18n.t("common.loading")}</div>
            }
            .into_any()
        } else if !state.signed_in {
            view! { <SignInPage /> }.into_any()
        } else {
            children()
        }
    }
}
