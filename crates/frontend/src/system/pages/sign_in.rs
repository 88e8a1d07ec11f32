use leptos::prelude::*;

use crate::shared::i18n::{use_i18n, LanguageSwitch};
use crate::system::auth::clerk;

#[component]
pub fn SignInPage() -> impl IntoView {
    let i18n = use_i18n();
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let on_sign_in = move |_| {
        set_error_message.set(None);
        if let Err(e) = clerk::open_sign_in() {
            log::error!("Sign-in unavailable: {}", e);
            set_error_message.set(Some(i18n.t("auth.provider_unavailable")));
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>{move || i18n.t("app.title")}</h1>
                <h2>{move || i18n.t("auth.sign_in_title")}</h2>
                <p class="login-hint">{move || i18n.t("auth.sign_in_hint")}</p>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <button
                    class="button button--primary login-button"
                    on:click=on_sign_in
                    disabled=move || !clerk::is_available()
                >
                    {move || i18n.t("auth.sign_in")}
                </button>

                <div class="login-footer">
                    <LanguageSwitch />
                </div>
            </div>
        </div>
    }
}
