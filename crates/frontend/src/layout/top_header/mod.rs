//! TopHeader component: application top navigation bar.
//!
//! Contains the sidebar toggle, the brand, the laboratory picker, the
//! language and theme selectors, and sign-out.

use crate::domain::a001_laboratory::ui::picker::LaboratoryPicker;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::i18n::{use_i18n, LanguageSwitch};
use crate::shared::icons::icon;
use crate::shared::theme::ThemeSelector;
use crate::system::auth::context::{do_sign_out, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (_, set_auth_state) = use_auth();
    let i18n = use_i18n();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let sign_out = move |_| {
        spawn_local(async move {
            let _ = do_sign_out(set_auth_state).await;
        });
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || i18n.t("common.toggle_sidebar")
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{move || i18n.t("app.title")}</span>
            </div>

            <div class="top-header__actions">
                <LaboratoryPicker />
                <LanguageSwitch />
                <ThemeSelector />
                <button
                    class="top-header__icon-btn"
                    on:click=sign_out
                    title=move || i18n.t("common.sign_out")
                >
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
