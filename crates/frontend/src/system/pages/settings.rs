use leptos::prelude::*;

use crate::shared::i18n::use_i18n;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

/// Settings section that has no content yet
#[component]
pub fn SettingsPlaceholder(page_id: String, label_key: String) -> impl IntoView {
    let i18n = use_i18n();
    let title_key = label_key.clone();

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h1 class="page-header__title">{move || i18n.t(&title_key)}</h1>
            </div>
            <div class="page__content">
                <div class="page__empty">
                    <p>{move || i18n.t("common.coming_soon")}</p>
                </div>
            </div>
        </PageFrame>
    }
}
