use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::i18n::use_i18n;

/// Renders `children` only while a laboratory is selected
#[component]
pub fn LabRequired(children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let i18n = use_i18n();

    move || {
        if ctx.current_laboratory.get().is_some() {
            children().into_any()
        } else {
            view! {
                <div class="page__empty">
                    <p>{move || i18n.t("common.no_laboratory")}</p>
                    <button
                        class="button button--primary"
                        on:click=move |_| ctx.open_tab("a001_laboratories")
                    >
                        {move || i18n.t("nav.laboratories")}
                    </button>
                </div>
            }
            .into_any()
        }
    }
}
