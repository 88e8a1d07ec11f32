use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::tab_label_key;
use crate::shared::i18n::use_i18n;
use leptos::ev;
use leptos::prelude::*;

/// Tab header in the tab bar
#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let i18n = use_i18n();

    let key = StoredValue::new(tab.key);
    let is_active =
        Memo::new(move |_| key.with_value(|k| tabs_store.active.get().as_deref() == Some(k.as_str())));

    let on_click = move |_| key.with_value(|k| tabs_store.activate_tab(k));
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        key.with_value(|k| tabs_store.close_tab(k));
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click>
            <span>{move || key.with_value(|k| i18n.t(tab_label_key(k)))}</span>
            <button class="tab-close" on:click=on_close>"×"</button>
        </div>
    }
}
