//! TabPage component: wrapper around a tab's content
//!
//! Content is rendered once per opened tab through the registry and hidden
//! with a CSS class while another tab is active.

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let tab_key_for_active_check = tab_key.clone();

    let is_active = move || {
        let current_active = tabs_store.active.get();
        current_active.as_ref() == Some(&tab_key_for_active_check)
    };

    log::debug!("TabPage created for '{}'", tab_key);
    let tab_key_for_cleanup = tab_key.clone();
    on_cleanup(move || {
        log::debug!("TabPage destroyed for '{}'", tab_key_for_cleanup);
    });

    let content = render_tab_content(&tab_key, tabs_store);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}
