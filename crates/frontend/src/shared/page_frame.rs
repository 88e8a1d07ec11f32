//! PageFrame: root wrapper for every page rendered inside a tab.
//!
//! Sets `id` (`"{tab_key}--{category}"`) and `data-page-category` on the root
//! element, plus the BEM modifier class for the category.

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{tab_key}--{category}`, e.g. `"a005_orders--list"`.
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(&page_id), "bad page id: {}", page_id);

    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div
            id=page_id
            class=class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
