//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a005_orders--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The entity part of the id is the tab key, so an id copied from the DOM
//! inspector leads straight to the `domain/a005_order/` directory.

/// List of records.
pub const PAGE_CAT_LIST: &str = "list";

/// Create / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Overview with stat cards.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Account and settings pages.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

/// Page id for a tab key and category.
pub fn page_id(tab_key: &str, category: &str) -> String {
    format!("{}--{}", tab_key, category)
}
