//! Tab management module
//!
//! - `page`: TabPage wrapper that shows or hides a tab's content
//! - `registry`: tab.key → View, the single key-to-page mapping
//! - `tab_labels`: tab.key → label key

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_key;

/// Tab opened when the URL names none
pub const DEFAULT_TAB: &str = "d400_overview";
