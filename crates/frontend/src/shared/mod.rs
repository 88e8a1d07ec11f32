pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod i18n;
pub mod icons;
pub mod page_frame;
pub mod page_standard;
pub mod theme;
