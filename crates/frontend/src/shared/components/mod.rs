pub mod error_box;
pub mod lab_required;
pub mod page_header;
pub mod stat_card;
pub mod ui;

pub use error_box::ErrorBox;
pub use lab_required::LabRequired;
pub use page_header::PageHeader;
pub use stat_card::StatCard;
