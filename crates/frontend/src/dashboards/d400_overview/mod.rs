pub mod stats;
pub mod ui;
