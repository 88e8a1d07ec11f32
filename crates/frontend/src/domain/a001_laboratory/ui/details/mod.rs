//! Laboratory create form
//!
//! - view_model.rs: form state, validation and the save command
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::LaboratoryDetails;
pub use view_model::LaboratoryDetailsViewModel;
