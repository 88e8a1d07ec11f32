pub mod settings;
pub mod sign_in;
