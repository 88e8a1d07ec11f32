//! Authentication plumbing.
//!
//! The identity provider issues the bearer token; this module turns it into
//! explicit `Credentials` that are bound to every `ApiClient` built by the UI.

pub mod clerk;
pub mod context;
pub mod credentials;
pub mod guard;
pub mod token_bridge;

pub use credentials::Credentials;
pub use token_bridge::{IdentitySession, TokenBridge};
