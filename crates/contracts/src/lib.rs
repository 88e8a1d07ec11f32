//! Wire types shared between the dashboard and the laboratory REST API.
//!
//! - `domain` - aggregates and their request payloads
//! - `enums` - closed value sets (order status, technician role)
//! - `shared` - cross-cutting wire types such as `ApiError`

pub mod domain;
pub mod enums;
pub mod shared;
