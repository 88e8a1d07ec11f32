//! API utilities for frontend-backend communication
//!
//! Resolves the API base URL and builds resource paths.

use contracts::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

/// Environment variable holding the API base URL
pub const API_URL_ENV: &str = "DENTAL_LAB_API_URL";

/// Used when neither the runtime nor the build environment sets the URL
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Connection settings for the laboratory REST API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_url: String,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the configuration from the environment
    ///
    /// Search order:
    /// 1. `DENTAL_LAB_API_URL` at runtime (native builds)
    /// 2. `DENTAL_LAB_API_URL` at build time (WASM builds)
    /// 3. `DEFAULT_API_URL`
    pub fn from_env() -> Self {
        Self::resolve(runtime_api_url(), option_env!("DENTAL_LAB_API_URL"))
    }

    fn resolve(runtime: Option<String>, compiled: Option<&str>) -> Self {
        let url = runtime
            .filter(|url| !url.trim().is_empty())
            .or_else(|| {
                compiled
                    .filter(|url| !url.trim().is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_api_url() -> Option<String> {
    std::env::var(API_URL_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_api_url() -> Option<String> {
    None
}

// ============================================================================
// Resource paths
// ============================================================================

/// `/laboratories/{lab_id}`
pub fn laboratory_path(lab_id: &str) -> String {
    format!("/laboratories/{}", urlencoding::encode(lab_id))
}

/// Path of a top-level collection, e.g. `/laboratories`
pub fn collection_path<A: AggregateRoot>() -> String {
    format!("/{}", A::collection_name())
}

/// Path of a top-level record, e.g. `/laboratories/{id}`
pub fn item_path<A: AggregateRoot>(id: &str) -> String {
    format!("{}/{}", collection_path::<A>(), urlencoding::encode(id))
}

/// Path of a collection owned by a laboratory,
/// e.g. `/laboratories/{lab_id}/clients`
pub fn scoped_collection_path<A: AggregateRoot>(lab_id: &str) -> String {
    format!("{}/{}", laboratory_path(lab_id), A::collection_name())
}

/// Path of a record owned by a laboratory,
/// e.g. `/laboratories/{lab_id}/clients/{id}`
pub fn scoped_item_path<A: AggregateRoot>(lab_id: &str, id: &str) -> String {
    format!(
        "{}/{}",
        scoped_collection_path::<A>(lab_id),
        urlencoding::encode(id)
    )
}
