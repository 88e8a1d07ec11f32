use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned fields carried by every aggregate.
///
/// Flattened into the aggregate on the wire, so the JSON stays
/// `{ "id": ..., "created_at": ..., "updated_at": ..., <fields> }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseAggregate {
    /// Identifier assigned by the backend, immutable once created
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BaseAggregate {
    pub fn new(id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            created_at,
            updated_at: created_at,
        }
    }
}
