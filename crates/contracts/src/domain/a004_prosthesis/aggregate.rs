use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, BaseAggregate};

/// Catalog item offered by a laboratory (crown, bridge, denture, ...).
///
/// Orders reference catalog items by type/material, not by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prosthesis {
    #[serde(flatten)]
    pub base: BaseAggregate,

    pub laboratory_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub material: String,
    #[serde(default)]
    pub shade: String,
    #[serde(default)]
    pub specifications: String,
    #[serde(default)]
    pub notes: String,
}

impl AggregateRoot for Prosthesis {
    fn base(&self) -> &BaseAggregate {
        &self.base
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "prostheses"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateProsthesisRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub material: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProsthesisRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub material: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_rename() {
        let request = CreateProsthesisRequest {
            kind: "crown".into(),
            material: "zirconia".into(),
            shade: Some("A2".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], "crown");
        assert_eq!(value["shade"], "A2");
        assert!(value.get("kind").is_none());
        assert!(value.get("notes").is_none());
    }
}
