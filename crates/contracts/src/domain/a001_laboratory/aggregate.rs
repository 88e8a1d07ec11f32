use serde::{Deserialize, Serialize};

use crate::domain::common::{Address, AggregateRoot, BaseAggregate};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Dental laboratory, the root that owns clients, technicians, catalog
/// items and orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Laboratory {
    #[serde(flatten)]
    pub base: BaseAggregate,

    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

impl AggregateRoot for Laboratory {
    fn base(&self) -> &BaseAggregate {
        &self.base
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "laboratories"
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Body of `POST /laboratories`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateLaboratoryRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

/// Body of `PUT /laboratories/{id}` (full replacement)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateLaboratoryRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

impl From<&Laboratory> for UpdateLaboratoryRequest {
    fn from(lab: &Laboratory) -> Self {
        Self {
            name: lab.name.clone(),
            email: lab.email.clone(),
            phone: lab.phone.clone(),
            address: lab.address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flattened_wire_format() {
        let json = r#"{
            "id": "lab_1",
            "name": "Acme Dental",
            "email": "a@x.com",
            "phone": "555",
            "address": {
                "street": "Main St 1",
                "city": "Springfield",
                "state": "IL",
                "postal_code": "62701",
                "country": "US"
            },
            "created_at": "2024-03-15T14:02:26Z",
            "updated_at": "2024-03-16T09:00:00Z"
        }"#;

        let lab: Laboratory = serde_json::from_str(json).unwrap();
        assert_eq!(lab.id(), "lab_1");
        assert_eq!(lab.name, "Acme Dental");
        assert_eq!(lab.address.city, "Springfield");

        let value = serde_json::to_value(&lab).unwrap();
        assert_eq!(value["id"], "lab_1");
        assert!(value.get("base").is_none());
    }

    #[test]
    fn test_full_name() {
        assert_eq!(Laboratory::full_name(), "a001_laboratories");
    }
}
