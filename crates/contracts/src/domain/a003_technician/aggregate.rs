use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, BaseAggregate};
use crate::enums::TechnicianRole;

/// Laboratory staff member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technician {
    #[serde(flatten)]
    pub base: BaseAggregate,

    pub laboratory_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: TechnicianRole,
    #[serde(default)]
    pub specializations: Vec<String>,
}

impl Technician {
    /// Specializations joined for table cells
    pub fn specializations_label(&self) -> String {
        if self.specializations.is_empty() {
            "-".to_string()
        } else {
            self.specializations.join(", ")
        }
    }
}

impl AggregateRoot for Technician {
    fn base(&self) -> &BaseAggregate {
        &self.base
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "technicians"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTechnicianRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: TechnicianRole,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specializations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateTechnicianRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: TechnicianRole,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specializations: Vec<String>,
}
