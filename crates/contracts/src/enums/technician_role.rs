use serde::{Deserialize, Serialize};

/// Seniority of a technician within the laboratory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechnicianRole {
    Junior,
    Senior,
    Lead,
    Manager,
}

impl TechnicianRole {
    /// Wire code of the role
    pub fn code(&self) -> &'static str {
        match self {
            TechnicianRole::Junior => "junior",
            TechnicianRole::Senior => "senior",
            TechnicianRole::Lead => "lead",
            TechnicianRole::Manager => "manager",
        }
    }

    pub fn all() -> [TechnicianRole; 4] {
        [
            TechnicianRole::Junior,
            TechnicianRole::Senior,
            TechnicianRole::Lead,
            TechnicianRole::Manager,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|role| role.code() == code)
    }
}

impl std::fmt::Display for TechnicianRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
