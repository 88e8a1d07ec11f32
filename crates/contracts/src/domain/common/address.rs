use serde::{Deserialize, Serialize};

/// Postal address embedded in laboratories and clients
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl Address {
    /// One-line representation for tables, e.g. "Rua A, 10 - São Paulo/SP"
    pub fn summary(&self) -> String {
        let locality = match (self.city.trim(), self.state.trim()) {
            ("", "") => String::new(),
            (city, "") => city.to_string(),
            ("", state) => state.to_string(),
            (city, state) => format!("{}/{}", city, state),
        };

        match (self.street.trim(), locality.as_str()) {
            ("", "") => "-".to_string(),
            (street, "") => street.to_string(),
            ("", locality) => locality.to_string(),
            (street, locality) => format!("{} - {}", street, locality),
        }
    }
}
