use serde::{Deserialize, Serialize};

use crate::domain::common::{Address, AggregateRoot, BaseAggregate};

/// Customer of a laboratory (a dentist or clinic) placing orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(flatten)]
    pub base: BaseAggregate,

    /// Owning laboratory, immutable
    pub laboratory_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

impl AggregateRoot for Client {
    fn base(&self) -> &BaseAggregate {
        &self.base
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "clients"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateClientRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}
