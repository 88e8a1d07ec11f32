use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, BaseAggregate};
use crate::enums::OrderStatus;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Work order placed by a client, tracked through the status workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(flatten)]
    pub base: BaseAggregate,

    pub client_id: String,
    pub laboratory_id: String,
    /// Set to `received` by the backend on creation
    pub status: OrderStatus,
    /// Ordered sequence of requested items
    #[serde(default)]
    pub prosthesis: Vec<ProsthesisItem>,
}

impl Order {
    /// Total number of units across all items, saturating at `u64::MAX`
    pub fn total_units(&self) -> u64 {
        self.prosthesis
            .iter()
            .fold(0u64, |total, item| total.saturating_add(u64::from(item.quantity)))
    }

    /// Short description of the items, e.g. "2x crown (zirconia), 1x bridge (emax)"
    pub fn items_summary(&self) -> String {
        if self.prosthesis.is_empty() {
            return "-".to_string();
        }
        self.prosthesis
            .iter()
            .map(|item| format!("{}x {} ({})", item.quantity, item.kind, item.material))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl AggregateRoot for Order {
    fn base(&self) -> &BaseAggregate {
        &self.base
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "orders"
    }
}

/// One line of an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProsthesisItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub material: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shade: Option<String>,
    /// Must be greater than zero; enforced by the backend
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub client_id: String,
    pub prosthesis: Vec<ProsthesisItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrderRequest {
    pub prosthesis: Vec<ProsthesisItem>,
}

/// Body of `PATCH /laboratories/{labId}/orders/{id}/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

impl From<OrderStatus> for UpdateOrderStatusRequest {
    fn from(status: OrderStatus) -> Self {
        Self { status }
    }
}
