use serde::{Deserialize, Serialize};

/// Workflow state of an order.
///
/// The backend is the only authority on which transitions are legal;
/// `next_statuses` mirrors its table so the UI can offer sensible actions,
/// but nothing in the client rejects a status because of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Received,
    InProduction,
    QualityCheck,
    Ready,
    Delivered,
    Revision,
    Cancelled,
}

impl OrderStatus {
    /// All statuses in workflow order
    pub fn all() -> [OrderStatus; 7] {
        [
            OrderStatus::Received,
            OrderStatus::InProduction,
            OrderStatus::QualityCheck,
            OrderStatus::Ready,
            OrderStatus::Delivered,
            OrderStatus::Revision,
            OrderStatus::Cancelled,
        ]
    }

    /// Wire code, identical to the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Received => "received",
            OrderStatus::InProduction => "in_production",
            OrderStatus::QualityCheck => "quality_check",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Revision => "revision",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Case-sensitive parse of a wire code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|status| status.as_str() == code)
    }

    /// Status of every newly created order
    pub fn initial() -> Self {
        OrderStatus::Received
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Still in the laboratory's pipeline
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }

    /// Statuses the backend accepts after this one
    pub fn next_statuses(&self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::Received => &[OrderStatus::InProduction],
            OrderStatus::InProduction => &[OrderStatus::QualityCheck],
            OrderStatus::QualityCheck => &[OrderStatus::Ready, OrderStatus::Revision],
            OrderStatus::Ready => &[OrderStatus::Delivered, OrderStatus::Revision],
            OrderStatus::Revision => &[OrderStatus::InProduction],
            OrderStatus::Delivered | OrderStatus::Cancelled => &[],
        }
    }

    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        self.next_statuses().contains(&next)
    }

    /// Cancelling is a DELETE, offered while the order is not finished
    pub fn can_cancel(&self) -> bool {
        self.is_active()
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_serde() {
        for status in OrderStatus::all() {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let parsed: OrderStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_from_code() {
        assert_eq!(OrderStatus::from_code("in_production"), Some(OrderStatus::InProduction));
        assert_eq!(OrderStatus::from_code("Received"), None);
        assert_eq!(OrderStatus::from_code(""), None);
        assert_eq!(OrderStatus::from_code("unknown"), None);
    }

    #[test]
    fn test_allowed_transitions() {
        let cases = [
            (OrderStatus::Received, OrderStatus::InProduction, true),
            (OrderStatus::InProduction, OrderStatus::QualityCheck, true),
            (OrderStatus::QualityCheck, OrderStatus::Ready, true),
            (OrderStatus::QualityCheck, OrderStatus::Revision, true),
            (OrderStatus::Ready, OrderStatus::Delivered, true),
            (OrderStatus::Ready, OrderStatus::Revision, true),
            (OrderStatus::Revision, OrderStatus::InProduction, true),
            (OrderStatus::Received, OrderStatus::Ready, false),
            (OrderStatus::Received, OrderStatus::Delivered, false),
            (OrderStatus::InProduction, OrderStatus::Received, false),
            (OrderStatus::Delivered, OrderStatus::Ready, false),
            (OrderStatus::Delivered, OrderStatus::InProduction, false),
            (OrderStatus::Cancelled, OrderStatus::Received, false),
        ];

        for (from, to, expected) in cases {
            assert_eq!(
                from.can_transition_to(to),
                expected,
                "{} -> {}",
                from,
                to
            );
        }
    }

    #[test]
    fn test_terminal_states() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        for status in OrderStatus::all() {
            assert_eq!(status.is_terminal(), status.next_statuses().is_empty());
            assert_eq!(status.can_cancel(), !status.is_terminal());
        }
    }

    #[test]
    fn test_initial_status() {
        assert_eq!(OrderStatus::default(), OrderStatus::Received);
        assert!(OrderStatus::initial().is_active());
    }
}
