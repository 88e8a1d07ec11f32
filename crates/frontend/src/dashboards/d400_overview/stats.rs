use std::collections::HashSet;

use contracts::domain::a002_client::aggregate::Client;
use contracts::domain::a004_prosthesis::aggregate::Prosthesis;
use contracts::domain::a005_order::aggregate::Order;
use contracts::enums::OrderStatus;

use crate::shared::date_utils::days_between;

/// Figures shown on the overview dashboard for one laboratory
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewStats {
    /// Orders that are neither delivered nor cancelled
    pub active_orders: usize,
    pub in_production: usize,
    pub ready: usize,
    pub total_clients: usize,
    /// Distinct catalog types, compared case-insensitively
    pub prosthesis_types: usize,
    /// Mean days from creation to last update over delivered orders
    pub avg_turnaround_days: Option<f64>,
    /// Count per status in workflow order
    pub status_distribution: Vec<(OrderStatus, usize)>,
}

impl OverviewStats {
    pub fn compute(orders: &[Order], clients: &[Client], prostheses: &[Prosthesis]) -> Self {
        let count = |status: OrderStatus| orders.iter().filter(|o| o.status == status).count();

        let prosthesis_types = prostheses
            .iter()
            .map(|p| p.kind.trim().to_lowercase())
            .filter(|kind| !kind.is_empty())
            .collect::<HashSet<_>>()
            .len();

        let delivered: Vec<f64> = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Delivered)
            .map(|o| days_between(&o.base.created_at, &o.base.updated_at))
            .collect();
        let avg_turnaround_days = if delivered.is_empty() {
            None
        } else {
            Some(delivered.iter().sum::<f64>() / delivered.len() as f64)
        };

        Self {
            active_orders: orders.iter().filter(|o| o.status.is_active()).count(),
            in_production: count(OrderStatus::InProduction),
            ready: count(OrderStatus::Ready),
            total_clients: clients.len(),
            prosthesis_types,
            avg_turnaround_days,
            status_distribution: OrderStatus::all()
                .into_iter()
                .map(|status| (status, count(status)))
                .collect(),
        }
    }

    /// Turnaround rounded to one decimal, "-" without delivered orders
    pub fn turnaround_label(&self) -> String {
        match self.avg_turnaround_days {
            Some(days) => format!("{:.1}", days),
            None => "-".to_string(),
        }
    }

    /// Share of `count` among all orders, as a whole percentage
    pub fn share_percent(&self, count: usize) -> u32 {
        let total: usize = self.status_distribution.iter().map(|(_, n)| n).sum();
        if total == 0 {
            return 0;
        }
        ((count as f64 / total as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use contracts::domain::common::{Address, BaseAggregate};

    fn order(id: &str, status: OrderStatus, days: i64) -> Order {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let mut base = BaseAggregate::new(id, created);
        base.updated_at = created + Duration::days(days);
        Order {
            base,
            client_id: "cli_1".to_string(),
            laboratory_id: "lab_1".to_string(),
            status,
            prosthesis: Vec::new(),
        }
    }

    fn client(id: &str) -> Client {
        Client {
            base: BaseAggregate::new(id, Utc::now()),
            laboratory_id: "lab_1".to_string(),
            name: id.to_string(),
            email: String::new(),
            phone: String::new(),
            address: Address::default(),
        }
    }

    fn prosthesis(kind: &str, material: &str) -> Prosthesis {
        Prosthesis {
            base: BaseAggregate::new("pro_x", Utc::now()),
            laboratory_id: "lab_1".to_string(),
            kind: kind.to_string(),
            material: material.to_string(),
            shade: String::new(),
            specifications: String::new(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_counts() {
        let orders = vec![
            order("ord_1", OrderStatus::Received, 0),
            order("ord_2", OrderStatus::InProduction, 1),
            order("ord_3", OrderStatus::InProduction, 2),
            order("ord_4", OrderStatus::Ready, 3),
            order("ord_5", OrderStatus::Delivered, 4),
            order("ord_6", OrderStatus::Cancelled, 1),
        ];
        let clients = vec![client("cli_1"), client("cli_2")];
        let prostheses = vec![
            prosthesis("crown", "zirconia"),
            prosthesis("Crown", "emax"),
            prosthesis("bridge", "zirconia"),
        ];

        let stats = OverviewStats::compute(&orders, &clients, &prostheses);

        assert_eq!(stats.active_orders, 4);
        assert_eq!(stats.in_production, 2);
        assert_eq!(stats.ready, 1);
        assert_eq!(stats.total_clients, 2);
        assert_eq!(stats.prosthesis_types, 2);
    }

    #[test]
    fn test_turnaround_over_delivered_only() {
        let orders = vec![
            order("ord_1", OrderStatus::Delivered, 4),
            order("ord_2", OrderStatus::Delivered, 7),
            order("ord_3", OrderStatus::Ready, 30),
        ];

        let stats = OverviewStats::compute(&orders, &[], &[]);

        assert_eq!(stats.avg_turnaround_days, Some(5.5));
        assert_eq!(stats.turnaround_label(), "5.5");
    }

    #[test]
    fn test_empty_lab() {
        let stats = OverviewStats::compute(&[], &[], &[]);

        assert_eq!(stats.active_orders, 0);
        assert_eq!(stats.avg_turnaround_days, None);
        assert_eq!(stats.turnaround_label(), "-");
        assert_eq!(stats.share_percent(0), 0);
        assert_eq!(stats.status_distribution.len(), 7);
        assert!(stats.status_distribution.iter().all(|(_, n)| *n == 0));
    }

    #[test]
    fn test_distribution_in_workflow_order() {
        let orders = vec![
            order("ord_1", OrderStatus::Revision, 0),
            order("ord_2", OrderStatus::Received, 0),
            order("ord_3", OrderStatus::Received, 0),
            order("ord_4", OrderStatus::Delivered, 2),
        ];

        let stats = OverviewStats::compute(&orders, &[], &[]);
        let statuses: Vec<OrderStatus> =
            stats.status_distribution.iter().map(|(s, _)| *s).collect();

        assert_eq!(statuses, OrderStatus::all().to_vec());
        assert_eq!(stats.status_distribution[0], (OrderStatus::Received, 2));
        assert_eq!(stats.share_percent(2), 50);
    }
}
