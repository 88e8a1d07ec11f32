use contracts::enums::OrderStatus;
use leptos::prelude::*;

use crate::shared::i18n::use_i18n;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional)]
    variant: &'static str,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=format!("badge {}", variant_class)>
            {children()}
        </span>
    }
}

/// Badge variant for an order status
pub fn status_variant(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Received => "neutral",
        OrderStatus::InProduction | OrderStatus::QualityCheck => "primary",
        OrderStatus::Ready | OrderStatus::Delivered => "success",
        OrderStatus::Revision => "warning",
        OrderStatus::Cancelled => "error",
    }
}

/// Localized order status badge
#[component]
pub fn StatusBadge(status: OrderStatus) -> impl IntoView {
    let i18n = use_i18n();
    let key = format!("status.{}", status.as_str());

    view! {
        <span class=format!("badge badge--status badge--{}", status_variant(status))>
            {move || i18n.t(&key)}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses_are_distinct() {
        assert_eq!(status_variant(OrderStatus::Delivered), "success");
        assert_eq!(status_variant(OrderStatus::Cancelled), "error");
        assert_eq!(status_variant(OrderStatus::Revision), "warning");
    }
}
