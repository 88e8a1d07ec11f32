//! Tab labels: i18n key for each tab key.

use contracts::domain::a001_laboratory::aggregate::Laboratory;
use contracts::domain::a002_client::aggregate::Client;
use contracts::domain::a003_technician::aggregate::Technician;
use contracts::domain::a004_prosthesis::aggregate::Prosthesis;
use contracts::domain::a005_order::aggregate::Order;
use contracts::domain::common::AggregateRoot;

/// Label key for a tab; unknown tabs are labelled with their own key.
pub fn tab_label_key(key: &str) -> &str {
    match key {
        "d400_overview" => "nav.dashboard",

        k if k == Laboratory::full_name() => "nav.laboratories",
        k if k == Client::full_name() => "nav.clients",
        k if k == Technician::full_name() => "nav.technicians",
        k if k == Prosthesis::full_name() => "nav.prostheses",
        k if k == Order::full_name() => "nav.orders",

        "sys_profile" => "nav.profile",
        "sys_account" => "nav.account",
        "sys_appearance" => "nav.appearance",
        "sys_notifications" => "nav.notifications",
        "sys_display" => "nav.display",

        other => other,
    }
}
