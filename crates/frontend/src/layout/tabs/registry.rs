//! Tab content registry: the single mapping from tab.key to View.

use crate::dashboards::OverviewDashboard;
use crate::domain::a001_laboratory::ui::list::LaboratoryList;
use crate::domain::a002_client::ui::list::ClientList;
use crate::domain::a003_technician::ui::list::TechnicianList;
use crate::domain::a004_prosthesis::ui::list::ProsthesisList;
use crate::domain::a005_order::ui::list::OrderList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::pages::settings::SettingsPlaceholder;
use leptos::prelude::*;

/// Renders the content of a tab by its key.
///
/// `tabs_store` is handed to pages that open other tabs.
/// Unknown keys render a placeholder.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        // Dashboards
        "d400_overview" => view! { <OverviewDashboard tabs_store=tabs_store /> }.into_any(),

        // Aggregates
        "a001_laboratories" => view! { <LaboratoryList /> }.into_any(),
        "a002_clients" => view! { <ClientList /> }.into_any(),
        "a003_technicians" => view! { <TechnicianList /> }.into_any(),
        "a004_prostheses" => view! { <ProsthesisList /> }.into_any(),
        "a005_orders" => view! { <OrderList /> }.into_any(),

        // Settings
        "sys_profile" | "sys_account" | "sys_appearance" | "sys_notifications"
        | "sys_display" => {
            let page_id = format!("{}--system", key);
            view! { <SettingsPlaceholder page_id=page_id label_key=super::tab_label_key(key).to_string() /> }
                .into_any()
        }

        _ => {
            log::warn!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{key.to_string()}</div> }.into_any()
        }
    }
}
