use std::collections::HashMap;

use contracts::domain::a002_client::aggregate::Client;
use contracts::domain::a005_order::aggregate::Order;
use contracts::domain::common::AggregateRoot;
use contracts::enums::OrderStatus;
use leptos::prelude::*;

use crate::domain::a002_client;
use crate::domain::a005_order::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{ErrorBox, LabRequired, PageHeader};
use crate::shared::date_utils::format_datetime;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use crate::system::auth::context::use_auth;

#[derive(Clone, Debug, PartialEq)]
pub struct OrderRow {
    pub id: String,
    /// Client name, or the client id when the client is unknown
    pub client: String,
    pub items: String,
    pub units: u64,
    pub status: OrderStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Join orders with their client names
pub fn build_rows(orders: Vec<Order>, clients: &[Client]) -> Vec<OrderRow> {
    let names: HashMap<&str, &str> = clients
        .iter()
        .map(|c| (c.id(), c.name.as_str()))
        .collect();

    orders
        .into_iter()
        .map(|o| OrderRow {
            id: o.id().to_string(),
            client: names
                .get(o.client_id.as_str())
                .map(|n| n.to_string())
                .unwrap_or_else(|| o.client_id.clone()),
            items: o.items_summary(),
            units: o.total_units(),
            status: o.status,
            created_at: o.base.created_at,
        })
        .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();
    let i18n = use_i18n();

    let (items, set_items) = signal::<Vec<OrderRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);

    let fetch = move || {
        let Some(lab_id) = ctx.current_laboratory.get_untracked() else {
            set_items.set(Vec::new());
            return;
        };
        let api_client = auth_state.get_untracked().api();
        set_is_loading.set(true);
        leptos::task::spawn_local(async move {
            let result = async {
                let orders = api::list(&api_client, &lab_id).await?;
                let clients = a002_client::api::list(&api_client, &lab_id).await?;
                Ok::<_, crate::shared::api_client::ApiClientError>(build_rows(orders, &clients))
            }
            .await;
            match result {
                Ok(rows) => {
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.message())),
            }
            set_is_loading.set(false);
        });
    };

    // Any status may be submitted; the buttons only offer the usual next steps
    let advance = move |id: String, status: OrderStatus| {
        let Some(lab_id) = ctx.current_laboratory.get_untracked() else {
            return;
        };
        let api_client = auth_state.get_untracked().api();
        leptos::task::spawn_local(async move {
            match api::update_status(&api_client, &lab_id, &id, status.into()).await {
                Ok(order) => {
                    log::info!("order {} is now {}", order.id(), order.status);
                    set_items.update(|rows| {
                        if let Some(row) = rows.iter_mut().find(|r| r.id == order.id()) {
                            row.status = order.status;
                        }
                    });
                }
                Err(e) => set_error.set(Some(e.message())),
            }
        });
    };

    let cancel = move |id: String| {
        let Some(lab_id) = ctx.current_laboratory.get_untracked() else {
            return;
        };
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&i18n.t("orders.confirm_cancel")).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let api_client = auth_state.get_untracked().api();
        leptos::task::spawn_local(async move {
            match api::cancel(&api_client, &lab_id, &id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e.message())),
            }
        });
    };

    Effect::new(move |_| {
        auth_state.track();
        ctx.current_laboratory.track();
        fetch();
    });

    view! {
        <PageFrame page_id=page_id(&Order::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader
                    title=Signal::derive(move || i18n.t("nav.orders"))
                    subtitle=Signal::derive(move || Some(i18n.t("orders.description")))
                >
                    <button class="button button--secondary" on:click=move |_| fetch() disabled=move || is_loading.get()>
                        {icon("refresh")}
                        {move || i18n.t("common.refresh")}
                    </button>
                </PageHeader>
            </div>

            <div class="page__content">
                <LabRequired>
                    <ErrorBox error=error />
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"#"</th>
                                    <th class="table__header-cell">{move || i18n.t("orders.client")}</th>
                                    <th class="table__header-cell">{move || i18n.t("orders.items")}</th>
                                    <th class="table__header-cell">{move || i18n.t("orders.units")}</th>
                                    <th class="table__header-cell">{move || i18n.t("orders.status")}</th>
                                    <th class="table__header-cell">{move || i18n.t("common.created_at")}</th>
                                    <th class="table__header-cell">{move || i18n.t("common.actions")}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || items.get().into_iter().map(|row| {
                                    let id_for_cancel = row.id.clone();
                                    let status = row.status;
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{row.id.clone()}</td>
                                            <td class="table__cell">{row.client}</td>
                                            <td class="table__cell">{row.items}</td>
                                            <td class="table__cell">{row.units}</td>
                                            <td class="table__cell"><StatusBadge status=status /></td>
                                            <td class="table__cell">{move || format_datetime(&row.created_at, i18n.locale.get())}</td>
                                            <td class="table__cell table__cell--actions">
                                                {status.next_statuses().iter().copied().map(|next| {
                                                    let id = row.id.clone();
                                                    let label_key = format!("status.{}", next.as_str());
                                                    view! {
                                                        <button
                                                            class="button button--secondary button--smallall"
                                                            on:click=move |_| advance(id.clone(), next)
                                                        >
                                                            {move || format!("→ {}", i18n.t(&label_key))}
                                                        </button>
                                                    }
                                                }).collect_view()}
                                                {status.can_cancel().then(|| view! {
                                                    <button
                                                        class="button button--ghost button--smallall"
                                                        title=move || i18n.t("orders.cancel")
                                                        on:click=move |_| cancel(id_for_cancel.clone())
                                                    >
                                                        {icon("x")}
                                                    </button>
                                                })}
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </LabRequired>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_order::aggregate::ProsthesisItem;
    use contracts::domain::common::{Address, BaseAggregate};

    fn client(id: &str, name: &str) -> Client {
        Client {
            base: BaseAggregate::new(id, chrono::Utc::now()),
            laboratory_id: "lab_1".to_string(),
            name: name.to_string(),
            email: String::new(),
            phone: String::new(),
            address: Address::default(),
        }
    }

    fn order(id: &str, client_id: &str, quantity: u32) -> Order {
        Order {
            base: BaseAggregate::new(id, chrono::Utc::now()),
            client_id: client_id.to_string(),
            laboratory_id: "lab_1".to_string(),
            status: OrderStatus::Received,
            prosthesis: vec![ProsthesisItem {
                kind: "crown".to_string(),
                material: "zirconia".to_string(),
                shade: None,
                quantity,
                notes: None,
            }],
        }
    }

    #[test]
    fn test_rows_resolve_client_names() {
        let rows = build_rows(
            vec![order("ord_1", "cli_1", 2), order("ord_2", "cli_9", 1)],
            &[client("cli_1", "Dr. Ana Silva")],
        );

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].client, "Dr. Ana Silva");
        assert_eq!(rows[0].units, 2);
        assert_eq!(rows[0].items, "2x crown (zirconia)");
        assert_eq!(rows[1].client, "cli_9");
    }
}
