use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d400_overview::stats::OverviewStats;
use crate::domain::{a002_client, a004_prosthesis, a005_order};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_client::{ApiClient, ApiResult};
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{ErrorBox, LabRequired, PageHeader, StatCard};
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DASHBOARD};
use crate::system::auth::context::use_auth;

async fn load_stats(api: &ApiClient, lab_id: &str) -> ApiResult<OverviewStats> {
    let orders = a005_order::api::list(api, lab_id).await?;
    let clients = a002_client::api::list(api, lab_id).await?;
    let prostheses = a004_prosthesis::api::list(api, lab_id).await?;
    Ok(OverviewStats::compute(&orders, &clients, &prostheses))
}

/// Overview of the current laboratory
#[component]
pub fn OverviewDashboard(tabs_store: AppGlobalContext) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let i18n = use_i18n();

    let (stats, set_stats) = signal(None::<OverviewStats>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Reload when the session or the selected laboratory changes
    Effect::new(move |_| {
        auth_state.track();
        let Some(lab_id) = tabs_store.current_laboratory.get() else {
            set_stats.set(None);
            return;
        };
        let api_client = auth_state.get_untracked().api();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match load_stats(&api_client, &lab_id).await {
                Ok(computed) => set_stats.set(Some(computed)),
                Err(e) => {
                    log::error!("Failed to load overview for {}: {}", lab_id, e);
                    set_error.set(Some(e.message()));
                }
            }
            set_loading.set(false);
        });
    });

    let stat = move |f: fn(&OverviewStats) -> String| {
        Signal::derive(move || stats.get().as_ref().map(f))
    };

    let quick_action = move |key: &'static str, label_key: &'static str, icon_name: &'static str| {
        view! {
            <button class="button button--secondary" on:click=move |_| tabs_store.open_tab(key)>
                {icon(icon_name)}
                {move || i18n.t(label_key)}
            </button>
        }
    };

    view! {
        <PageFrame page_id=page_id("d400_overview", PAGE_CAT_DASHBOARD) category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <PageHeader
                    title=Signal::derive(move || i18n.t("nav.dashboard"))
                    subtitle=Signal::derive(move || Some(i18n.t("dashboard.welcome")))
                />
            </div>

            <div class="page__content">
                <LabRequired>
                    <ErrorBox error=error />
                    {move || loading.get().then(|| view! {
                        <div class="loading">{i18n.t("common.loading")}</div>
                    })}

                    <div class="stat-grid">
                        <StatCard
                            label=Signal::derive(move || i18n.t("dashboard.active_orders"))
                            icon_name="orders"
                            value=stat(|s| s.active_orders.to_string())
                            subtitle=Signal::derive(move || stats.get().map(|s| format!(
                                "{} {}, {} {}",
                                s.in_production,
                                i18n.t("dashboard.in_production"),
                                s.ready,
                                i18n.t("dashboard.ready"),
                            )))
                        />
                        <StatCard
                            label=Signal::derive(move || i18n.t("dashboard.total_clients"))
                            icon_name="clients"
                            value=stat(|s| s.total_clients.to_string())
                        />
                        <StatCard
                            label=Signal::derive(move || i18n.t("dashboard.prosthesis_types"))
                            icon_name="prosthesis"
                            value=stat(|s| s.prosthesis_types.to_string())
                        />
                        <StatCard
                            label=Signal::derive(move || i18n.t("dashboard.avg_turnaround"))
                            icon_name="clock"
                            value=stat(|s| s.turnaround_label())
                            subtitle=Signal::derive(move || Some(i18n.t("dashboard.days")))
                        />
                    </div>

                    <div class="card">
                        <h3 class="card__title">{move || i18n.t("dashboard.status_distribution")}</h3>
                        <div class="status-distribution">
                            {move || stats.get().map(|s| {
                                s.status_distribution.iter().map(|(status, count)| {
                                    let status = *status;
                                    let width = format!("width: {}%", s.share_percent(*count));
                                    view! {
                                        <div class="status-distribution__row">
                                            <StatusBadge status=status />
                                            <div class="status-distribution__bar">
                                                <div class="status-distribution__fill" style=width></div>
                                            </div>
                                            <span class="status-distribution__count">{*count}</span>
                                        </div>
                                    }
                                }).collect_view()
                            })}
                        </div>
                    </div>

                    <div class="card">
                        <h3 class="card__title">{move || i18n.t("dashboard.quick_actions")}</h3>
                        <div class="quick-actions">
                            {quick_action("a005_orders", "dashboard.view_orders", "orders")}
                            {quick_action("a002_clients", "dashboard.manage_clients", "clients")}
                            {quick_action("a004_prostheses", "dashboard.prosthesis_catalog", "prosthesis")}
                        </div>
                    </div>
                </LabRequired>
            </div>
        </PageFrame>
    }
}
