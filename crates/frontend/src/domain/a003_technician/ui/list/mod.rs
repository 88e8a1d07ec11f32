use contracts::domain::a003_technician::aggregate::Technician;
use contracts::domain::common::AggregateRoot;
use contracts::enums::TechnicianRole;
use leptos::prelude::*;

use crate::domain::a003_technician::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::Badge;
use crate::shared::components::{ErrorBox, LabRequired, PageHeader};
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use crate::system::auth::context::use_auth;

#[derive(Clone, Debug, PartialEq)]
pub struct TechnicianRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: TechnicianRole,
    pub specializations: String,
}

impl From<Technician> for TechnicianRow {
    fn from(t: Technician) -> Self {
        Self {
            id: t.id().to_string(),
            specializations: t.specializations_label(),
            name: t.name,
            email: t.email,
            phone: t.phone,
            role: t.role,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TechnicianList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();
    let i18n = use_i18n();

    let (items, set_items) = signal::<Vec<TechnicianRow>>(Vec::new());
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
            match api::list(&api_client, &lab_id).await {
                Ok(technicians) => {
                    set_items.set(technicians.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.message())),
            }
            set_is_loading.set(false);
        });
    };

    let delete = move |id: String| {
        let Some(lab_id) = ctx.current_laboratory.get_untracked() else {
            return;
        };
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&i18n.t("common.confirm_delete")).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let api_client = auth_state.get_untracked().api();
        leptos::task::spawn_local(async move {
            match api::delete(&api_client, &lab_id, &id).await {
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
        <PageFrame page_id=page_id(&Technician::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader
                    title=Signal::derive(move || i18n.t("nav.technicians"))
                    subtitle=Signal::derive(move || Some(i18n.t("technicians.description")))
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
                                    <th class="table__header-cell">{move || i18n.t("common.name")}</th>
                                    <th class="table__header-cell">{move || i18n.t("technicians.role")}</th>
                                    <th class="table__header-cell">{move || i18n.t("technicians.specializations")}</th>
                                    <th class="table__header-cell">{move || i18n.t("common.email")}</th>
                                    <th class="table__header-cell">{move || i18n.t("common.phone")}</th>
                                    <th class="table__header-cell"></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || items.get().into_iter().map(|row| {
                                    let id = row.id.clone();
                                    let role_key = format!("role.{}", row.role.code());
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{row.name}</td>
                                            <td class="table__cell">
                                                <Badge variant="primary">{move || i18n.t(&role_key)}</Badge>
                                            </td>
                                            <td class="table__cell">{row.specializations}</td>
                                            <td class="table__cell">{row.email}</td>
                                            <td class="table__cell">{row.phone}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--ghost button--smallall"
                                                    title=move || i18n.t("common.delete")
                                                    on:click=move |_| delete(id.clone())
                                                >
                                                    {icon("delete")}
                                                </button>
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
