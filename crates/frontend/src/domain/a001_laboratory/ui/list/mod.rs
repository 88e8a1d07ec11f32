use contracts::domain::a001_laboratory::aggregate::Laboratory;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

use crate::domain::a001_laboratory::api;
use crate::domain::a001_laboratory::ui::details::LaboratoryDetails;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{ErrorBox, PageHeader};
use crate::shared::date_utils::format_date;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use crate::system::auth::context::use_auth;

#[derive(Clone, Debug, PartialEq)]
pub struct LaboratoryRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Laboratory> for LaboratoryRow {
    fn from(lab: Laboratory) -> Self {
        Self {
            id: lab.id().to_string(),
            address: lab.address.summary(),
            created_at: lab.base.created_at,
            name: lab.name,
            email: lab.email,
            phone: lab.phone,
        }
    }
}

/// Whether `id` is the laboratory the scoped pages currently use
fn is_selected(current: Option<&str>, id: &str) -> bool {
    current == Some(id)
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
#[allow(non_snake_case)]
pub fn LaboratoryList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();
    let i18n = use_i18n();

    let (items, set_items) = signal::<Vec<LaboratoryRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);
    let (show_form, set_show_form) = signal(false);

    let fetch = move || {
        let api_client = auth_state.get_untracked().api();
        set_is_loading.set(true);
        leptos::task::spawn_local(async move {
            match api::list(&api_client).await {
                Ok(labs) => {
                    set_items.set(labs.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.message())),
            }
            set_is_loading.set(false);
        });
    };

    let delete = move |id: String| {
        if !confirm(&i18n.t("common.confirm_delete")) {
            return;
        }
        let api_client = auth_state.get_untracked().api();
        leptos::task::spawn_local(async move {
            match api::delete(&api_client, &id).await {
                Ok(()) => {
                    if ctx.current_laboratory.get_untracked().as_deref() == Some(id.as_str()) {
                        ctx.select_laboratory(None);
                    }
                    fetch();
                }
                Err(e) => set_error.set(Some(e.message())),
            }
        });
    };

    let on_saved = Callback::new(move |lab: Laboratory| {
        set_show_form.set(false);
        ctx.select_laboratory(Some(lab.id().to_string()));
        fetch();
    });

    // Reload whenever the session changes
    Effect::new(move |_| {
        auth_state.track();
        fetch();
    });

    let tab_key = Laboratory::full_name();

    view! {
        <PageFrame page_id=page_id(&tab_key, PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader
                    title=Signal::derive(move || i18n.t("nav.laboratories"))
                    subtitle=Signal::derive(move || Some(i18n.t("laboratories.description")))
                >
                    <button class="button button--primary" on:click=move |_| set_show_form.update(|v| *v = !*v)>
                        {icon("plus")}
                        {move || i18n.t("laboratories.add")}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch() disabled=move || is_loading.get()>
                        {icon("refresh")}
                        {move || i18n.t("common.refresh")}
                    </button>
                </PageHeader>
            </div>

            <div class="page__content">
                <ErrorBox error=error />

                <Show when=move || show_form.get()>
                    <LaboratoryDetails
                        on_saved=on_saved
                        on_cancel=Callback::new(move |_| set_show_form.set(false))
                    />
                </Show>

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{move || i18n.t("common.name")}</th>
                                <th class="table__header-cell">{move || i18n.t("common.email")}</th>
                                <th class="table__header-cell">{move || i18n.t("common.phone")}</th>
                                <th class="table__header-cell">{move || i18n.t("common.address")}</th>
                                <th class="table__header-cell">{move || i18n.t("common.created_at")}</th>
                                <th class="table__header-cell">{move || i18n.t("common.actions")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = items.get();
                                if rows.is_empty() && !is_loading.get() {
                                    return view! {
                                        <tr><td class="table__cell table__cell--empty" colspan="6">{i18n.t("common.empty")}</td></tr>
                                    }.into_any();
                                }
                                rows.into_iter().map(|row| {
                                    let id_for_select = row.id.clone();
                                    let id_for_delete = row.id.clone();
                                    let id_for_check = StoredValue::new(row.id.clone());
                                    let is_current = move || {
                                        id_for_check.with_value(|id| {
                                            is_selected(ctx.current_laboratory.get().as_deref(), id)
                                        })
                                    };
                                    view! {
                                        <tr class="table__row" class:table__row--selected=is_current>
                                            <td class="table__cell">{row.name}</td>
                                            <td class="table__cell">{row.email}</td>
                                            <td class="table__cell">{row.phone}</td>
                                            <td class="table__cell">{row.address}</td>
                                            <td class="table__cell">{move || format_date(&row.created_at, i18n.locale.get())}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--ghost button--smallall"
                                                    disabled=is_current
                                                    on:click=move |_| ctx.select_laboratory(Some(id_for_select.clone()))
                                                >
                                                    {icon("check")}
                                                    {move || if is_current() { i18n.t("common.selected") } else { i18n.t("common.select") }}
                                                </button>
                                                <button
                                                    class="button button--ghost button--smallall"
                                                    on:click=move |_| delete(id_for_delete.clone())
                                                >
                                                    {icon("delete")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </PageFrame>
    }
}
