use contracts::domain::a004_prosthesis::aggregate::Prosthesis;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

use crate::domain::a004_prosthesis::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{ErrorBox, LabRequired, PageHeader};
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use crate::system::auth::context::use_auth;

/// "-" for blank optional columns
fn or_dash(value: String) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProsthesisRow {
    pub id: String,
    pub kind: String,
    pub material: String,
    pub shade: String,
    pub specifications: String,
    pub notes: String,
}

impl From<Prosthesis> for ProsthesisRow {
    fn from(p: Prosthesis) -> Self {
        Self {
            id: p.id().to_string(),
            kind: p.kind,
            material: p.material,
            shade: or_dash(p.shade),
            specifications: or_dash(p.specifications),
            notes: or_dash(p.notes),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProsthesisList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();
    let i18n = use_i18n();

    let (items, set_items) = signal::<Vec<ProsthesisRow>>(Vec::new());
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
                Ok(prostheses) => {
                    set_items.set(prostheses.into_iter().map(Into::into).collect());
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
        <PageFrame page_id=page_id(&Prosthesis::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader
                    title=Signal::derive(move || i18n.t("nav.prostheses"))
                    subtitle=Signal::derive(move || Some(i18n.t("prostheses.description")))
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
                                    <th class="table__header-cell">{move || i18n.t("prostheses.type")}</th>
                                    <th class="table__header-cell">{move || i18n.t("prostheses.material")}</th>
                                    <th class="table__header-cell">{move || i18n.t("prostheses.shade")}</th>
                                    <th class="table__header-cell">{move || i18n.t("prostheses.specifications")}</th>
                                    <th class="table__header-cell"></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || items.get().into_iter().map(|row| {
                                    let id = row.id.clone();
                                    view! {
                                        <tr class="table__row" title=row.notes>
                                            <td class="table__cell">{row.kind}</td>
                                            <td class="table__cell">{row.material}</td>
                                            <td class="table__cell">{row.shade}</td>
                                            <td class="table__cell">{row.specifications}</td>
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
