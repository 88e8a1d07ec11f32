use contracts::domain::a001_laboratory::aggregate::Laboratory;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

use crate::domain::a001_laboratory::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::i18n::use_i18n;
use crate::system::auth::context::use_auth;

/// Current laboratory selector for the top header
#[component]
pub fn LaboratoryPicker() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();
    let i18n = use_i18n();
    let (labs, set_labs) = signal::<Vec<(String, String)>>(Vec::new());

    // Reload on session change and after the selection changes, which is
    // also what the laboratories page does after creating one
    Effect::new(move |_| {
        let state = auth_state.get();
        ctx.current_laboratory.track();
        if !state.signed_in {
            set_labs.set(Vec::new());
            return;
        }
        let api_client = state.api();
        leptos::task::spawn_local(async move {
            match api::list(&api_client).await {
                Ok(items) => set_labs.set(
                    items
                        .iter()
                        .map(|lab: &Laboratory| (lab.id().to_string(), lab.name.clone()))
                        .collect(),
                ),
                Err(e) => log::warn!("Failed to load laboratories: {}", e),
            }
        });
    });

    view! {
        <select
            class="top-header__select"
            title=move || i18n.t("common.select_laboratory")
            on:change=move |ev| {
                let id = event_target_value(&ev);
                ctx.select_laboratory(if id.is_empty() { None } else { Some(id) });
            }
        >
            <option value="" selected=move || ctx.current_laboratory.get().is_none()>
                {move || format!("{}...", i18n.t("common.select_laboratory"))}
            </option>
            {move || labs.get().into_iter().map(|(id, name)| {
                let id_for_check = id.clone();
                view! {
                    <option
                        value=id
                        selected=move || ctx.current_laboratory.get().as_deref() == Some(id_for_check.as_str())
                    >
                        {name}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
