use contracts::domain::a001_laboratory::aggregate::{CreateLaboratoryRequest, Laboratory};
use leptos::prelude::*;

use super::view_model::LaboratoryDetailsViewModel;
use crate::shared::components::ui::Input;
use crate::shared::components::ErrorBox;
use crate::shared::i18n::{use_i18n, I18nContext};
use crate::system::auth::context::use_auth;

type Getter = fn(&CreateLaboratoryRequest) -> String;
type Setter = fn(&mut CreateLaboratoryRequest, String);

fn text_field(
    vm: LaboratoryDetailsViewModel,
    i18n: I18nContext,
    label_key: &'static str,
    field: &'static str,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <Input
            label=Signal::derive(move || Some(i18n.t(label_key)))
            value=Signal::derive(move || vm.form.with(get))
            on_input=Callback::new(move |v: String| vm.form.update(|f| set(f, v)))
            // Either a label key from validate() or backend text, which t() passes through
            error=Signal::derive(move || vm.field_error(field).map(|e| i18n.t(&e)))
        />
    }
}

/// Inline form creating a laboratory
#[component]
pub fn LaboratoryDetails(on_saved: Callback<Laboratory>, on_cancel: Callback<()>) -> impl IntoView {
    let vm = LaboratoryDetailsViewModel::new();
    let (auth_state, _) = use_auth();
    let i18n = use_i18n();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(auth_state.get_untracked().api(), on_saved);
    };

    view! {
        <form class="form form--inline" on:submit=on_submit>
            <ErrorBox error=vm.error />
            <div class="form__grid">
                {text_field(vm, i18n, "common.name", "name", |f| f.name.clone(), |f, v| f.name = v)}
                {text_field(vm, i18n, "common.email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                {text_field(vm, i18n, "common.phone", "phone", |f| f.phone.clone(), |f, v| f.phone = v)}
                {text_field(vm, i18n, "laboratories.street", "address.street", |f| f.address.street.clone(), |f, v| f.address.street = v)}
                {text_field(vm, i18n, "laboratories.city", "address.city", |f| f.address.city.clone(), |f, v| f.address.city = v)}
                {text_field(vm, i18n, "laboratories.state", "address.state", |f| f.address.state.clone(), |f, v| f.address.state = v)}
                {text_field(vm, i18n, "laboratories.postal_code", "address.postal_code", |f| f.address.postal_code.clone(), |f, v| f.address.postal_code = v)}
                {text_field(vm, i18n, "laboratories.country", "address.country", |f| f.address.country.clone(), |f, v| f.address.country = v)}
            </div>
            <div class="form__actions">
                <button
                    type="submit"
                    class="button button--primary"
                    disabled=move || vm.is_saving.get()
                >
                    {move || i18n.t("common.create")}
                </button>
                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| {
                        vm.reset_form();
                        on_cancel.run(());
                    }
                >
                    {move || i18n.t("common.cancel")}
                </button>
            </div>
        </form>
    }
}
