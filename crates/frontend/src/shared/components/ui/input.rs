use leptos::prelude::*;

/// Input component with label and field error support
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(into, optional)]
    label: Signal<Option<String>>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Input type: "text" (default), "email", "tel", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Validation message shown under the field
    #[prop(into, optional)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <input
                class="form__input"
                class:form__input--invalid=move || error.get().is_some()
                type=input_t
                value=move || value.get()
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || error.get().map(|e| view! {
                <div class="form__error">{e}</div>
            })}
        </div>
    }
}
