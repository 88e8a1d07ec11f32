use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: Signal<String>,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Formatted value (None = loading/error)
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || value.get().unwrap_or_else(|| "-".to_string());

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{move || label.get()}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
