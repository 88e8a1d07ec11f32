use leptos::prelude::*;

/// PageHeader component: title row with action buttons for tab pages
#[component]
pub fn PageHeader(
    /// Page title
    #[prop(into)]
    title: Signal<String>,

    /// Optional subtitle
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,

    /// Action buttons
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{move || title.get()}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_with_and_without_actions() {
        let owner = Owner::new();
        owner.with(|| {
            let _plain = view! {
                <PageHeader title=Signal::derive(|| "Painel".to_string()) />
            };
            let _with_actions = view! {
                <PageHeader
                    title=Signal::derive(|| "Pedidos".to_string())
                    subtitle=Signal::derive(|| Some("Pedidos do laboratório".to_string()))
                >
                    <button class="button">"Atualizar"</button>
                </PageHeader>
            };
        });
    }
}
