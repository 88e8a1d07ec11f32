use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::i18n::I18nProvider;
use crate::shared::theme::ThemeProvider;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Tabs and the selected laboratory are shared by every page
    provide_context(AppGlobalContext::new());

    view! {
        <ThemeProvider>
            <I18nProvider>
                <AuthProvider>
                    <AppShell />
                </AuthProvider>
            </I18nProvider>
        </ThemeProvider>
    }
}
