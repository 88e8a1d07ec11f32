//! Application shell: the auth gate and the main layout behind it.

use crate::layout::center::tabs::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use leptos::prelude::*;

/// Sidebar plus tabs, with the active tab mirrored into `?active=`
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

/// Shows the sign-in page until a user is signed in
#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <RequireAuth>
            <MainLayout />
        </RequireAuth>
    }
}
