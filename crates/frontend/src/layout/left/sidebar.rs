//! Sidebar with collapsible navigation groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_key;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use contracts::domain::a001_laboratory::aggregate::Laboratory;
use contracts::domain::a002_client::aggregate::Client;
use contracts::domain::a003_technician::aggregate::Technician;
use contracts::domain::a004_prosthesis::aggregate::Prosthesis;
use contracts::domain::a005_order::aggregate::Order;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    /// Tab key opened on click
    pub key: String,
    pub icon: &'static str,
}

impl NavItem {
    fn new(key: impl Into<String>, icon: &'static str) -> Self {
        Self {
            key: key.into(),
            icon,
        }
    }

    pub fn label_key(&self) -> &str {
        tab_label_key(&self.key)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavGroup {
    pub id: &'static str,
    pub label_key: &'static str,
    pub items: Vec<NavItem>,
}

pub fn nav_groups() -> Vec<NavGroup> {
    vec![
        NavGroup {
            id: "general",
            label_key: "nav.general",
            items: vec![
                NavItem::new("d400_overview", "dashboard"),
                NavItem::new(Laboratory::full_name(), "laboratory"),
                NavItem::new(Client::full_name(), "clients"),
                NavItem::new(Order::full_name(), "orders"),
                NavItem::new(Prosthesis::full_name(), "prosthesis"),
                NavItem::new(Technician::full_name(), "technicians"),
            ],
        },
        NavGroup {
            id: "settings",
            label_key: "nav.settings",
            items: vec![
                NavItem::new("sys_profile", "user"),
                NavItem::new("sys_account", "settings"),
                NavItem::new("sys_appearance", "palette"),
                NavItem::new("sys_notifications", "bell"),
                NavItem::new("sys_display", "monitor"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let i18n = use_i18n();

    let expanded_groups = RwSignal::new(vec!["general".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {nav_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();

                view! {
                    <div>
                        <div
                            class="app-sidebar__item app-sidebar__group"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                <span>{move || i18n.t(group.label_key)}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {group.items.clone().into_iter().map(|item| {
                                    let key = StoredValue::new(item.key.clone());
                                    let label_key = item.label_key().to_string();
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                key.with_value(|k| ctx.active.get().as_deref() == Some(k.as_str()))
                                            }
                                            on:click=move |_| key.with_value(|k| ctx.open_tab(k))
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(item.icon)}
                                                <span>{move || i18n.t(&label_key)}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
