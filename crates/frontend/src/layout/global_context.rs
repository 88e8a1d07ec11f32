use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

const LABORATORY_STORAGE_KEY: &str = "app-laboratory";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    /// Laboratory the lab-scoped pages work against
    pub current_laboratory: RwSignal<Option<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            current_laboratory: RwSignal::new(load_laboratory_from_storage()),
        }
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        match active_from_query(&search) {
            Some(active_key) => self.open_tab(&active_key),
            None => self.open_tab(super::tabs::DEFAULT_TAB),
        }

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                let new_url = query_for_active(&active_key);

                let current_search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();

                // Only update URL if it actually changed
                if current_search != new_url {
                    if let Some(w) = window() {
                        if let Ok(history) = w.history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(&new_url),
                            );
                        }
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str) {
        log::debug!("open_tab: key='{}'", key);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        let active = self.active.get_untracked();
        let mut next_active = None;
        self.opened.update(|tabs| {
            next_active = close_and_pick_next(tabs, key, active.as_deref());
        });
        self.active.set(next_active);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    /// Switch the lab-scoped pages to another laboratory
    pub fn select_laboratory(&self, id: Option<String>) {
        log::info!("current laboratory: {:?}", id);
        save_laboratory_to_storage(id.as_deref());
        self.current_laboratory.set(id);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    /// Registry key, also the `?active=` value
    pub key: String,
}

/// Active tab key from a `?active=<key>` location search
pub fn active_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|key| !key.is_empty()).cloned()
}

/// Location search mirroring the active tab
pub fn query_for_active(key: &str) -> String {
    let query_string =
        serde_qs::to_string(&HashMap::from([("active".to_string(), key.to_string())]))
            .unwrap_or_default();
    format!("?{}", query_string)
}

/// Removes `key` and returns the tab that should be active afterwards
fn close_and_pick_next(tabs: &mut Vec<Tab>, key: &str, active: Option<&str>) -> Option<String> {
    tabs.retain(|tab| tab.key != key);
    if active == Some(key) {
        tabs.last().map(|t| t.key.clone())
    } else {
        active.map(str::to_string)
    }
}

fn load_laboratory_from_storage() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LABORATORY_STORAGE_KEY).ok().flatten())
        .filter(|id| !id.is_empty())
}

fn save_laboratory_to_storage(id: Option<&str>) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = match id {
            Some(id) => storage.set_item(LABORATORY_STORAGE_KEY, id),
            None => storage.remove_item(LABORATORY_STORAGE_KEY),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(keys: &[&str]) -> Vec<Tab> {
        keys.iter().map(|k| Tab { key: k.to_string() }).collect()
    }

    #[test]
    fn test_active_from_query() {
        assert_eq!(active_from_query("?active=a005_orders"), Some("a005_orders".to_string()));
        assert_eq!(active_from_query("active=d400_overview&x=1"), Some("d400_overview".to_string()));
        assert_eq!(active_from_query(""), None);
        assert_eq!(active_from_query("?active="), None);
    }

    #[test]
    fn test_query_round_trips_through_location() {
        let search = query_for_active("a002_clients");
        assert_eq!(search, "?active=a002_clients");
        assert_eq!(active_from_query(&search), Some("a002_clients".to_string()));
    }

    #[test]
    fn test_closing_active_tab_activates_last() {
        let mut opened = tabs(&["d400_overview", "a002_clients", "a005_orders"]);
        let next = close_and_pick_next(&mut opened, "a002_clients", Some("a002_clients"));
        assert_eq!(next.as_deref(), Some("a005_orders"));
        assert_eq!(opened, tabs(&["d400_overview", "a005_orders"]));
    }

    #[test]
    fn test_closing_other_tab_keeps_active() {
        let mut opened = tabs(&["d400_overview", "a002_clients"]);
        let next = close_and_pick_next(&mut opened, "a002_clients", Some("d400_overview"));
        assert_eq!(next.as_deref(), Some("d400_overview"));
    }

    #[test]
    fn test_closing_last_tab_leaves_none() {
        let mut opened = tabs(&["d400_overview"]);
        assert_eq!(close_and_pick_next(&mut opened, "d400_overview", Some("d400_overview")), None);
        assert!(opened.is_empty());
    }
}
