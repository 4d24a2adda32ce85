use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use super::tabs::tab_labels::tab_label_for_key;

/// Tab registry and sidebar state shared by the whole shell.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the tab named by `?active=` and keeps the URL in sync with
    /// the active tab afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active").cloned() {
            self.open_tab(&active_key, tab_label_for_key(&active_key));
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(Ok(history)) = window().map(|w| w.history()) {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("open_tab: key='{}', title='{}'", key, title);
        self.opened.update(|tabs| {
            if open_or_keep(tabs, key, title) {
                leptos::logging::log!("Tab added. Total tabs: {}", tabs.len());
            }
        });
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("close_tab: key='{}'", key);
        let was_active = self
            .active
            .with_untracked(|active| active.as_deref() == Some(key));
        let mut next_active = None;
        self.opened.update(|tabs| {
            next_active = close_and_pick_next(tabs, key);
        });
        if was_active {
            leptos::logging::log!("Next active tab: {:?}", next_active);
            self.active.set(next_active);
        }
    }

    /// Drops every tab; used on logout so the next user starts clean.
    pub fn close_all(&self) {
        self.opened.set(vec![]);
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Appends the tab unless a tab with that key is already open.
/// Returns whether a tab was added.
fn open_or_keep(tabs: &mut Vec<Tab>, key: &str, title: &str) -> bool {
    if tabs.iter().any(|tab| tab.key == key) {
        return false;
    }
    tabs.push(Tab {
        key: key.to_string(),
        title: title.to_string(),
    });
    true
}

/// Removes the tab and returns the key that should become active: the tab
/// that took the closed one's place, else the new last tab.
fn close_and_pick_next(tabs: &mut Vec<Tab>, key: &str) -> Option<String> {
    let pos = tabs.iter().position(|tab| tab.key == key);
    tabs.retain(|tab| tab.key != key);
    match pos {
        Some(i) if i < tabs.len() => Some(tabs[i].key.clone()),
        _ => tabs.last().map(|t| t.key.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(tabs: &[Tab]) -> Vec<&str> {
        tabs.iter().map(|t| t.key.as_str()).collect()
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut tabs = vec![];
        assert!(open_or_keep(&mut tabs, "a002_inventory", "Inventory"));
        assert!(!open_or_keep(&mut tabs, "a002_inventory", "Inventory"));
        assert!(open_or_keep(&mut tabs, "a003_promotion", "Promotions"));
        assert_eq!(keys(&tabs), vec!["a002_inventory", "a003_promotion"]);
    }

    #[test]
    fn test_close_picks_neighbour() {
        let mut tabs = vec![];
        for key in ["a", "b", "c"] {
            open_or_keep(&mut tabs, key, key);
        }
        assert_eq!(close_and_pick_next(&mut tabs, "b"), Some("c".to_string()));
        assert_eq!(close_and_pick_next(&mut tabs, "c"), Some("a".to_string()));
        assert_eq!(close_and_pick_next(&mut tabs, "a"), None);
        assert!(tabs.is_empty());
    }
}
