use std::collections::HashMap;

use leptos::prelude::*;
use web_sys::window;

/// Pages reachable from the sidebar. The active route is plain client
/// state; selections inside a page are discarded when the user navigates
/// away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Requests,
    Reports,
    NewResignation,
    NewReplacement,
    NewWorkplaceChange,
}

impl Route {
    pub fn key(&self) -> &'static str {
        match self {
            Route::Requests => "requests",
            Route::Reports => "reports",
            Route::NewResignation => "requests_new_resignation",
            Route::NewReplacement => "requests_new_replacement",
            Route::NewWorkplaceChange => "requests_new_workplace_change",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "requests" => Some(Route::Requests),
            "reports" => Some(Route::Reports),
            "requests_new_resignation" => Some(Route::NewResignation),
            "requests_new_replacement" => Some(Route::NewReplacement),
            "requests_new_workplace_change" => Some(Route::NewWorkplaceChange),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Requests => "Requests",
            Route::Reports => "Management reports",
            Route::NewResignation => "New resignation request",
            Route::NewReplacement => "New replacement request",
            Route::NewWorkplaceChange => "New workplace change request",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub route: RwSignal<Route>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(Route::Requests),
            left_open: RwSignal::new(true),
        }
    }

    /// Navigation collaborator: pages call this after a successful submit
    /// or an explicit cancel.
    pub fn goto(&self, route: Route) {
        self.route.set(route);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    /// Restore the active page from `?page=` on load and keep the URL in
    /// sync afterwards, so a refresh lands on the same page.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(route) = params.get("page").and_then(|key| Route::from_key(key)) {
            self.route.set(route);
        }

        let this = *self;
        Effect::new(move |_| {
            let key = this.route.get().key();
            let query_string =
                serde_qs::to_string(&HashMap::from([("page".to_string(), key.to_string())]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only touch history when the URL actually changed.
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
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_keys_round_trip() {
        for route in [
            Route::Requests,
            Route::Reports,
            Route::NewResignation,
            Route::NewReplacement,
            Route::NewWorkplaceChange,
        ] {
            assert_eq!(Route::from_key(route.key()), Some(route));
        }
        assert_eq!(Route::from_key("unknown"), None);
    }
}
