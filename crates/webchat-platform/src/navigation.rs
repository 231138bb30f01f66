//! Location and History API adapter.

use wasm_bindgen::JsValue;

use webchat_core::ports::NavigatorPort;

pub struct BrowserNavigator;

impl BrowserNavigator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigatorPort for BrowserNavigator {
    fn current_path(&self) -> String {
        gloo_utils::window()
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string())
    }

    fn current_query(&self) -> String {
        gloo_utils::window()
            .location()
            .search()
            .unwrap_or_default()
    }

    fn push(&self, path_and_query: &str) {
        let result = gloo_utils::window()
            .history()
            .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(path_and_query)));
        if result.is_err() {
            log::warn!("pushState to {} failed", path_and_query);
        }
    }
}
