//! Web Storage adapter covering both `sessionStorage` and `localStorage`.

use web_sys::Storage;

use webchat_core::ports::KeyValuePort;

pub struct WebStore {
    storage: Storage,
    name: &'static str,
}

impl WebStore {
    /// Tab-scoped `sessionStorage`, if the browser exposes it.
    pub fn session() -> Option<Self> {
        let storage = gloo_utils::window().session_storage().ok()??;
        Some(Self {
            storage,
            name: "sessionStorage",
        })
    }

    /// Origin-scoped `localStorage`, if the browser exposes it.
    pub fn local() -> Option<Self> {
        let storage = gloo_utils::window().local_storage().ok()??;
        Some(Self {
            storage,
            name: "localStorage",
        })
    }
}

impl KeyValuePort for WebStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        // Quota or security failures are logged and swallowed; the app
        // keeps working with whatever state it has in memory.
        if self.storage.set_item(key, value).is_err() {
            log::warn!("{}: failed to write key {}", self.name, key);
        }
    }

    fn remove(&self, key: &str) {
        if self.storage.remove_item(key).is_err() {
            log::warn!("{}: failed to remove key {}", self.name, key);
        }
    }

    fn backend_name(&self) -> &str {
        self.name
    }
}
