//! In-memory store. Fallback when Web Storage is unavailable;
//! nothing survives a reload.

use std::cell::RefCell;
use std::collections::HashMap;

use webchat_core::ports::KeyValuePort;

pub struct MemoryStore {
    data: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            data: RefCell::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValuePort for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.data.borrow_mut().remove(key);
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}
