//! Key-value storage backends.
//!
//! Session storage holds the session token and user identity (tab-scoped,
//! gone when the tab closes); local storage holds the conversation id so
//! a reload resumes the thread. Both fall back to an in-memory store when
//! Web Storage is unavailable (private browsing, storage disabled).

mod memory;
mod web;

pub use memory::MemoryStore;
pub use web::WebStore;

use std::rc::Rc;

use webchat_core::ports::KeyValuePort;

/// Tab-scoped session storage, or memory if unavailable.
pub fn session_store() -> Rc<dyn KeyValuePort> {
    match WebStore::session() {
        Some(store) => Rc::new(store),
        None => {
            log::warn!("sessionStorage unavailable, session will not survive navigation");
            Rc::new(MemoryStore::new())
        }
    }
}

/// Persistent local storage, or memory if unavailable.
pub fn local_store() -> Rc<dyn KeyValuePort> {
    match WebStore::local() {
        Some(store) => Rc::new(store),
        None => {
            log::warn!("localStorage unavailable, conversation will not survive reload");
            Rc::new(MemoryStore::new())
        }
    }
}
