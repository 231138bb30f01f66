//! WASM-target tests for webchat-platform (Node.js runtime).
//!
//! Tests MemoryStore and cookie parsing under wasm32-unknown-unknown
//! via `wasm-pack test --node`. Adapters that need a real DOM
//! (WebStore, BrowserCookies, BrowserNavigator) require a browser run.

use wasm_bindgen_test::*;

use webchat_core::ports::KeyValuePort;
use webchat_platform::cookies::parse_cookie;
use webchat_platform::storage::MemoryStore;

// ─── MemoryStore Tests ───────────────────────────────────

#[wasm_bindgen_test]
fn memory_store_backend_name() {
    let store = MemoryStore::new();
    assert_eq!(store.backend_name(), "memory");
}

#[wasm_bindgen_test]
fn memory_store_get_missing() {
    let store = MemoryStore::new();
    assert!(store.get("nonexistent").is_none());
}

#[wasm_bindgen_test]
fn memory_store_set_and_get() {
    let store = MemoryStore::new();
    store.set("session_token", "tok-123");
    assert_eq!(store.get("session_token").as_deref(), Some("tok-123"));
}

#[wasm_bindgen_test]
fn memory_store_overwrite() {
    let store = MemoryStore::new();
    store.set("key", "v1");
    store.set("key", "v2");
    assert_eq!(store.get("key").as_deref(), Some("v2"));
}

#[wasm_bindgen_test]
fn memory_store_remove() {
    let store = MemoryStore::new();
    store.set("key", "val");
    store.remove("key");
    assert!(store.get("key").is_none());
}

#[wasm_bindgen_test]
fn memory_store_remove_nonexistent() {
    let store = MemoryStore::new();
    store.remove("nonexistent");
}

#[wasm_bindgen_test]
fn memory_store_empty_value() {
    let store = MemoryStore::new();
    store.set("empty", "");
    assert_eq!(store.get("empty").as_deref(), Some(""));
}

#[wasm_bindgen_test]
fn memory_store_unicode() {
    let store = MemoryStore::new();
    store.set("greeting", "你好 🌍");
    assert_eq!(store.get("greeting").as_deref(), Some("你好 🌍"));
}

// ─── Cookie Parsing Tests ────────────────────────────────

#[wasm_bindgen_test]
fn parse_cookie_single() {
    assert_eq!(
        parse_cookie("session_token=abc123", "session_token").as_deref(),
        Some("abc123")
    );
}

#[wasm_bindgen_test]
fn parse_cookie_among_many() {
    let header = "theme=dark; session_token=tok-9; lang=en";
    assert_eq!(
        parse_cookie(header, "session_token").as_deref(),
        Some("tok-9")
    );
}

#[wasm_bindgen_test]
fn parse_cookie_missing() {
    assert!(parse_cookie("theme=dark; lang=en", "session_token").is_none());
}

#[wasm_bindgen_test]
fn parse_cookie_empty_value_is_absent() {
    // A cleared cookie (`name=`) must not count as a session
    assert!(parse_cookie("session_token=", "session_token").is_none());
}

#[wasm_bindgen_test]
fn parse_cookie_name_is_not_a_prefix_match() {
    assert!(parse_cookie("session_token_v2=abc", "session_token").is_none());
}

#[wasm_bindgen_test]
fn parse_cookie_empty_header() {
    assert!(parse_cookie("", "session_token").is_none());
}

#[wasm_bindgen_test]
fn parse_cookie_malformed_pair_is_skipped() {
    assert_eq!(
        parse_cookie("garbage; session_token=ok", "session_token").as_deref(),
        Some("ok")
    );
}
