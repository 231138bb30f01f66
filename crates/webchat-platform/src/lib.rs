//! Browser adapters for the `webchat-core` port traits.
//!
//! Everything in this crate touches the DOM or a browser API and is
//! therefore WASM-only; the core stays pure Rust and testable natively.

pub mod clock;
pub mod cookies;
pub mod http;
pub mod navigation;
pub mod storage;

pub use clock::BrowserClock;
pub use cookies::BrowserCookies;
pub use http::FetchHttp;
pub use navigation::BrowserNavigator;
