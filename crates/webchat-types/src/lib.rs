pub mod auth;
pub mod chat;
pub mod config;
pub mod error;
pub mod event;
pub mod message;
pub mod route;

#[cfg(test)]
mod tests;

pub use error::{ApiError, ApiErrorCode};
pub type Result<T> = std::result::Result<T, ApiError>;
