//! Clock backed by `setTimeout` via gloo-timers.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use webchat_core::ports::ClockPort;

pub struct BrowserClock;

impl BrowserClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ClockPort for BrowserClock {
    async fn sleep(&self, ms: u64) {
        TimeoutFuture::new(ms as u32).await;
    }
}
