//! Timer adapter backed by `setTimeout` via gloo-timers.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use vault_core::ports::DelayPort;

pub struct GlooDelay;

#[async_trait(?Send)]
impl DelayPort for GlooDelay {
    async fn sleep(&self, ms: u32) {
        if ms == 0 {
            return;
        }
        TimeoutFuture::new(ms).await;
    }
}
