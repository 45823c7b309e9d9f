//! Spawning and sleeping as capabilities.
//!
//! The poller and controllers never reach for a global executor or timer
//! directly; they take these traits, so native tests can drive them with a
//! `futures` local pool and instant fake timers.

use std::future::Future;

/// Fire a future on the single-threaded task queue.
pub trait Spawn {
    fn spawn(&self, fut: impl Future<Output = ()> + 'static);
}

/// Non-blocking sleep; a suspension point, not a busy wait.
#[allow(async_fn_in_trait)]
pub trait Timer {
    async fn sleep(&self, ms: u32);
}

/// Browser task queue via `wasm-bindgen-futures`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTasks;

#[cfg(feature = "hydrate")]
impl Spawn for BrowserTasks {
    fn spawn(&self, fut: impl Future<Output = ()> + 'static) {
        wasm_bindgen_futures::spawn_local(fut);
    }
}

/// Browser timer via `gloo-timers`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

#[cfg(feature = "hydrate")]
impl Timer for BrowserTimer {
    async fn sleep(&self, ms: u32) {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
    }
}
