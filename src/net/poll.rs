//! Reconciliation poller.
//!
//! Every [`POLL_INTERVAL_MS`] the poller fires one cycle: mark the state
//! `updating`, fetch the authoritative snapshot, replace the state wholesale.
//! Cycles are spawned, never awaited, so a round trip slower than the
//! interval overlaps the next tick and the later response wins; that is the
//! contract, not an accident to guard against. Failures flip
//! `connection_error` and wait for the next tick; there is no retry or
//! backoff.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::api::Api;
use crate::state::handle::StateHandle;
use crate::util::task::{Spawn, Timer};

/// Delay between reconciliation cycles.
pub const POLL_INTERVAL_MS: u32 = 5_000;
/// How long a successful cycle keeps the `updating` indicator lit.
pub const SETTLE_MS: u32 = 1_000;

/// Run one reconciliation cycle against the server.
///
/// On success the snapshot replaces the state and `updating` clears after a
/// short settle delay; on failure `connection_error` is set and `updating`
/// clears immediately.
pub async fn run_cycle<A, T, S>(api: &A, timer: &T, state: &S)
where
    A: Api,
    T: Timer,
    S: StateHandle,
{
    state.update(|s| s.updating = true);

    match api.fetch_status().await {
        Ok(status) => {
            state.update(|s| s.apply_status(&status));
            timer.sleep(SETTLE_MS).await;
            state.update(|s| s.updating = false);
        }
        Err(err) => {
            log::warn!("status poll failed: {err}");
            state.update(|s| {
                s.connection_error = true;
                s.updating = false;
            });
        }
    }
}

/// The repeating poll schedule: fire a cycle immediately, then one per
/// interval until the stop flag is set. Each cycle runs as its own task so a
/// slow cycle never delays the schedule.
pub async fn poll_loop<A, T, S, P>(api: A, timer: T, state: S, tasks: P, stopped: Arc<AtomicBool>)
where
    A: Api + Clone + 'static,
    T: Timer + Clone + 'static,
    S: StateHandle + 'static,
    P: Spawn,
{
    loop {
        if stopped.load(Ordering::Relaxed) {
            break;
        }
        let cycle_api = api.clone();
        let cycle_timer = timer.clone();
        let cycle_state = state.clone();
        tasks.spawn(async move {
            run_cycle(&cycle_api, &cycle_timer, &cycle_state).await;
        });
        timer.sleep(POLL_INTERVAL_MS).await;
    }
}

/// Handle to a running poll schedule. The stop flag is atomic so the handle
/// can ride along in `Send + Sync` cleanup closures; everything it guards
/// still runs on the one UI thread.
pub struct Poller {
    stopped: Arc<AtomicBool>,
}

impl Poller {
    /// Start polling. The first cycle fires immediately.
    pub fn start<A, T, S, P>(api: A, timer: T, state: S, tasks: P) -> Self
    where
        A: Api + Clone + 'static,
        T: Timer + Clone + 'static,
        S: StateHandle + 'static,
        P: Spawn + Clone + 'static,
    {
        let stopped = Arc::new(AtomicBool::new(false));
        let loop_tasks = tasks.clone();
        tasks.spawn(poll_loop(api, timer, state, loop_tasks, Arc::clone(&stopped)));
        Self { stopped }
    }

    /// Cancel the schedule. Idempotent. A cycle already in flight still runs
    /// to completion; no further cycles start.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }
}
