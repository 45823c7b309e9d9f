//! Optimistic action controllers.
//!
//! Every action follows the same shape: mutate the local state first so the
//! UI responds immediately, issue one request, then reconcile. Success hands
//! authority back to a full reconciliation cycle; failure reverts the
//! optimistic write deterministically and flips `connection_error`. A
//! declined confirmation is a true no-op: no mutation, no request.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use crate::net::api::Api;
use crate::net::poll::run_cycle;
use crate::state::handle::StateHandle;
use crate::util::confirm::Confirm;
use crate::util::task::Timer;

/// Prompt shown before enabling global tracing.
pub const ENABLE_GLOBAL_TRACING_PROMPT: &str =
    "Global tracing imposes a significant runtime overhead. Continue?";
/// Prompt shown before killing the tracing server.
pub const KILL_SERVER_PROMPT: &str = "Are you sure?";

/// Trigger a trace capture for one run.
///
/// Marks the run as tracing up front; a successful trigger starts a full
/// reconciliation cycle (whose response is authoritative and may clear the
/// flag again), a failed one reverts the flag and leaves every other run
/// untouched. Unknown run names do nothing.
pub async fn trace_run<A, T, S>(api: &A, timer: &T, state: &S, run_name: &str)
where
    A: Api,
    T: Timer,
    S: StateHandle,
{
    let Some(trace_url) = state.with(|s| s.run(run_name).map(|r| r.trace_url.clone())) else {
        return;
    };

    state.update(|s| {
        if let Some(run) = s.run_mut(run_name) {
            run.tracing = true;
        }
    });

    match api.trigger_trace(&trace_url).await {
        Ok(()) => {
            state.update(|s| s.connection_error = false);
            run_cycle(api, timer, state).await;
        }
        Err(err) => {
            log::warn!("trace trigger failed for {run_name}: {err}");
            state.update(|s| {
                if let Some(run) = s.run_mut(run_name) {
                    run.tracing = false;
                }
                s.connection_error = true;
            });
        }
    }
}

/// Enable global tracing, after the operator confirms.
///
/// Declining the confirmation performs no mutation and issues no request.
pub async fn enable_global_tracing<A, T, C, S>(api: &A, timer: &T, confirm: &C, state: &S)
where
    A: Api,
    T: Timer,
    C: Confirm,
    S: StateHandle,
{
    if !confirm.confirm(ENABLE_GLOBAL_TRACING_PROMPT).await {
        return;
    }

    state.update(|s| s.global_tracing = true);

    match api.enable_global_tracing().await {
        Ok(()) => {
            state.update(|s| s.connection_error = false);
            run_cycle(api, timer, state).await;
        }
        Err(err) => {
            log::warn!("enable global tracing failed: {err}");
            state.update(|s| {
                s.global_tracing = false;
                s.connection_error = true;
            });
        }
    }
}

/// Disable global tracing. No confirmation.
pub async fn disable_global_tracing<A, T, S>(api: &A, timer: &T, state: &S)
where
    A: Api,
    T: Timer,
    S: StateHandle,
{
    state.update(|s| s.global_tracing = false);

    match api.disable_global_tracing().await {
        Ok(()) => {
            state.update(|s| s.connection_error = false);
            run_cycle(api, timer, state).await;
        }
        Err(err) => {
            log::warn!("disable global tracing failed: {err}");
            state.update(|s| {
                s.global_tracing = true;
                s.connection_error = true;
            });
        }
    }
}

/// Shut the tracing server down, after the operator confirms.
///
/// Fire-and-forget: no optimistic mutation and no reconciliation afterwards,
/// only the connection indicator moves.
pub async fn kill_server<A, C, S>(api: &A, confirm: &C, state: &S)
where
    A: Api,
    C: Confirm,
    S: StateHandle,
{
    if !confirm.confirm(KILL_SERVER_PROMPT).await {
        return;
    }

    match api.kill_server().await {
        Ok(()) => state.update(|s| s.connection_error = false),
        Err(err) => {
            log::warn!("kill server failed: {err}");
            state.update(|s| s.connection_error = true);
        }
    }
}
