//! Server API capability and its HTTP implementation.
//!
//! Client-side (hydrate): real GETs via `gloo-net`.
//! Natively: tests substitute fakes for the `Api` trait; there is no
//! server-side rendition of these endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into `ApiError`, transport trouble and non-ok
//! statuses alike. Callers flip `connection_error` and move on; nothing here
//! distinguishes a timeout from a 500.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::dashboard::{RunStats, TraceLink};

/// Reconciliation endpoint.
pub const STATUS_ENDPOINT: &str = "/update";
/// Global tracing trigger endpoints. Idempotent, body ignored.
pub const ENABLE_GLOBAL_TRACING_ENDPOINT: &str = "/enable_global_tracing";
pub const DISABLE_GLOBAL_TRACING_ENDPOINT: &str = "/disable_global_tracing";
/// Fire-and-forget server shutdown.
pub const KILL_SERVER_ENDPOINT: &str = "/kill_tracing_server";
/// Session snapshot download, linked directly from the control bar.
pub const SAVE_SESSION_ENDPOINT: &str = "/save_session";

/// A request failure, as far as the dashboard cares.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
}

/// One run in the reconciliation payload. `stats` and `traces` are optional
/// extras the server includes for display.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct RunSnapshot {
    pub name: String,
    pub trace_url: String,
    #[serde(default)]
    pub stats: Option<RunStats>,
    #[serde(default)]
    pub traces: Vec<TraceLink>,
}

/// The authoritative server state returned by [`STATUS_ENDPOINT`].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct StatusResponse {
    pub running: bool,
    pub global_tracing: bool,
    #[serde(default)]
    pub runs: Vec<RunSnapshot>,
}

/// What the control loop needs from the server. All requests are plain GETs
/// with no body; only the status fetch parses a response.
#[allow(async_fn_in_trait)]
pub trait Api {
    /// Fetch the authoritative dashboard snapshot.
    async fn fetch_status(&self) -> Result<StatusResponse, ApiError>;

    /// Trigger a trace capture for one run. The URL is per-run data.
    async fn trigger_trace(&self, trace_url: &str) -> Result<(), ApiError>;

    async fn enable_global_tracing(&self) -> Result<(), ApiError>;

    async fn disable_global_tracing(&self) -> Result<(), ApiError>;

    /// Ask the server to shut down. Fire-and-forget.
    async fn kill_server(&self) -> Result<(), ApiError>;
}

/// `Api` over real browser fetches.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

#[cfg(feature = "hydrate")]
impl Api for HttpApi {
    async fn fetch_status(&self) -> Result<StatusResponse, ApiError> {
        let resp = gloo_net::http::Request::get(STATUS_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<StatusResponse>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    async fn trigger_trace(&self, trace_url: &str) -> Result<(), ApiError> {
        get_ok(trace_url).await
    }

    async fn enable_global_tracing(&self) -> Result<(), ApiError> {
        get_ok(ENABLE_GLOBAL_TRACING_ENDPOINT).await
    }

    async fn disable_global_tracing(&self) -> Result<(), ApiError> {
        get_ok(DISABLE_GLOBAL_TRACING_ENDPOINT).await
    }

    async fn kill_server(&self) -> Result<(), ApiError> {
        get_ok(KILL_SERVER_ENDPOINT).await
    }
}

/// GET a trigger endpoint; any ok status is success, the body is ignored.
#[cfg(feature = "hydrate")]
async fn get_ok(url: &str) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if resp.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(resp.status()))
    }
}
