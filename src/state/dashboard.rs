#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::api::StatusResponse;

/// One session run as the dashboard shows it.
///
/// `tracing` is client-local optimistic intent, not server truth: it is set
/// when the operator requests a trace and overwritten wholesale by the next
/// successful reconciliation cycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunState {
    pub name: String,
    pub trace_url: String,
    pub tracing: bool,
    pub stats: Option<RunStats>,
    pub traces: Vec<TraceLink>,
}

/// Aggregate statistics the server reports for a run. Display only.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct RunStats {
    #[serde(default)]
    pub runs: u64,
    #[serde(default)]
    pub traces: u64,
    #[serde(default)]
    pub runtime_avg: String,
    #[serde(default)]
    pub first_run: String,
    #[serde(default)]
    pub last_run: String,
}

/// A captured trace the server still holds for a run, with view and
/// download locations.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct TraceLink {
    pub trace_id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub download_url: String,
}

/// Everything the dashboard renders. Owned by the reconciliation poller;
/// action controllers optimistically write individual fields and expect the
/// next poll to supersede them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub running: bool,
    pub updating: bool,
    pub global_tracing: bool,
    pub runs: Vec<RunState>,
    pub connection_error: bool,
}

impl DashboardState {
    /// Replace this state with a reconciliation snapshot.
    ///
    /// The replacement is wholesale: runs absent from the response disappear,
    /// and every optimistic `tracing` flag is reset. A successful poll also
    /// clears `connection_error`.
    pub fn apply_status(&mut self, status: &StatusResponse) {
        self.running = status.running;
        self.global_tracing = status.global_tracing;
        self.runs = status
            .runs
            .iter()
            .map(|run| RunState {
                name: run.name.clone(),
                trace_url: run.trace_url.clone(),
                tracing: false,
                stats: run.stats.clone(),
                traces: run.traces.clone(),
            })
            .collect();
        self.connection_error = false;
    }

    pub fn run(&self, name: &str) -> Option<&RunState> {
        self.runs.iter().find(|r| r.name == name)
    }

    pub fn run_mut(&mut self, name: &str) -> Option<&mut RunState> {
        self.runs.iter_mut().find(|r| r.name == name)
    }
}
