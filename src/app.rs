//! Root dashboard component: provides the shared state context and owns the
//! polling timer's lifecycle.

use leptos::prelude::*;

use crate::components::control_bar::ControlBar;
use crate::components::run_card::RunCard;
use crate::state::dashboard::DashboardState;

/// Dashboard root.
///
/// Creates the one `DashboardState`, starts the reconciliation poller on
/// mount, and stops it on cleanup. Stopping only cancels future cycles; a
/// cycle already in flight finishes on its own.
#[component]
pub fn DashboardApp() -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());
    provide_context(state);

    #[cfg(feature = "hydrate")]
    {
        use crate::net::api::HttpApi;
        use crate::net::poll::Poller;
        use crate::util::task::{BrowserTasks, BrowserTimer};

        let poller = Poller::start(HttpApi, BrowserTimer, state, BrowserTasks);
        on_cleanup(move || poller.stop());
    }

    let runs = move || state.get().runs;

    view! {
        <div class="dashboard">
            <ControlBar/>
            <div class="dashboard__runs">
                <For each=runs key=|run| run.name.clone() let:run>
                    <RunCard run=run/>
                </For>
            </div>
        </div>
    }
}
