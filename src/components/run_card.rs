//! Card for one session run: stats, recent traces, and the trace trigger.

use leptos::prelude::*;

use crate::state::dashboard::{DashboardState, RunState};

/// A card for one run. The trace button is optimistic: it shows the spinner
/// immediately and trusts the next reconciliation cycle to settle the truth.
#[component]
pub fn RunCard(run: RunState) -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();

    let name = run.name.clone();
    let tracing = {
        let name = name.clone();
        move || state.get().run(&name).is_some_and(|r| r.tracing)
    };

    let on_trace = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::api::HttpApi;
            use crate::util::task::BrowserTimer;

            let name = name.clone();
            leptos::task::spawn_local(async move {
                crate::net::actions::trace_run(&HttpApi, &BrowserTimer, &state, &name).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &name;
        }
    };

    let stats_line = run.stats.as_ref().map(|stats| {
        format!(
            "{} runs, {} traces, avg {} (first {}, last {})",
            stats.runs, stats.traces, stats.runtime_avg, stats.first_run, stats.last_run
        )
    });

    view! {
        <div class="run-card">
            <div class="run-card__header">
                <span class="run-card__name">{run.name.clone()}</span>
                <Show
                    when=tracing
                    fallback=move || {
                        view! {
                            <button class="btn btn--primary" on:click=on_trace.clone()>
                                "Trace"
                            </button>
                        }
                    }
                >
                    <span class="run-card__spinner" title="Waiting for trace..."></span>
                </Show>
            </div>
            {stats_line.map(|line| view! { <p class="run-card__stats">{line}</p> })}
            <ul class="run-card__traces">
                {run
                    .traces
                    .iter()
                    .map(|trace| {
                        view! {
                            <li class="run-card__trace">
                                <a href=trace.url.clone()>{trace.title.clone()}</a>
                                <a class="run-card__download" href=trace.download_url.clone() download="">
                                    "download"
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
