//! Top control bar: server status, global tracing toggle, kill button,
//! session download link.

use leptos::prelude::*;

use crate::net::api::SAVE_SESSION_ENDPOINT;
use crate::state::dashboard::DashboardState;

/// Control bar across the top of the dashboard.
///
/// Shows the running/updating indicators and the persistent connection-error
/// badge (cleared only by the next successful poll), and hosts the global
/// actions.
#[component]
pub fn ControlBar() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();

    let running_label = move || {
        if state.get().running { "Session running" } else { "Session stopped" }
    };

    let on_toggle_global = move |_| {
        let enabled = state.with_untracked(|s| s.global_tracing);
        #[cfg(feature = "hydrate")]
        {
            use crate::net::api::HttpApi;
            use crate::util::confirm::BrowserConfirm;
            use crate::util::task::BrowserTimer;

            leptos::task::spawn_local(async move {
                if enabled {
                    crate::net::actions::disable_global_tracing(&HttpApi, &BrowserTimer, &state)
                        .await;
                } else {
                    crate::net::actions::enable_global_tracing(
                        &HttpApi,
                        &BrowserTimer,
                        &BrowserConfirm,
                        &state,
                    )
                    .await;
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = enabled;
        }
    };

    let on_kill = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::api::HttpApi;
            use crate::util::confirm::BrowserConfirm;

            leptos::task::spawn_local(async move {
                crate::net::actions::kill_server(&HttpApi, &BrowserConfirm, &state).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &state;
        }
    };

    view! {
        <header class="control-bar">
            <span class="control-bar__status">
                {running_label}
            </span>
            <Show when=move || state.get().updating>
                <span class="control-bar__spinner" title="Refreshing..."></span>
            </Show>
            <Show when=move || state.get().connection_error>
                <span class="control-bar__error">"Connection lost"</span>
            </Show>
            <span class="control-bar__spacer"></span>
            <button
                class="btn"
                class=("btn--active", move || state.get().global_tracing)
                on:click=on_toggle_global
            >
                {move || {
                    if state.get().global_tracing {
                        "Disable Global Tracing"
                    } else {
                        "Enable Global Tracing"
                    }
                }}
            </button>
            <a class="btn" href=SAVE_SESSION_ENDPOINT download="">
                "Save Session"
            </a>
            <button class="btn btn--danger" on:click=on_kill>
                "Kill Server"
            </button>
        </header>
    }
}
