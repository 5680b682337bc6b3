//! Endpoint buttons card

use leptos::prelude::*;

use crate::actions;
use crate::api;
use crate::display::Indicator;

#[component]
pub fn EndpointsCard(
    set_text: WriteSignal<String>,
    set_indicator: WriteSignal<Indicator>,
) -> impl IntoView {
    view! {
        <div class="card">
            <h2>"Endpoints"</h2>
            <p style="color: var(--text-secondary); margin-bottom: 1rem; font-size: 0.875rem;">
                "Click a button or press Ctrl/Cmd + 1-4 to test an endpoint."
            </p>

            <div class="button-row">
                {api::ENDPOINTS
                    .into_iter()
                    .map(|path| {
                        view! {
                            <button on:click=move |_| {
                                actions::run_fetch(set_text, set_indicator, path)
                            }>
                                "GET " {path}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
                <button on:click=move |_| actions::run_echo(set_text, set_indicator)>
                    "POST " {api::ECHO_ENDPOINT}
                </button>
            </div>
        </div>
    }
}
