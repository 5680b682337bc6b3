//! Response panel - the shared display target

use leptos::prelude::*;

use crate::display::Indicator;

#[component]
pub fn ResponsePanel(
    text: ReadSignal<String>,
    indicator: ReadSignal<Indicator>,
) -> impl IntoView {
    view! {
        <div class="card">
            <h2>"Response"</h2>
            <pre
                id="response"
                class="response"
                style=move || format!("border-left: {}", indicator.get().border())
            >
                {move || text.get()}
            </pre>
        </div>
    }
}
