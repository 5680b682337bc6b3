//! ==============================================================================
//! lib.rs - Aelys HTTP Server Dashboard
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm client for the aelys http server demo api.
//!     renders raw json responses into the response panel and wires
//!     ctrl/cmd + 1-4 shortcuts to the four demo endpoints.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - calls the api via fetch, same origin as the server
//!
//! ==============================================================================

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod actions;
mod api;
mod banner;
mod components;
mod display;
mod shortcuts;

use components::{EndpointsCard, Header, ResponsePanel};
use display::Indicator;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    banner::print_welcome();
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    // the display target, shared by the buttons and the shortcuts.
    // concurrent requests race and the last one to settle wins.
    let (text, set_text) = signal("No request yet.".to_string());
    let (indicator, set_indicator) = signal(Indicator::Unset);

    shortcuts::register(set_text, set_indicator);

    view! {
        <Header />
        <div class="container">
            <EndpointsCard set_text=set_text set_indicator=set_indicator />
            <ResponsePanel text=text indicator=indicator />
        </div>
    }
}
