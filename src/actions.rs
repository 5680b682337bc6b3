//! Actions shared by the endpoint buttons and the keyboard shortcuts.
//!
//! Each action sets the loading placeholder, spawns the network call on
//! the local task queue, and writes the rendered outcome back into the
//! display signals. Nothing is cancelled or sequenced: overlapping
//! requests race and the last settlement wins.

use leptos::prelude::*;

use crate::api;
use crate::display::{render_outcome, Indicator};

const LOADING_GET: &str = "Loading...";
const LOADING_ECHO: &str = "Sending POST request...";

/// fetch a GET endpoint and render the outcome into the display target
pub fn run_fetch(
    set_text: WriteSignal<String>,
    set_indicator: WriteSignal<Indicator>,
    path: &'static str,
) {
    // loading updates the text only; the indicator keeps its previous
    // value until this request settles
    set_text.set(LOADING_GET.to_string());

    leptos::task::spawn_local(async move {
        let (text, indicator) = render_outcome(api::fetch_endpoint(path).await);
        set_text.set(text);
        set_indicator.set(indicator);
    });
}

/// POST the fixed echo message and render the outcome
pub fn run_echo(set_text: WriteSignal<String>, set_indicator: WriteSignal<Indicator>) {
    set_text.set(LOADING_ECHO.to_string());

    leptos::task::spawn_local(async move {
        let (text, indicator) = render_outcome(api::post_echo().await);
        set_text.set(text);
        set_indicator.set(indicator);
    });
}
