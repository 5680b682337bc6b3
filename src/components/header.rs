//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div>
                <h1>"Aelys HTTP Server"</h1>
                <p class="subtitle">"Demo API dashboard"</p>
            </div>
            <span class="badge">"Live"</span>
        </header>
    }
}
