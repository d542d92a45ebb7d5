//! Top Bar Component
//!
//! Fixed header showing the screen title.

use leptos::prelude::*;

use crate::context::use_screen_context;

#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_screen_context();

    view! {
        <header class="top-bar">
            <h1 class="top-bar-title">{ctx.config.title}</h1>
        </header>
    }
}
