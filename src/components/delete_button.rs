//! Delete Button Component
//!
//! Icon button that fires once per click.

use leptos::prelude::*;

/// Trash icon button
///
/// # Arguments
/// * `label` - Accessible name, e.g. "Delete Milk"
/// * `on_delete` - Callback to run when clicked
#[component]
pub fn DeleteButton(
    #[prop(into)] label: String,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="delete-btn"
            title=label.clone()
            aria-label=label
            on:click=move |ev| {
                ev.stop_propagation();
                on_delete.run(());
            }
        >
            "🗑"
        </button>
    }
}
