//! Item Card Component
//!
//! One row of the list: the item text and its delete control.

use leptos::prelude::*;

use crate::components::DeleteButton;
use crate::context::use_screen_context;
use crate::models::Item;

/// Accessible name of a row's delete control
pub fn delete_label(text: &str) -> String {
    format!("Delete {}", text)
}

/// A single item card
#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let ctx = use_screen_context();

    let text = item.into_text();
    let label = delete_label(&text);
    let target = text.clone();

    view! {
        <li class="item-card">
            <span class="item-text">{text}</span>
            <DeleteButton label=label on_delete=move |_| ctx.remove(&target) />
        </li>
    }
}
