//! Item List Component
//!
//! Scrollable list of item cards with an empty hint and a counter.

use leptos::prelude::*;

use crate::components::ItemCard;
use crate::context::use_screen_context;
use crate::store::ScreenStateStoreFields;

/// Scrolling region listing the current items
#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_screen_context();
    let config = ctx.config;

    let rows = move || {
        ctx.store
            .list()
            .with(|list| list.iter().cloned().enumerate().collect::<Vec<_>>())
    };
    let count = move || ctx.store.list().with(|list| list.len());

    view! {
        <section class="item-list-region">
            <Show
                when=move || { count() > 0 }
                fallback=move || view! { <p class="empty-hint">{config.empty_hint}</p> }
            >
                <ul class="item-list">
                    // Keyed by position too, so equal texts stay separate rows
                    <For
                        each=rows
                        key=|(index, item)| (*index, item.text().to_string())
                        children=move |(_, item)| view! { <ItemCard item=item /> }
                    />
                </ul>
            </Show>
            <p class="item-count">{move || config.item_count_label(count())}</p>
        </section>
    }
}
