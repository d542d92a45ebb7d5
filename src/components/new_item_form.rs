//! New Item Form Component
//!
//! Entry field and add control. The draft lives in the screen store so the
//! field and the required-field indicator follow it.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_screen_context;
use crate::store::ScreenStateStoreFields;

const INPUT_ID: &str = "new-item-input";

/// Form for adding an item to the end of the list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_screen_context();
    let config = ctx.config;

    let draft_text = move || ctx.store.draft().with(|d| d.text.clone());
    let has_error = move || ctx.store.draft().with(|d| d.has_error());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Rejection is surfaced through the indicator only.
        let _ = ctx.submit_draft();
    };

    view! {
        <form class="new-item-form" on:submit=add_item novalidate>
            <div class=move || if has_error() { "new-item-field error" } else { "new-item-field" }>
                <label for=INPUT_ID>{config.input_label}</label>
                <input
                    id=INPUT_ID
                    type="text"
                    autocomplete="off"
                    aria-invalid=move || if has_error() { "true" } else { "false" }
                    prop:value=draft_text
                    on:input=move |ev| {
                        let Some(input) = ev
                            .target()
                            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                        else {
                            return;
                        };
                        ctx.set_draft(input.value());
                    }
                />
                <Show when=has_error>
                    <span class="field-error" role="alert">{config.required_message}</span>
                </Show>
            </div>
            <button type="submit" class="add-btn">{config.add_label}</button>
        </form>
    }
}
