//! Screen State Store
//!
//! Uses Leptos reactive_stores so the list and the input row re-render
//! independently.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::draft::DraftState;
use crate::error::ValidationResult;
use crate::models::ShoppingList;

/// State owned by one open shopping-list screen
#[derive(Clone, Debug, Default, Store)]
pub struct ScreenState {
    /// Committed items, in the order they were added
    pub list: ShoppingList,
    /// Entry field text and its indicator
    pub draft: DraftState,
}

/// Type alias for the store
pub type ScreenStore = Store<ScreenState>;

// ========================
// Store Helper Functions
// ========================

/// Mirror the entry field into the store
pub fn store_set_draft(store: &ScreenStore, text: String) {
    store.draft().write().set_text(text);
}

/// Submit the current draft to the list
pub fn store_submit_draft(store: &ScreenStore) -> ValidationResult<()> {
    let mut draft = store.draft().get_untracked();
    let result = draft.submit(&mut store.list().write());
    *store.draft().write() = draft;
    match &result {
        Ok(()) => log::info!("[FORM] Added item, {} on list", store.list().read_untracked().len()),
        Err(e) => log::warn!("[FORM] Rejected submission: {}", e),
    }
    result
}

/// Remove the first item equal to `text`
pub fn store_remove_item(store: &ScreenStore, text: &str) {
    let removed = store.list().write().remove(text);
    if removed {
        log::info!("[LIST] Removed {:?}", text);
    } else {
        log::debug!("[LIST] Nothing to remove for {:?}", text);
    }
}
