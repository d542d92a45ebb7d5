//! Screen Context
//!
//! Store and configuration provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::UiConfig;
use crate::error::ValidationResult;
use crate::store::{self, ScreenStore};

/// Screen-wide handles provided via context
#[derive(Clone, Copy)]
pub struct ScreenContext {
    /// State of the open screen
    pub store: ScreenStore,
    /// Copy and logging settings
    pub config: UiConfig,
}

impl ScreenContext {
    pub fn new(store: ScreenStore, config: UiConfig) -> Self {
        Self { store, config }
    }

    /// Update the draft as the user types
    pub fn set_draft(&self, text: String) {
        store::store_set_draft(&self.store, text);
    }

    /// Commit the draft; a blank draft only raises the indicator
    pub fn submit_draft(&self) -> ValidationResult<()> {
        store::store_submit_draft(&self.store)
    }

    /// Delete the first item with this text
    pub fn remove(&self, text: &str) {
        store::store_remove_item(&self.store, text);
    }
}

/// Get the screen context, panicking if it was not provided
pub fn use_screen_context() -> ScreenContext {
    use_context::<ScreenContext>().expect("ScreenContext should be provided")
}
