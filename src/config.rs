//! Screen Configuration
//!
//! Fixed copy and logging settings for the screen. Nothing is read from the
//! environment; `UiConfig::default()` is what the app runs with.

use log::LevelFilter;

/// Screen copy and logging settings, provided via context
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiConfig {
    /// Top bar title
    pub title: &'static str,
    /// Label of the entry field
    pub input_label: &'static str,
    /// Text of the add control
    pub add_label: &'static str,
    /// Inline message for a blank submission
    pub required_message: &'static str,
    /// Hint shown instead of the list when it has no items
    pub empty_hint: &'static str,
    pub log_level: LevelFilter,
    /// Number of formatted log records kept in memory
    pub log_capacity: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Shopping list",
            input_label: "New Item",
            add_label: "Add",
            required_message: "This field is required",
            empty_hint: "Your list is empty",
            log_level: LevelFilter::Info,
            log_capacity: 200,
        }
    }
}

impl UiConfig {
    /// "N items" line under the list
    pub fn item_count_label(&self, count: usize) -> String {
        match count {
            1 => "1 item".to_string(),
            n => format!("{} items", n),
        }
    }
}
