//! Shopping List App
//!
//! Single screen: top bar, entry form, and the item list below it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ItemList, NewItemForm, TopBar};
use crate::config::UiConfig;
use crate::context::ScreenContext;
use crate::logging;
use crate::store::ScreenState;

#[component]
pub fn App(#[prop(optional)] config: Option<UiConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();

    // State lives as long as this screen; nothing is loaded or saved.
    let store = Store::new(ScreenState::default());
    provide_context(ScreenContext::new(store, config));

    log::info!("[APP] Screen opened");
    on_cleanup(|| {
        let history = logging::recent_logs();
        log::info!("[APP] Screen closed");
        for line in &history {
            log::debug!("[APP] history: {}", line);
        }
    });

    view! {
        <div class="app-layout">
            <TopBar />
            <main class="main-content">
                <NewItemForm />
                <ItemList />
            </main>
        </div>
    }
}
