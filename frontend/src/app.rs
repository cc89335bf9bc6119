use std::sync::Arc;

use common::{app_config::AppConfig, search_store::SearchStore, user_prefs::UserPrefs};
use dioxus::{logger::tracing, prelude::*};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::shared_search_state::{AppConfigHandle, SharedSearchState};
use crate::routes::Route;
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_hook(|| match AppConfig::bundled() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            tracing::error!("App: could not load record type configuration: {e}");
            Arc::new(AppConfig::default())
        }
    });
    let store = use_signal(SearchStore::new);
    let prefs = use_signal(UserPrefs::default);

    use_context_provider(move || AppConfigHandle(config));
    use_context_provider(move || SharedSearchState { store, prefs });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            Router::<Route> {}
        }
    }
}
