//! App-wide search state and the hook that issues searches into it.

use std::sync::Arc;

use common::{
    app_config::AppConfig,
    errors::SearchError,
    search_descriptor::SearchDescriptor,
    search_result::SearchOutcome,
    search_store::SearchStore,
    service_request::build_service_search_request,
    user_prefs::UserPrefs,
};
use dioxus::{logger::tracing, prelude::*};

use crate::api::search_api::search_records;

/// Record type configuration, parsed once by the app root.
#[derive(Clone)]
pub struct AppConfigHandle(pub Arc<AppConfig>);

#[derive(Copy, Clone)]
pub struct SharedSearchState {
    pub store: Signal<SearchStore>,
    pub prefs: Signal<UserPrefs>,
}

impl SharedSearchState {
    pub fn outcome(&self, name: &str) -> Option<SearchOutcome> {
        self.store.read().outcome(name).cloned()
    }
}

/// Everything needed to run one named search.
#[derive(Clone, PartialEq)]
pub struct SearchInvocation {
    pub config: Arc<AppConfig>,
    pub name: String,
    pub descriptor: SearchDescriptor,
    pub list_type: String,
    pub column_set_name: String,
}

pub fn use_app_config() -> Arc<AppConfig> {
    use_context::<AppConfigHandle>().0
}

/// Issues searches into the shared store. The store keeps only the latest
/// search per name, so a slow response never overwrites a newer one.
pub fn use_search_executor() -> Callback<SearchInvocation> {
    let shared = use_context::<SharedSearchState>();
    let mut store = shared.store;

    use_callback(move |invocation: SearchInvocation| {
        let SearchInvocation { config, name, descriptor, list_type, column_set_name } = invocation;
        let ticket = store.write().begin(&name, &descriptor);

        let request = match build_service_search_request(&config, &descriptor, &list_type, &column_set_name) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!("search {name}: cannot build request: {e}");
                store.write().resolve(&ticket, Err(e));
                return;
            }
        };

        spawn(async move {
            let resolution = search_records(request).await.map_err(search_error_from_server);
            if !store.write().resolve(&ticket, resolution) {
                tracing::debug!("search {}#{} superseded", ticket.name, ticket.seq);
            }
        });
    })
}

/// Server function errors arrive flattened; keep the HTTP status when there is one.
fn search_error_from_server(err: ServerFnError) -> SearchError {
    match err {
        ServerFnError::ServerError { message, code, .. } => SearchError::Service {
            status: Some(code),
            message,
        },
        other => SearchError::Transport(other.to_string()),
    }
}
