use common::{
    search_const::{DEFAULT_PAGE_SIZE, SEARCH_COLUMN_SET, SEARCH_RESULT_PAGE_PAGE_SIZES},
    search_descriptor::{SearchDescriptor, SearchQuery},
};
use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;
use crate::components::search_components::search_panel_container::SearchPanelContainer;
use crate::data_definitions::shared_search_state::{SharedSearchState, use_app_config};
use crate::data_definitions::url_param::UrlParam;
use crate::routes::Route;

const SEARCH_RESULT_PANEL_NAME: &str = "searchResultPage";

/// Full search page; the descriptor lives in the URL.
#[component]
pub fn SearchResultPage(descriptor: UrlParam<SearchDescriptor>) -> Element {
    let config = use_app_config();
    let collection_name = config
        .record_type(&descriptor.0.record_type)
        .map(|rt| rt.collection_name())
        .unwrap_or_else(|| descriptor.0.record_type.clone());

    rsx! {
        Title { "Cataloger - {collection_name}" }
        SearchResultPageRoot { route_descriptor: descriptor.0.clone(), collection_name }
    }
}

#[component]
fn SearchResultPageRoot(route_descriptor: ReadSignal<SearchDescriptor>, collection_name: ReadSignal<String>) -> Element {
    let config = use_app_config();
    let shared = use_context::<SharedSearchState>();
    let mut prefs = shared.prefs;

    // links into this page omit the size; fill in the user's preference
    let descriptor = use_memo(move || {
        let route_descriptor = route_descriptor.read().clone();
        if route_descriptor.search_query.size.is_some() {
            return route_descriptor;
        }
        let size = prefs.read().search_result_page_page_size().unwrap_or(DEFAULT_PAGE_SIZE);
        let search_query = SearchQuery {
            size: Some(size),
            ..route_descriptor.search_query.clone()
        };
        route_descriptor.with_search_query(search_query)
    });

    let on_search_descriptor_change = use_callback(move |next: SearchDescriptor| {
        if next.search_query.size != descriptor.peek().search_query.size {
            if let Some(size) = next.search_query.size {
                prefs.write().set_search_result_page_page_size(size);
            }
        }
        if *route_descriptor.peek() != next {
            navigator().replace(Route::SearchResultPage { descriptor: UrlParam::from(next) });
        }
    });

    let kw = descriptor.read().search_query.kw.clone().unwrap_or_default();
    let mut keywords = use_signal(move || kw);

    rsx! {
        div {
            id: "x-search-result-page",
            style: "display: flex; flex-direction: column; padding: 20px 28px; gap: 8px;",
            form {
                style: "display: flex; flex-direction: row; gap: 8px; max-width: 600px;",
                onsubmit: move |e| {
                    e.prevent_default();
                    let next = descriptor.peek().with_keywords(Some(keywords.peek().clone()));
                    on_search_descriptor_change(next);
                },
                input {
                    r#type: "search",
                    placeholder: "Keywords",
                    value: "{keywords}",
                    style: "flex-grow: 1;",
                    oninput: move |e| keywords.set(e.value()),
                }
                button { r#type: "submit", "Search" }
            }
            ComponentErrorBoundary {
                SearchPanelContainer {
                    config: config.clone(),
                    name: SEARCH_RESULT_PANEL_NAME.to_string(),
                    record_type: descriptor.read().record_type.clone(),
                    title: collection_name.read().clone(),
                    search_descriptor: descriptor(),
                    column_set_name: SEARCH_COLUMN_SET.to_string(),
                    page_size_option_list_name: SEARCH_RESULT_PAGE_PAGE_SIZES.to_string(),
                    is_filtered: descriptor.read().search_query.kw.is_some(),
                    show_search_button: false,
                    on_search_descriptor_change,
                }
            }
        }
    }
}
