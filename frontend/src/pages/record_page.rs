use common::{
    search_const::{DEFAULT_COLUMN_SET, DEFAULT_LIST_TYPE, DEFAULT_SEARCH_PANEL_PAGE_SIZE},
    search_descriptor::{SearchDescriptor, SearchQuery},
    search_panel_state::RelateSelection,
    user_prefs::UserPrefs,
};
use dioxus::{logger::tracing, prelude::*};

use crate::components::error_boundary::ComponentErrorBoundary;
use crate::components::search_components::search_panel_container::SearchPanelContainer;
use crate::data_definitions::shared_search_state::{SearchInvocation, SharedSearchState, use_app_config, use_search_executor};

const RELATED_RECORD_TYPE: &str = "collectionobject";
const RELATED_PANEL_NAME: &str = "relatedObjects";

/// Record page: the record's identity and the objects related to it.
#[component]
pub fn RecordPage(record_type: String, csid: String) -> Element {
    let config = use_app_config();
    let type_name = config
        .record_type(&record_type)
        .and_then(|rt| rt.messages.name.clone())
        .unwrap_or_else(|| record_type.clone());

    rsx! {
        Title { "Cataloger - {type_name} {csid}" }
        div {
            id: "x-record-page",
            style: "display: flex; flex-direction: column; padding: 20px 28px; gap: 8px;",
            h1 {
                style: "font-size: 24px; font-weight: 400; color: #0F172A; margin: 0;",
                "{type_name}"
            }
            div { style: "color: rgba(0,0,0,0.5); font-size: 13px;", "{csid}" }
            ComponentErrorBoundary {
                RelatedRecordsPanel { record_type, csid }
            }
        }
    }
}

#[component]
fn RelatedRecordsPanel(record_type: ReadSignal<String>, csid: ReadSignal<String>) -> Element {
    let config = use_app_config();
    let shared = use_context::<SharedSearchState>();
    let search = use_search_executor();

    let related_descriptor =
        move |csid: &str| related_objects_descriptor(&shared.prefs.peek(), &record_type.peek(), csid);

    let mut descriptor = use_signal(move || related_descriptor(&csid.peek()));
    // a new record resets paging and sorting
    use_effect(move || {
        let next = related_descriptor(&csid.read());
        if descriptor.peek().search_query.rel != next.search_query.rel {
            descriptor.set(next);
        }
    });

    let on_search_descriptor_change = use_callback(move |next: SearchDescriptor| {
        if *descriptor.peek() != next {
            descriptor.set(next);
        }
    });
    let refresh_config = config.clone();
    let on_relations_created = move |selection: RelateSelection| {
        tracing::info!(
            "RecordPage: relating {} record(s) to {} {}",
            selection.targets.len(),
            record_type.peek(),
            csid.peek()
        );
        search.call(SearchInvocation {
            config: refresh_config.clone(),
            name: RELATED_PANEL_NAME.to_string(),
            descriptor: descriptor.peek().clone(),
            list_type: DEFAULT_LIST_TYPE.to_string(),
            column_set_name: DEFAULT_COLUMN_SET.to_string(),
        });
    };

    let title = config
        .record_type(RELATED_RECORD_TYPE)
        .map(|rt| format!("Related {}", rt.collection_name()))
        .unwrap_or_else(|| "Related records".to_string());

    rsx! {
        SearchPanelContainer {
            config: config.clone(),
            name: RELATED_PANEL_NAME.to_string(),
            record_type: record_type.read().clone(),
            title,
            search_descriptor: descriptor(),
            show_add_button: true,
            on_search_descriptor_change,
            on_relations_created,
        }
    }
}

/// Objects related to `csid`. The page size preference belongs to the owning
/// record's type, since that is the type the panel is mounted under.
fn related_objects_descriptor(prefs: &UserPrefs, record_type: &str, csid: &str) -> SearchDescriptor {
    let size = prefs
        .search_panel_page_size(record_type, RELATED_PANEL_NAME)
        .unwrap_or(DEFAULT_SEARCH_PANEL_PAGE_SIZE);
    SearchDescriptor::new(RELATED_RECORD_TYPE).with_search_query(SearchQuery {
        size: Some(size),
        rel: Some(csid.to_string()),
        ..Default::default()
    })
}
