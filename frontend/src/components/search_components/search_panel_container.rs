use std::sync::Arc;

use common::{
    app_config::AppConfig,
    search_const::{DEFAULT_COLUMN_SET, DEFAULT_LIST_TYPE, SEARCH_PANEL_PAGE_SIZES},
    search_descriptor::SearchDescriptor,
    search_panel_state::RelateSelection,
    search_result::RecordSummary,
};
use dioxus::prelude::*;

use crate::components::search_components::search_panel::SearchPanel;
use crate::data_definitions::shared_search_state::{SharedSearchState, use_search_executor};

/// [`SearchPanel`] bound to the shared search store and page-size preferences.
#[component]
pub fn SearchPanelContainer(
    config: ReadSignal<Arc<AppConfig>>,
    name: ReadSignal<String>,
    record_type: ReadSignal<String>,
    title: ReadSignal<String>,
    search_descriptor: ReadSignal<SearchDescriptor>,
    #[props(default = DEFAULT_LIST_TYPE.to_string())] list_type: String,
    #[props(default = DEFAULT_COLUMN_SET.to_string())] column_set_name: String,
    #[props(default = SEARCH_PANEL_PAGE_SIZES.to_string())] page_size_option_list_name: String,
    #[props(default)] is_filtered: bool,
    #[props(default)] show_add_button: bool,
    #[props(default = true)] show_search_button: bool,
    #[props(default = true)] link_items: bool,
    #[props(default)] selected_csids: Vec<String>,
    on_search_descriptor_change: Option<Callback<SearchDescriptor>>,
    on_item_click: Option<Callback<RecordSummary, bool>>,
    on_relations_created: Option<Callback<RelateSelection>>,
) -> Element {
    let shared = use_context::<SharedSearchState>();
    let mut prefs = shared.prefs;
    let search = use_search_executor();

    let search_outcome = use_memo(move || shared.outcome(&name.read()));
    let set_preferred_page_size = use_callback(move |(record_type, name, page_size): (String, String, u64)| {
        prefs.write().set_search_panel_page_size(&record_type, &name, page_size);
    });

    rsx! {
        SearchPanel {
            config,
            name,
            record_type,
            title,
            search_descriptor,
            list_type,
            column_set_name,
            page_size_option_list_name,
            search_outcome: search_outcome(),
            search,
            is_filtered,
            show_add_button,
            show_search_button,
            link_items,
            selected_csids,
            set_preferred_page_size,
            on_search_descriptor_change,
            on_item_click,
            on_relations_created,
        }
    }
}
