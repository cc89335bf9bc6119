//! Modal for finding records to relate to the record a panel belongs to.

use std::sync::Arc;

use common::{
    app_config::AppConfig,
    result_table_layout::resolve_row_record_type,
    search_const::{DEFAULT_SEARCH_PANEL_PAGE_SIZE, SEARCH_COLUMN_SET},
    search_descriptor::SearchDescriptor,
    search_panel_state::{RelateSelection, RelationTarget, allowed_relation_target_types, relation_subject},
    search_result::RecordSummary,
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::components::search_components::search_panel_container::SearchPanelContainer;
use crate::data_definitions::shared_search_state::SharedSearchState;

const MODAL_SEARCH_NAME: &str = "searchToRelate";

#[component]
pub fn SearchToRelateModal(
    config: ReadSignal<Arc<AppConfig>>,
    subject_descriptor: ReadSignal<SearchDescriptor>,
    record_type: ReadSignal<String>,
    on_cancel: Callback<()>,
    on_close: Callback<()>,
    on_relations_created: Callback<RelateSelection>,
) -> Element {
    let shared = use_context::<SharedSearchState>();
    let mut store = shared.store;
    // searches of a closed modal are dropped, including ones still in flight
    use_drop(move || store.write().clear(MODAL_SEARCH_NAME));

    let target_types = use_memo(move || {
        let config = config.read();
        allowed_relation_target_types(&config, &subject_descriptor.read())
            .unwrap_or_else(|| config.record_types.keys().cloned().collect())
    });

    let initial_descriptor = move |target_type: &str, kw: Option<String>| {
        let page_size = shared
            .prefs
            .peek()
            .search_panel_page_size(target_type, MODAL_SEARCH_NAME)
            .unwrap_or(DEFAULT_SEARCH_PANEL_PAGE_SIZE);
        SearchDescriptor::new(target_type)
            .with_page_size(page_size)
            .with_keywords(kw)
    };

    let mut keywords = use_signal(String::new);
    let mut descriptor = use_signal(move || {
        let first_type = target_types.peek().first().cloned().unwrap_or_default();
        initial_descriptor(&first_type, None)
    });
    let mut selection = use_signal(move || RelateSelection {
        subjects: vec![relation_subject(&subject_descriptor.peek(), &record_type.peek())],
        targets: Vec::new(),
    });

    let selected_csids = use_memo(move || {
        selection
            .read()
            .targets
            .iter()
            .map(|target| target.csid.clone())
            .collect::<Vec<_>>()
    });

    let on_item_click = use_callback(move |item: RecordSummary| {
        let Some(csid) = item.csid.clone() else {
            return false;
        };
        let record_type = resolve_row_record_type(&config.peek(), &descriptor.peek(), &item)
            .unwrap_or_else(|| descriptor.peek().record_type.clone());
        selection.write().toggle_target(RelationTarget { csid, record_type });
        false
    });

    let on_descriptor_change = use_callback(move |next: SearchDescriptor| {
        if *descriptor.peek() != next {
            descriptor.set(next);
        }
    });

    let picked_count = selection.read().targets.len();
    let current_type = descriptor.read().record_type.clone();

    rsx! {
        div {
            class: "x-modal-backdrop",
            style: "
                position: fixed;
                inset: 0;
                background-color: rgba(0,0,0,0.35);
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 10;
            ",
            div {
                role: "dialog",
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 10px;
                    width: 720px;
                    max-height: 90%;
                    overflow-y: auto;
                    background-color: white;
                    border-radius: 8px;
                    padding: 16px;
                    box-shadow: 0 8px 24px rgba(0,0,0,0.2);
                ",
                div {
                    style: "display: flex; flex-direction: row; align-items: center;",
                    h2 { style: "font-size: 18px; font-weight: 400; margin: 0;", "Relate records" }
                    div { style: "flex-grow: 1;" }
                    button {
                        title: "Close",
                        style: "border: none; background: none; cursor: pointer;",
                        onclick: move |_| on_close(()),
                        Icon { icon: MdClose, style: "width: 22px; height: 22px;" }
                    }
                }
                form {
                    style: "display: flex; flex-direction: row; gap: 8px;",
                    onsubmit: move |e| {
                        e.prevent_default();
                        let kw = keywords.peek().clone();
                        let next = descriptor.peek().with_keywords(Some(kw));
                        on_descriptor_change(next);
                    },
                    select {
                        disabled: target_types.read().len() < 2,
                        onchange: move |e| {
                            let kw = Some(keywords.peek().clone());
                            on_descriptor_change(initial_descriptor(&e.value(), kw));
                        },
                        for target_type in target_types.read().iter().cloned() {
                            option {
                                key: "{target_type}",
                                value: "{target_type}",
                                selected: target_type == current_type,
                                {config.read().record_type(&target_type).map(|rt| rt.collection_name()).unwrap_or_else(|| target_type.clone())}
                            }
                        }
                    }
                    input {
                        r#type: "search",
                        placeholder: "Keywords",
                        value: "{keywords}",
                        style: "flex-grow: 1;",
                        oninput: move |e| keywords.set(e.value()),
                    }
                    button { r#type: "submit", "Search" }
                }
                if !current_type.is_empty() {
                    SearchPanelContainer {
                        config,
                        name: MODAL_SEARCH_NAME.to_string(),
                        record_type: current_type.clone(),
                        title: config.read().record_type(&current_type).map(|rt| rt.collection_name()).unwrap_or_default(),
                        search_descriptor: descriptor(),
                        column_set_name: SEARCH_COLUMN_SET.to_string(),
                        show_search_button: false,
                        link_items: false,
                        selected_csids: selected_csids(),
                        on_search_descriptor_change: on_descriptor_change,
                        on_item_click,
                    }
                }
                div {
                    style: "display: flex; flex-direction: row; gap: 8px; justify-content: flex-end;",
                    button { onclick: move |_| on_cancel(()), "Cancel" }
                    button {
                        disabled: picked_count == 0,
                        onclick: move |_| on_relations_created(selection.peek().clone()),
                        "Relate {picked_count} selected"
                    }
                }
            }
        }
    }
}
