//! One search slot on a page: decides when to search, shows the result table
//! with a pager, and optionally offers adding records by a related search.

use std::sync::Arc;

use common::{
    app_config::AppConfig,
    pagination::last_page,
    search_const::SEARCH_PANEL_PAGE_SIZES,
    search_descriptor::SearchDescriptor,
    search_panel_state::{
        PanelEffect, RelateModalEvent, RelateModalState, RelateSelection, SearchPanelEvent, SearchPanelLifecycle,
        footer_error_message, footer_page_size, handle_panel_event, panel_title,
    },
    search_result::{RecordSummary, SearchOutcome},
};
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{
    Icon,
    icons::{
        md_action_icons::MdSearch,
        md_content_icons::MdAdd,
        md_navigation_icons::{MdExpandLess, MdExpandMore},
    },
};

use crate::components::pager::Pager;
use crate::components::search_components::search_result_table::{SearchResultTable, TableSlotState};
use crate::components::search_components::search_to_relate_modal::SearchToRelateModal;
use crate::data_definitions::shared_search_state::SearchInvocation;
use crate::routes::Route;

#[component]
pub fn SearchPanel(
    config: ReadSignal<Arc<AppConfig>>,
    name: ReadSignal<String>,
    record_type: ReadSignal<String>,
    title: ReadSignal<String>,
    search_descriptor: ReadSignal<SearchDescriptor>,
    list_type: ReadSignal<String>,
    column_set_name: ReadSignal<String>,
    search_outcome: ReadSignal<Option<SearchOutcome>>,
    search: Callback<SearchInvocation>,
    #[props(default = SEARCH_PANEL_PAGE_SIZES.to_string())] page_size_option_list_name: String,
    #[props(default)] is_filtered: bool,
    #[props(default)] show_add_button: bool,
    #[props(default = true)] show_search_button: bool,
    #[props(default = true)] link_items: bool,
    #[props(default)] initially_collapsed: bool,
    #[props(default)] selected_csids: Vec<String>,
    set_preferred_page_size: Option<Callback<(String, String, u64)>>,
    on_search_descriptor_change: Option<Callback<SearchDescriptor>>,
    on_item_click: Option<Callback<RecordSummary, bool>>,
    on_relations_created: Option<Callback<RelateSelection>>,
) -> Element {
    let mut lifecycle = use_signal(SearchPanelLifecycle::default);
    let mut modal = use_signal(RelateModalState::default);
    let mut collapsed = use_signal(move || initially_collapsed);

    let apply_effects = use_callback(move |effects: Vec<PanelEffect>| {
        for effect in effects {
            match effect {
                PanelEffect::IssueSearch(descriptor) => search.call(SearchInvocation {
                    config: config.peek().clone(),
                    name: name.peek().clone(),
                    descriptor,
                    list_type: list_type.peek().clone(),
                    column_set_name: column_set_name.peek().clone(),
                }),
                PanelEffect::NotifyDescriptorChange(descriptor) => {
                    if let Some(on_search_descriptor_change) = on_search_descriptor_change {
                        on_search_descriptor_change.call(descriptor);
                    }
                }
                PanelEffect::PersistPageSize(page_size) => {
                    if let Some(set_preferred_page_size) = set_preferred_page_size {
                        set_preferred_page_size.call((record_type.peek().clone(), name.peek().clone(), page_size));
                    }
                }
            }
        }
    });

    // searches on mount and whenever the owner hands over a different descriptor
    use_effect(move || {
        let descriptor = search_descriptor.read().clone();
        let effects = lifecycle.write().observe(&descriptor);
        apply_effects.call(effects);
    });

    let dispatch = use_callback(move |event: SearchPanelEvent| {
        let effects = handle_panel_event(&search_descriptor.peek(), &event);
        apply_effects.call(effects);
    });

    let on_relations_done = use_callback(move |selection: RelateSelection| {
        tracing::info!(
            "SearchPanel {}: {} record(s) picked to relate",
            name.peek(),
            selection.targets.len()
        );
        // the owner decides whether to refresh
        if modal.write().apply(RelateModalEvent::RelationsCreated) {
            if let Some(on_relations_created) = on_relations_created {
                on_relations_created.call(selection);
            }
        }
    });

    let search_result = use_memo(move || search_outcome.read().as_ref().and_then(|o| o.result().cloned()));
    let is_search_pending = use_memo(move || search_outcome.read().as_ref().is_some_and(SearchOutcome::is_pending));
    let search_error = use_memo(move || search_outcome.read().as_ref().and_then(|o| o.error().cloned()));

    let total_items = search_result.read().as_ref().and_then(|result| result.total_items);
    let title_text = panel_title(&title.read(), total_items, is_filtered);

    let render_footer = use_callback(move |slot: TableSlotState| {
        if let Some(error) = slot.search_error {
            let Some(error) = footer_error_message(&error) else {
                return rsx! {};
            };
            return rsx! {
                div {
                    style: "color: darkred; padding: 4px 7px; font-size: 13px;",
                    "{error}"
                }
            };
        }
        let Some(result) = slot.search_result else {
            return rsx! {};
        };
        let descriptor = search_descriptor.read();
        let page_size = footer_page_size(&result, &descriptor);
        let current_page = result.page_num.unwrap_or(descriptor.search_query.p);
        rsx! {
            Pager {
                config,
                current_page,
                last_page: last_page(result.total_items, Some(page_size)),
                page_size,
                page_size_option_list_name: Some(page_size_option_list_name.clone()),
                on_page_change: move |page: u64| dispatch.call(SearchPanelEvent::PageChanged(page)),
                on_page_size_change: move |size: u64| dispatch.call(SearchPanelEvent::PageSizeChanged(size)),
            }
        }
    });

    let is_collapsed = *collapsed.read();

    rsx! {
        section {
            class: "x-search-panel",
            style: "
                display: flex;
                flex-direction: column;
                border: 1px solid rgba(0,0,0,0.1);
                border-radius: 6px;
                margin: 8px 0;
                background-color: #F8FCFF;
            ",
            header {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 8px;
                    padding: 4px 7px;
                    border-bottom: 1px solid rgba(0,0,0,0.1);
                ",
                button {
                    title: if is_collapsed { "Expand" } else { "Collapse" },
                    style: "border: none; background: none; cursor: pointer; padding: 0;",
                    onclick: move |_| collapsed.toggle(),
                    if is_collapsed {
                        Icon { icon: MdExpandMore, style: "width: 20px; height: 20px;" }
                    } else {
                        Icon { icon: MdExpandLess, style: "width: 20px; height: 20px;" }
                    }
                }
                h3 {
                    style: "font-size: 16px; font-weight: 400; color: rgb(75, 87, 112); margin: 0;",
                    "{title_text}"
                }
                div { style: "flex-grow: 1;" }
                if show_search_button {
                    span {
                        title: "Open as full search",
                        Link {
                            to: Route::search_location(&search_descriptor.read()),
                            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: rgb(75, 87, 112);" }
                        }
                    }
                }
                if show_add_button {
                    button {
                        title: "Relate records",
                        style: "border: none; background: none; cursor: pointer; padding: 0;",
                        onclick: move |_| {
                            modal.write().apply(RelateModalEvent::AddButtonClicked);
                        },
                        Icon { icon: MdAdd, style: "width: 20px; height: 20px; color: rgb(75, 87, 112);" }
                    }
                }
            }
            if !is_collapsed {
                SearchResultTable {
                    config,
                    column_set_name,
                    search_descriptor,
                    search_result: search_result(),
                    is_search_pending: is_search_pending(),
                    search_error: search_error(),
                    link_items,
                    selected_csids,
                    render_footer,
                    on_sort_change: move |sort: String| dispatch.call(SearchPanelEvent::SortChanged(sort)),
                    on_item_click,
                }
            }
            if modal.read().is_open {
                SearchToRelateModal {
                    config,
                    subject_descriptor: search_descriptor,
                    record_type,
                    on_cancel: move |_| {
                        modal.write().apply(RelateModalEvent::CancelButtonClicked);
                    },
                    on_close: move |_| {
                        modal.write().apply(RelateModalEvent::CloseButtonClicked);
                    },
                    on_relations_created: on_relations_done,
                }
            }
        }
    }
}
