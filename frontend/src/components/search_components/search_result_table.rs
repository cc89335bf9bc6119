//! Sortable, clickable table of one page of search results.

use std::sync::Arc;

use common::{
    app_config::{AppConfig, ColumnConfig},
    errors::SearchError,
    result_table_layout::{SortDirection, SortSpec, derive_columns, resolve_row_record_type, result_height_basis, table_height_px},
    search_const::SEARCH_PENDING_PLACEHOLDER,
    search_descriptor::SearchDescriptor,
    search_result::{RecordSummary, SearchResultList},
};
use dioxus::{logger::tracing, prelude::*};

use crate::routes::Route;

/// What the header and footer slots get to render from.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSlotState {
    pub is_search_pending: bool,
    pub search_error: Option<SearchError>,
    pub search_result: Option<SearchResultList>,
}

#[component]
pub fn SearchResultTable(
    config: ReadSignal<Arc<AppConfig>>,
    column_set_name: ReadSignal<String>,
    search_descriptor: ReadSignal<SearchDescriptor>,
    search_result: ReadSignal<Option<SearchResultList>>,
    is_search_pending: ReadSignal<bool>,
    search_error: ReadSignal<Option<SearchError>>,
    #[props(default = true)] link_items: bool,
    #[props(default)] selected_csids: Vec<String>,
    format_cell_data: Option<Callback<(ColumnConfig, Option<String>), String>>,
    format_column_label: Option<Callback<ColumnConfig, String>>,
    render_header: Option<Callback<TableSlotState, Element>>,
    render_footer: Option<Callback<TableSlotState, Element>>,
    on_sort_change: Option<Callback<String>>,
    /// Called before navigating; returning false keeps the user on the page.
    on_item_click: Option<Callback<RecordSummary, bool>>,
) -> Element {
    let slot_state = use_memo(move || TableSlotState {
        is_search_pending: *is_search_pending.read(),
        search_error: search_error.read().clone(),
        search_result: search_result.read().clone(),
    });

    let on_row_click = use_callback(move |item: RecordSummary| {
        if let Some(handler) = on_item_click {
            if !handler.call(item.clone()) {
                return;
            }
        }
        if !link_items {
            return;
        }
        let Some(csid) = item.csid.clone() else {
            return;
        };
        let record_type = resolve_row_record_type(&config.read(), &search_descriptor.read(), &item);
        match record_type {
            Some(record_type) => {
                navigator().push(Route::record_location(record_type, csid));
            }
            None => tracing::warn!("SearchResultTable: no record type for row {csid}"),
        }
    });

    rsx! {
        div {
            class: "x-search-result-table",
            style: "display: flex; flex-direction: column; width: 100%;",
            if let Some(render_header) = render_header {
                {render_header.call(slot_state())}
            }
            if search_result.read().is_some() {
                ResultTableBody {
                    config,
                    column_set_name,
                    search_descriptor,
                    search_result,
                    is_search_pending,
                    selected_csids,
                    format_cell_data,
                    format_column_label,
                    on_sort_change,
                    on_row_click,
                }
            }
            if let Some(render_footer) = render_footer {
                {render_footer.call(slot_state())}
            }
        }
    }
}

#[component]
fn ResultTableBody(
    config: ReadSignal<Arc<AppConfig>>,
    column_set_name: ReadSignal<String>,
    search_descriptor: ReadSignal<SearchDescriptor>,
    search_result: ReadSignal<Option<SearchResultList>>,
    is_search_pending: ReadSignal<bool>,
    selected_csids: Vec<String>,
    format_cell_data: Option<Callback<(ColumnConfig, Option<String>), String>>,
    format_column_label: Option<Callback<ColumnConfig, String>>,
    on_sort_change: Option<Callback<String>>,
    on_row_click: Callback<RecordSummary>,
) -> Element {
    let columns = use_memo(move || {
        derive_columns(&config.read(), &search_descriptor.read(), &column_set_name.read(), |column| {
            match format_column_label {
                Some(format_column_label) => format_column_label.call(column.clone()),
                None => column.display_label(),
            }
        })
    });
    let sort_spec = use_memo(move || {
        search_descriptor
            .read()
            .search_query
            .sort
            .as_deref()
            .and_then(SortSpec::parse)
    });
    let height_px = use_memo(move || {
        search_result
            .read()
            .as_ref()
            .map(|result| table_height_px(result_height_basis(result)))
            .unwrap_or_default()
    });

    let result = search_result.read().clone().unwrap_or_default();
    let column_count = columns.read().len().max(1);

    rsx! {
        div {
            style: "
                height: {height_px}px;
                overflow-y: auto;
                width: 100%;
                background-color: white;
            ",
            table {
                style: "border-collapse: collapse; width: 100%; table-layout: fixed; font-size: 13px;",
                thead {
                    tr {
                        style: "height: 22px; background-color: #ECEEF2;",
                        for column in columns.read().iter().cloned() {
                            th {
                                key: "{column.name}",
                                cursor: if column.sortable { "pointer" } else { "default" },
                                style: "
                                    width: {column.width}px;
                                    text-align: left;
                                    padding: 0 6px;
                                    white-space: nowrap;
                                    overflow: hidden;
                                ",
                                onclick: {
                                    let name = column.name.clone();
                                    let sortable = column.sortable;
                                    move |_| {
                                        if !sortable {
                                            return;
                                        }
                                        if let Some(on_sort_change) = on_sort_change {
                                            let next = SortSpec::after_header_click(sort_spec.read().as_ref(), &name);
                                            on_sort_change.call(next.to_spec_string());
                                        }
                                    }
                                },
                                "{column.label}"
                                {sort_indicator(sort_spec.read().as_ref(), &column.name)}
                            }
                        }
                    }
                }
                tbody {
                    if result.items.is_empty() {
                        tr {
                            style: "height: 22px;",
                            td {
                                colspan: "{column_count}",
                                style: "padding: 0 6px; color: rgba(0,0,0,0.5);",
                                if *is_search_pending.read() {
                                    "{SEARCH_PENDING_PLACEHOLDER}"
                                }
                            }
                        }
                    }
                    for (index, item) in result.items.iter().cloned().enumerate() {
                        tr {
                            key: "{index}-{item.csid.clone().unwrap_or_default()}",
                            style: if item.csid.as_ref().is_some_and(|csid| selected_csids.contains(csid)) {
                                "height: 22px; cursor: pointer; background-color: #DCE6FF;"
                            } else {
                                "height: 22px; cursor: pointer;"
                            },
                            onclick: {
                                let item = item.clone();
                                move |_| on_row_click.call(item.clone())
                            },
                            for column in columns.read().iter() {
                                td {
                                    key: "{column.name}",
                                    style: "padding: 0 6px; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                                    {cell_text(format_cell_data, &column.source, item.field(&column.name))}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn sort_indicator(sort_spec: Option<&SortSpec>, column: &str) -> &'static str {
    match sort_spec {
        Some(spec) if spec.column == column => match spec.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => "",
    }
}

fn cell_text(
    format_cell_data: Option<Callback<(ColumnConfig, Option<String>), String>>,
    column: &ColumnConfig,
    raw: Option<&str>,
) -> String {
    match format_cell_data {
        Some(format_cell_data) => format_cell_data.call((column.clone(), raw.map(str::to_string))),
        None => raw.unwrap_or_default().to_string(),
    }
}
