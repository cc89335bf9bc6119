//! Page links and page-size selector shown under a result table.

use std::sync::Arc;

use common::{
    app_config::AppConfig,
    pagination::{PagerItem, page_size_options, page_window},
    search_const::PAGER_WINDOW_SIZE,
};
use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon, IconShape,
    icons::md_navigation_icons::{MdChevronLeft, MdChevronRight, MdFirstPage, MdLastPage},
};

#[component]
pub fn Pager(
    config: ReadSignal<Arc<AppConfig>>,
    current_page: ReadSignal<u64>,
    last_page: ReadSignal<u64>,
    page_size: ReadSignal<u64>,
    page_size_option_list_name: ReadSignal<Option<String>>,
    #[props(default = PAGER_WINDOW_SIZE)] window_size: u64,
    on_page_change: Callback<u64>,
    on_page_size_change: Callback<u64>,
) -> Element {
    let items = use_memo(move || page_window(*current_page.read(), *last_page.read(), window_size));
    let size_options = use_memo(move || {
        let config = config.read();
        let list_name = page_size_option_list_name.read();
        let option_list = list_name.as_deref().and_then(|name| config.option_list(name));
        page_size_options(option_list, *page_size.read())
    });

    let current = *current_page.read();
    let last = *last_page.read();

    rsx! {
        div {
            class: "x-pager",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                padding: 4px 7px;
                font-size: 13px;
            ",
            PagerButton { icon: MdFirstPage, label: "First page", disabled: current == 0, onclick: move |_| on_page_change(0) }
            PagerButton { icon: MdChevronLeft, label: "Previous page", disabled: current == 0, onclick: move |_| on_page_change(current - 1) }

            for (index, item) in items.read().iter().copied().enumerate() {
                if let PagerItem::Page(page) = item {
                    button {
                        key: "{index}",
                        disabled: page == current,
                        style: if page == current {
                            "border: none; background: rgb(75, 87, 112); color: white; border-radius: 4px; padding: 2px 8px;"
                        } else {
                            "border: 1px solid rgba(0,0,0,0.1); background: white; border-radius: 4px; padding: 2px 8px; cursor: pointer;"
                        },
                        onclick: move |_| on_page_change(page),
                        "{page + 1}"
                    }
                } else {
                    span { key: "{index}", style: "color: rgba(0,0,0,0.5);", "…" }
                }
            }

            PagerButton { icon: MdChevronRight, label: "Next page", disabled: current >= last, onclick: move |_| on_page_change(current + 1) }
            PagerButton { icon: MdLastPage, label: "Last page", disabled: current >= last, onclick: move |_| on_page_change(last) }

            div { style: "flex-grow: 1;" }

            label {
                style: "display: flex; align-items: center; gap: 4px;",
                "Show"
                select {
                    value: "{page_size}",
                    onchange: move |e| {
                        if let Ok(size) = e.value().parse::<u64>() {
                            on_page_size_change(size);
                        }
                    },
                    for size in size_options.read().iter().copied() {
                        option { key: "{size}", value: "{size}", selected: size == *page_size.read(), "{size}" }
                    }
                }
                "per page"
            }
        }
    }
}

#[component]
fn PagerButton<I: IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: bool, onclick: Callback<()>) -> Element {
    let btn_color = if disabled { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" };
    let btn_cursor = if disabled { "not-allowed" } else { "pointer" };
    rsx! {
        button {
            title: "{label}",
            disabled,
            style: "
                width: 26px;
                height: 26px;
                background: white;
                border: none;
                border-radius: 6px;
                padding: 2px;
                box-shadow: 0 1px 3px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !disabled {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 20px; height: 20px; color: {btn_color};" }
        }
    }
}
