use common::search_descriptor::SearchDescriptor;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearch;

use crate::data_definitions::shared_search_state::use_app_config;
use crate::routes::Route;

/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Cataloger - Home" }
        div {
            id: "x-home-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",
            h1 {
                style: "color: #0F172A; font-size: 40px; font-weight: 500; margin: 0;",
                "Collection catalog"
            }
            KeywordSearchCard {}
            RecordTypeLinks {}
        }
    }
}

#[component]
fn KeywordSearchCard() -> Element {
    let config = use_app_config();
    let record_types = config
        .record_types
        .values()
        .map(|record_type| (record_type.name.clone(), record_type.collection_name()))
        .collect::<Vec<_>>();
    let first_type = record_types.first().map(|(name, _)| name.clone()).unwrap_or_default();

    let mut record_type = use_signal(move || first_type);
    let mut keywords = use_signal(String::new);

    rsx! {
        form {
            id: "x-card-keyword-search",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 10px;
                max-width: 720px;
                padding: 18px 22px;
                border-radius: 16px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",
            onsubmit: move |e| {
                e.prevent_default();
                let descriptor = SearchDescriptor::new(record_type.peek().clone())
                    .with_keywords(Some(keywords.peek().clone()));
                navigator().push(Route::search_location(&descriptor));
            },
            select {
                style: "height: 34px; border-radius: 6px;",
                onchange: move |e| record_type.set(e.value()),
                for (name, label) in record_types.iter().cloned() {
                    option { key: "{name}", value: "{name}", selected: name == *record_type.read(), "{label}" }
                }
            }
            input {
                r#type: "search",
                placeholder: "Search keywords",
                value: "{keywords}",
                style: "flex-grow: 1; height: 34px; border-radius: 6px; border: none; padding: 0 10px;",
                oninput: move |e| keywords.set(e.value()),
            }
            button {
                r#type: "submit",
                style: "height: 34px; width: 40px; border-radius: 6px; border: none; background: white; cursor: pointer;",
                Icon { icon: MdSearch, style: "width: 22px; height: 22px;" }
            }
        }
    }
}

#[component]
fn RecordTypeLinks() -> Element {
    let config = use_app_config();
    rsx! {
        ul {
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
                gap: 12px;
                list-style: none;
                padding: 0;
                max-width: 720px;
            ",
            for record_type in config.record_types.values() {
                li {
                    key: "{record_type.name}",
                    style: "background: white; border-radius: 10px; padding: 14px; box-shadow: 0 2px 4px rgba(0,0,0,0.08);",
                    Link {
                        to: Route::search_location(&SearchDescriptor::new(record_type.name.clone())),
                        "{record_type.collection_name()}"
                    }
                }
            }
        }
    }
}
