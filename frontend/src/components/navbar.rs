//! Side navigation bar wrapping every page.

use common::search_descriptor::SearchDescriptor;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdSearch};
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

const DEFAULT_SEARCH_RECORD_TYPE: &str = "collectionobject";

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",
            nav {
                id: "x-nav-sidebar",
                style: "
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 24px;
                    width: 56px;
                    height: 100%;
                    background-color: #1C212D;
                    padding: 16px 0;
                ",
                IconLink { to: Route::HomePage {}, icon: MdHome, label: "Home" }
                IconLink {
                    to: Route::search_location(&SearchDescriptor::new(DEFAULT_SEARCH_RECORD_TYPE)),
                    icon: MdSearch,
                    label: "Search objects",
                }
            }
            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-width: 100px; overflow: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        span {
            title: "{label}",
            style: "color: white;",
            Link {
                to,
                Icon { icon: icon, style: "width: 26px; height: 26px; color: white;" }
            }
        }
    }
}
