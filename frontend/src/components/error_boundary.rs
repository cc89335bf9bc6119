//! Error boundaries for the app root and for single panels.

use dioxus::{logger::tracing, prelude::*};

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                tracing::error!("render error caught by {}: {err:?}", boundary_name.peek());
                rsx! {
                    div {
                        style: "margin: 15px; padding: 10px; border: 1px solid red; border-radius: 5px;",
                        h1 { style: "color: red; font-size: 32px;", "Something went wrong" }
                        p { style: "color: darkred;", "Boundary: {boundary_name}" }
                        pre { style: "text-wrap: auto;", "{err:#?}" }
                        a { href: "/", style: "color: blue;", "Return to Home Page" }
                    }
                }
            },
            children
        }
    }
}

/// Keeps a failing panel from taking the page down, with a retry button.
#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(error) => format!("{:#?}", error.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    div {
                        style: "display: flex; flex-direction: column; align-items: center; gap: 6px; padding: 10px;",
                        h3 { style: "color: red; margin: 0;", "Component Error" }
                        pre {
                            style: "color: darkred; border: 1px solid red; border-radius: 5px; padding: 8px; max-width: 500px; max-height: 300px; overflow-y: auto; text-wrap: auto;",
                            "{error_txt}"
                        }
                        button {
                            style: "color: blue; border: 1px solid blue; border-radius: 5px; padding: 4px 12px;",
                            onclick: move |_| err.clear_errors(),
                            "Try Again"
                        }
                    }
                }
            },
            {children}
        }
    }
}
