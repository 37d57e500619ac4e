#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::store::use_app_store;

/// Dismissible banner for the store's transient error message. Rendered
/// once, near the top of the page; empty while no error is set.
#[component]
pub fn ErrorBanner() -> Element {
    let mut store = use_app_store();
    match store.error() {
        Some(message) => rsx! {
            div { class: "error-banner", role: "alert",
                span { "{message}" }
                button {
                    class: "error-dismiss",
                    r#type: "button",
                    aria_label: "Dismiss",
                    onclick: move |_| store.set_error(None),
                    "✕"
                }
            }
        },
        None => rsx! {},
    }
}
