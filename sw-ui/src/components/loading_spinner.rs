//! Loading indicator.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; height: 100%; padding: 40px; color: #999;",
            "Loading weather and chart data..."
        }
    }
}
