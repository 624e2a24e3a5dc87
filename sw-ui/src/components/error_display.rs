//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Shown in place of the views when the data load failed.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 24px auto; max-width: 640px; background: #3b1214; color: #ffb4b4; border-radius: 6px; border: 1px solid #7a2a2e;",
            strong { "Could not load the story data: " }
            "{props.message}"
        }
    }
}
