//! Container div the map and chart scripts render into.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id the JS side looks up
    pub id: String,
    /// Height in pixels; MapLibre needs a sized container
    #[props(default = 380)]
    pub height: u32,
    /// Text shown over the container until the script draws into it
    #[props(default = String::new())]
    pub placeholder: String,
}

/// A sized container div for MapLibre and D3 with a placeholder behind it.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "height: {}px; position: relative; width: 100%; border-radius: 8px; overflow: hidden;",
        props.height
    );

    rsx! {
        div {
            style: "{style}",
            if !props.placeholder.is_empty() {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #777;",
                    "{props.placeholder}"
                }
            }
            div {
                id: "{props.id}",
                style: "position: absolute; inset: 0;",
            }
        }
    }
}
