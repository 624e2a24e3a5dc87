//! Title and caption above a view.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// One-line explanation of what is encoded (e.g. "Circle size: 7-day precipitation")
    #[props(default = String::new())]
    pub caption: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 6px;",
            h3 {
                style: "margin: 0 0 2px 0; font-size: 15px; color: #eee;",
                "{props.title}"
            }
            if !props.caption.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #999;",
                    "{props.caption}"
                }
            }
        }
    }
}
