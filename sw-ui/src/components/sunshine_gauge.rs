//! Sunshine gauge: mean 7-day sunshine of the selected day on a Low/High track.

use dioxus::prelude::*;
use sw_data::gauge::GaugeLevel;

#[derive(Props, Clone, PartialEq)]
pub struct SunshineGaugeProps {
    pub level: GaugeLevel,
}

#[component]
pub fn SunshineGauge(props: SunshineGaugeProps) -> Element {
    let pct = props.level.pct_label();
    let mean = format!("{:.1}", props.level.mean);
    let fill_style = format!(
        "position: absolute; left: 0; top: 0; bottom: 0; width: {pct}; background: linear-gradient(90deg, #f9c74f, #f9844a); border-radius: 7px; transition: width 120ms linear;"
    );
    let sun_style = format!(
        "position: absolute; top: -7px; left: calc({pct} - 14px); width: 28px; height: 28px; border-radius: 50%; background: #ffd166; box-shadow: 0 0 12px #ffd166; transition: left 120ms linear;"
    );

    rsx! {
        div {
            class: "sunshine-card",
            style: "padding: 12px 16px; background: rgba(255,255,255,0.05); border-radius: 8px;",
            div {
                style: "display: flex; justify-content: space-between; color: #eee; font-size: 14px; margin-bottom: 10px;",
                span { "Sunshine (7-day)" }
                span { style: "font-weight: bold;", "{mean}" }
            }
            div {
                style: "position: relative; height: 14px; background: #2a2a36; border-radius: 7px;",
                div { style: "{fill_style}" }
                div { style: "{sun_style}", aria_hidden: "true" }
            }
            div {
                style: "display: flex; justify-content: space-between; color: #999; font-size: 11px; margin-top: 8px;",
                span { "Low" }
                span { "High" }
            }
        }
    }
}
