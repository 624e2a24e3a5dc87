//! One narrative text panel, faded by scroll progress.

use dioxus::prelude::*;
use sw_data::narrative::Beat;

const CARD_STYLE: &str = "position: fixed; left: 24px; bottom: 24px; max-width: 360px; padding: 14px 18px; background: rgba(12,12,20,0.85); color: #eee; border-radius: 8px; pointer-events: none; z-index: 10;";

#[derive(Props, Clone, PartialEq)]
pub struct StoryPanelProps {
    pub beat: Beat,
    /// Unclamped scroll progress
    pub progress: f64,
}

/// Inline style of a card: faded by opacity, removed from layout once invisible.
fn panel_style(beat: &Beat, progress: f64) -> String {
    if !beat.is_visible(progress) {
        return format!("display: none; {CARD_STYLE}");
    }
    let opacity = beat.opacity(progress);
    format!("display: block; opacity: {opacity:.3}; {CARD_STYLE}")
}

/// Fixed overlay card for one beat of the story.
#[component]
pub fn StoryPanel(props: StoryPanelProps) -> Element {
    let style = panel_style(&props.beat, props.progress);

    rsx! {
        div {
            style: "{style}",
            h2 { style: "margin: 0 0 6px 0; font-size: 18px;", "{props.beat.title}" }
            p {
                style: "margin: 0; font-size: 14px; line-height: 1.4; color: #ccc;",
                "{props.beat.body}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BEAT: Beat = Beat {
        start: 0.2,
        end: 0.4,
        title: "Spring",
        body: "",
    };

    #[test]
    fn card_is_hidden_outside_its_fade() {
        assert!(panel_style(&BEAT, 0.0).starts_with("display: none;"));
        assert!(panel_style(&BEAT, 0.9).starts_with("display: none;"));
    }

    #[test]
    fn card_fades_in_at_the_edge() {
        assert!(panel_style(&BEAT, 0.3).starts_with("display: block; opacity: 1.000;"));
        assert!(panel_style(&BEAT, 0.175).starts_with("display: block; opacity: 0.500;"));
    }
}
