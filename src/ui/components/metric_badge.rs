use dioxus::prelude::*;

use crate::domain::{Direction, ImpactTone, MetricBadge as BadgeState};
use crate::ui::theme;

#[component]
pub fn MetricBadge(badge: BadgeState, tone: ImpactTone) -> Element {
    let text = badge.text();

    rsx! {
        span {
            class: "{theme::badge_class(tone)}",
            TrendIcon { direction: badge.direction }
            span { "{text}" }
        }
    }
}

#[component]
fn TrendIcon(direction: Direction) -> Element {
    let (line, head) = match direction {
        Direction::Up => ("22 7 13.5 15.5 8.5 10.5 2 17", "16 7 22 7 22 13"),
        Direction::Down => ("22 17 13.5 8.5 8.5 13.5 2 7", "16 17 22 17 22 11"),
    };

    rsx! {
        svg {
            class: "metric-icon",
            "viewBox": "0 0 24 24",
            "fill": "none",
            "stroke": "currentColor",
            "stroke-width": "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            polyline { "points": "{line}" }
            polyline { "points": "{head}" }
        }
    }
}
