use dioxus::prelude::*;

use crate::app::ImpactQueryClient;
use crate::domain::{classify, summarize, AnalyticsPayload, ImpactKey, ImpactSummary};
use crate::infra::query::{QueryError, QueryState};
use crate::ui::{components::metric_badge::MetricBadge, theme};

/// What the widget shows for a given fetch state.
#[derive(Clone, Debug, PartialEq)]
pub enum ImpactView {
    /// Nothing at all: lookup disabled or the request failed.
    Hidden,
    Analysing,
    Summary(ImpactSummary),
}

impl ImpactView {
    pub fn from_state(state: &QueryState<AnalyticsPayload>) -> Self {
        match state {
            QueryState::Disabled | QueryState::Failed => ImpactView::Hidden,
            QueryState::Pending => ImpactView::Analysing,
            QueryState::Resolved(payload) => ImpactView::Summary(summarize(&classify(payload))),
        }
    }
}

/// Summary of how a team fares without `player_id`. Renders nothing unless both ids are set.
#[component]
pub fn PlayerImpactSummary(team_id: Option<String>, player_id: Option<u32>) -> Element {
    let client = use_context::<Option<ImpactQueryClient>>();
    let key = ImpactKey::new(team_id.as_deref(), player_id);

    let analysis = use_resource(use_reactive(&key, move |key| {
        let client = client.clone();
        async move {
            match client {
                Some(client) => client.fetch_settled(key).await,
                None => key.map(|key| {
                    (
                        key,
                        Err(QueryError::Source("analytics client unavailable".to_string())),
                    )
                }),
            }
        }
    }));

    let state = QueryState::settle(
        key.as_ref(),
        analysis.read().as_ref().and_then(|settled| settled.as_ref()),
    );

    match ImpactView::from_state(&state) {
        ImpactView::Hidden => rsx! { Fragment {} },
        ImpactView::Analysing => rsx! {
            div { class: "impact-placeholder", "Analysing impact..." }
        },
        ImpactView::Summary(summary) => rsx! { ImpactCard { summary } },
    }
}

#[component]
fn ImpactCard(summary: ImpactSummary) -> Element {
    let tone = summary.tone;
    let message_class = theme::message_class(tone);

    rsx! {
        div {
            class: "{theme::card_class(tone)}",
            div { class: "impact-message",
                AlertIcon { tone_class: message_class }
                p { class: "impact-headline {message_class}", "{summary.headline}" }
            }
            div { class: "impact-badges",
                for badge in summary.badges.iter().cloned() {
                    MetricBadge { key: "{badge.label}", badge, tone }
                }
            }
        }
    }
}

#[component]
fn AlertIcon(tone_class: &'static str) -> Element {
    rsx! {
        svg {
            class: "impact-icon {tone_class}",
            "viewBox": "0 0 24 24",
            "fill": "none",
            "stroke": "currentColor",
            "stroke-width": "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            circle { "cx": "12", "cy": "12", "r": "10" }
            line { "x1": "12", "y1": "8", "x2": "12", "y2": "12" }
            line { "x1": "12", "y1": "16", "x2": "12.01", "y2": "16" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Direction, ImpactTone, ImpactVerdict, StatSnapshot};

    fn payload(with_pct: f64, without_pct: f64, swing: f64) -> AnalyticsPayload {
        AnalyticsPayload {
            with_player: StatSnapshot::with_win_pct(with_pct),
            without_player: StatSnapshot::with_win_pct(without_pct),
            verdict: ImpactVerdict {
                net_rating_swing: swing,
                message: "Big loss for the rotation".to_string(),
            },
        }
    }

    #[test]
    fn disabled_lookup_renders_nothing() {
        assert_eq!(ImpactView::from_state(&QueryState::Disabled), ImpactView::Hidden);
    }

    #[test]
    fn failed_lookup_renders_nothing() {
        assert_eq!(ImpactView::from_state(&QueryState::Failed), ImpactView::Hidden);
    }

    #[test]
    fn pending_lookup_shows_placeholder() {
        assert_eq!(ImpactView::from_state(&QueryState::Pending), ImpactView::Analysing);
    }

    #[test]
    fn resolved_lookup_builds_summary() {
        let view = ImpactView::from_state(&QueryState::Resolved(payload(48.0, 52.0, 1.0)));
        let summary = match view {
            ImpactView::Summary(summary) => summary,
            other => panic!("expected a summary, got {other:?}"),
        };
        assert_eq!(summary.headline, "Big loss for the rotation");
        assert_eq!(summary.tone, ImpactTone::Negative);
        assert_eq!(summary.badges[0].text(), "Win%: -4.0%");
        assert_eq!(summary.badges[0].direction, Direction::Down);
        assert_eq!(summary.badges[1].text(), "Net Rtg: +1.0");
        assert_eq!(summary.badges[1].direction, Direction::Up);
    }

    #[test]
    fn missing_identifiers_never_reach_the_classifier() {
        let key = ImpactKey::new(None, Some(2544));
        let state = QueryState::<AnalyticsPayload>::settle(key.as_ref(), None);
        assert_eq!(ImpactView::from_state(&state), ImpactView::Hidden);
    }
}
