//! Classification and formatting of a missing-player analysis.
//!
//! - [`classify`] turns an [`AnalyticsPayload`] into a [`RenderModel`].
//! - [`summarize`] turns a [`RenderModel`] into display strings and style selectors.
//!
//! The overall tone and the per-metric arrows are computed separately: the tone is
//! negative when *either* swing is negative, while each arrow only looks at its own
//! metric. A badge can therefore point up inside a red card.

use super::entities::{AnalyticsPayload, StatSnapshot};

/// Minimal derived data a view needs to draw the summary.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderModel {
    pub headline: String,
    pub win_pct_delta: f64,
    pub net_rating_delta: f64,
    is_negative: bool,
}

impl RenderModel {
    pub fn new(headline: impl Into<String>, win_pct_delta: f64, net_rating_delta: f64) -> Self {
        Self {
            headline: headline.into(),
            win_pct_delta,
            net_rating_delta,
            is_negative: is_negative_impact(win_pct_delta, net_rating_delta),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.is_negative
    }

    pub fn tone(&self) -> ImpactTone {
        ImpactTone::from_negative(self.is_negative())
    }
}

/// Win% with the player minus win% without. Positive means the team wins more with them.
pub fn win_pct_delta(with_player: &StatSnapshot, without_player: &StatSnapshot) -> f64 {
    with_player.win_pct - without_player.win_pct
}

/// Either signal alone is enough to call the impact negative.
pub fn is_negative_impact(win_pct_delta: f64, net_rating_delta: f64) -> bool {
    win_pct_delta < 0.0 || net_rating_delta < 0.0
}

pub fn classify(payload: &AnalyticsPayload) -> RenderModel {
    RenderModel::new(
        payload.verdict.message.clone(),
        win_pct_delta(&payload.with_player, &payload.without_player),
        payload.verdict.net_rating_swing,
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImpactTone {
    Positive,
    Negative,
}

impl ImpactTone {
    pub fn from_negative(is_negative: bool) -> Self {
        if is_negative {
            ImpactTone::Negative
        } else {
            ImpactTone::Positive
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Zero points up.
    pub fn of(value: f64) -> Self {
        if value < 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

/// Rounds to one decimal on the exact decimal value of `value`, so `1.15` (stored just
/// below the tie) becomes `1.1`. Exact ties round away from zero.
fn round_tenths(value: f64) -> f64 {
    // only multiples of 0.25 can sit exactly on a .x5 tie
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return (value * 10.0).round() / 10.0;
    }
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Rounds to one decimal, then prefixes `+` only if the *rounded* value is above zero.
pub fn format_signed(value: f64) -> String {
    let mut rounded = round_tenths(value);
    if rounded == 0.0 {
        // -0.0 would otherwise print as "-0.0"
        rounded = 0.0;
    }
    if rounded > 0.0 {
        format!("+{rounded:.1}")
    } else {
        format!("{rounded:.1}")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MetricBadge {
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
    pub direction: Direction,
}

impl MetricBadge {
    pub fn new(label: &'static str, delta: f64, unit: &'static str) -> Self {
        Self {
            label,
            value: format_signed(delta),
            unit,
            direction: Direction::of(delta),
        }
    }

    pub fn text(&self) -> String {
        format!("{}: {}{}", self.label, self.value, self.unit)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImpactSummary {
    pub headline: String,
    pub tone: ImpactTone,
    pub badges: [MetricBadge; 2],
}

pub fn summarize(model: &RenderModel) -> ImpactSummary {
    ImpactSummary {
        headline: model.headline.clone(),
        tone: model.tone(),
        badges: [
            MetricBadge::new("Win%", model.win_pct_delta, "%"),
            MetricBadge::new("Net Rtg", model.net_rating_delta, ""),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ImpactVerdict;

    fn payload(with_pct: f64, without_pct: f64, swing: f64) -> AnalyticsPayload {
        AnalyticsPayload {
            with_player: StatSnapshot::with_win_pct(with_pct),
            without_player: StatSnapshot::with_win_pct(without_pct),
            verdict: ImpactVerdict {
                net_rating_swing: swing,
                message: "Significant impact".to_string(),
            },
        }
    }

    #[test]
    fn positive_swings_classify_as_positive() {
        let model = classify(&payload(55.0, 50.0, 3.2));
        assert_eq!(model.win_pct_delta, 5.0);
        assert_eq!(model.net_rating_delta, 3.2);
        assert!(!model.is_negative());

        let summary = summarize(&model);
        assert_eq!(summary.tone, ImpactTone::Positive);
        assert_eq!(summary.badges[0].text(), "Win%: +5.0%");
        assert_eq!(summary.badges[1].text(), "Net Rtg: +3.2");
    }

    #[test]
    fn negative_win_pct_overrides_positive_net_rating() {
        let model = classify(&payload(48.0, 52.0, 1.0));
        assert_eq!(model.win_pct_delta, -4.0);
        assert!(model.is_negative());

        let summary = summarize(&model);
        assert_eq!(summary.tone, ImpactTone::Negative);
        assert_eq!(summary.badges[0].text(), "Win%: -4.0%");
        assert_eq!(summary.badges[0].direction, Direction::Down);
        assert_eq!(summary.badges[1].text(), "Net Rtg: +1.0");
        assert_eq!(summary.badges[1].direction, Direction::Up);
    }

    #[test]
    fn negativity_uses_or_across_sign_quadrants() {
        assert!(!is_negative_impact(2.0, 1.5));
        assert!(is_negative_impact(-2.0, 1.5));
        assert!(is_negative_impact(2.0, -1.5));
        assert!(is_negative_impact(-2.0, -1.5));
        assert!(!is_negative_impact(0.0, 0.0));
    }

    #[test]
    fn win_pct_delta_is_antisymmetric() {
        let pairs = [(55.0, 50.0), (48.25, 52.75), (0.0, 100.0), (61.3, 61.3)];
        for (a, b) in pairs {
            let a = StatSnapshot::with_win_pct(a);
            let b = StatSnapshot::with_win_pct(b);
            assert_eq!(win_pct_delta(&a, &b), -win_pct_delta(&b, &a));
        }
    }

    #[test]
    fn headline_and_swing_pass_through_verbatim() {
        let mut input = payload(50.0, 50.0, -0.37);
        input.verdict.message = "  Lakers struggle without their star!  ".to_string();
        let model = classify(&input);
        assert_eq!(model.headline, "  Lakers struggle without their star!  ");
        assert_eq!(model.net_rating_delta, -0.37);
    }

    #[test]
    fn sign_prefix_checks_rounded_value() {
        assert_eq!(format_signed(0.04), "0.0");
        assert_eq!(format_signed(0.05), "+0.1");
        assert_eq!(format_signed(0.0), "0.0");
        assert_eq!(format_signed(-0.04), "0.0");
        assert_eq!(format_signed(-2.46), "-2.5");
        assert_eq!(format_signed(12.0), "+12.0");
    }

    #[test]
    fn rounding_uses_the_stored_decimal_value() {
        assert_eq!(format_signed(1.15), "+1.1");
        assert_eq!(format_signed(0.35), "+0.3");
        assert_eq!(format_signed(-1.15), "-1.1");
        assert_eq!(format_signed(2.675), "+2.7");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(format_signed(0.25), "+0.3");
        assert_eq!(format_signed(-0.25), "-0.3");
        assert_eq!(format_signed(1.75), "+1.8");
        assert_eq!(format_signed(-0.75), "-0.8");
    }

    #[test]
    fn formatting_is_repeatable() {
        for value in [3.14159, -7.75, 0.04, 100.0] {
            assert_eq!(format_signed(value), format_signed(value));
        }
    }

    #[test]
    fn direction_follows_own_sign_not_tone() {
        assert_eq!(Direction::of(0.0), Direction::Up);
        assert_eq!(Direction::of(-0.04), Direction::Down);

        // win% up, net rating down: card is negative, first arrow still points up
        let summary = summarize(&classify(&payload(60.0, 50.0, -2.0)));
        assert_eq!(summary.tone, ImpactTone::Negative);
        assert_eq!(summary.badges[0].direction, Direction::Up);
        assert_eq!(summary.badges[1].direction, Direction::Down);
    }

    #[test]
    fn zero_swings_are_positive_without_prefix() {
        let summary = summarize(&classify(&payload(50.0, 50.0, 0.0)));
        assert_eq!(summary.tone, ImpactTone::Positive);
        assert_eq!(summary.badges[0].text(), "Win%: 0.0%");
        assert_eq!(summary.badges[1].text(), "Net Rtg: 0.0");
    }
}
