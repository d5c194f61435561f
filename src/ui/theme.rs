//! Tone-specific class helpers so the card, headline and badges always agree.

use crate::domain::ImpactTone;

pub fn card_class(tone: ImpactTone) -> &'static str {
    match tone {
        ImpactTone::Positive => "impact-card tone-positive",
        ImpactTone::Negative => "impact-card tone-negative",
    }
}

pub fn badge_class(tone: ImpactTone) -> &'static str {
    match tone {
        ImpactTone::Positive => "metric-badge tone-positive",
        ImpactTone::Negative => "metric-badge tone-negative",
    }
}

pub fn message_class(tone: ImpactTone) -> &'static str {
    match tone {
        ImpactTone::Positive => "tone-text-positive",
        ImpactTone::Negative => "tone-text-negative",
    }
}

pub fn nav_button_class(active: bool) -> &'static str {
    if active {
        "nav-button nav-button--active"
    } else {
        "nav-button"
    }
}
