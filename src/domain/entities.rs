#![allow(dead_code)]

use std::fmt;

use serde::{Deserialize, Serialize};

/// Team identifier as used by the analytics service (e.g. "LAL").
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub String);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Positive numeric player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Composite lookup key for one "team without player" analysis.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImpactKey {
    pub player_id: PlayerId,
    pub team_id: TeamId,
}

impl ImpactKey {
    /// Builds a key only when both identifiers are present and non-empty.
    ///
    /// A blank team id or a zero player id disables the lookup entirely.
    pub fn new(team_id: Option<&str>, player_id: Option<u32>) -> Option<Self> {
        let team_id = team_id.map(str::trim).filter(|id| !id.is_empty())?;
        let player_id = player_id.filter(|id| *id > 0)?;
        Some(Self {
            player_id: PlayerId(player_id),
            team_id: TeamId(team_id.to_string()),
        })
    }
}

impl fmt::Display for ImpactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player-impact/{}/{}", self.player_id, self.team_id)
    }
}

/// Team performance over a set of games.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatSnapshot {
    /// Win percentage on a 0-100 scale.
    pub win_pct: f64,
    #[serde(default)]
    pub games_played: Option<u32>,
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
    #[serde(default)]
    pub net_rating: Option<f64>,
    #[serde(default)]
    pub offensive_rating: Option<f64>,
    #[serde(default)]
    pub defensive_rating: Option<f64>,
}

impl StatSnapshot {
    pub fn with_win_pct(win_pct: f64) -> Self {
        Self {
            win_pct,
            games_played: None,
            wins: None,
            losses: None,
            net_rating: None,
            offensive_rating: None,
            defensive_rating: None,
        }
    }
}

/// Judgment computed by the analytics service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactVerdict {
    pub net_rating_swing: f64,
    pub message: String,
}

/// Response of the missing-player analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsPayload {
    #[serde(rename = "stats_with")]
    pub with_player: StatSnapshot,
    #[serde(rename = "stats_without")]
    pub without_player: StatSnapshot,
    #[serde(rename = "impact_analysis")]
    pub verdict: ImpactVerdict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_requires_both_identifiers() {
        assert!(ImpactKey::new(None, Some(23)).is_none());
        assert!(ImpactKey::new(Some("LAL"), None).is_none());
        assert!(ImpactKey::new(None, None).is_none());
    }

    #[test]
    fn key_rejects_blank_team_and_zero_player() {
        assert!(ImpactKey::new(Some(""), Some(23)).is_none());
        assert!(ImpactKey::new(Some("   "), Some(23)).is_none());
        assert!(ImpactKey::new(Some("LAL"), Some(0)).is_none());
    }

    #[test]
    fn key_trims_team_id() {
        let key = ImpactKey::new(Some(" BOS "), Some(7)).expect("key");
        assert_eq!(key.team_id, TeamId("BOS".to_string()));
        assert_eq!(key.player_id, PlayerId(7));
        assert_eq!(key.to_string(), "player-impact/7/BOS");
    }

    #[test]
    fn payload_decodes_service_shape() {
        let raw = r#"{
            "stats_with": { "win_pct": 55.0, "games_played": 40, "wins": 22, "losses": 18 },
            "stats_without": { "win_pct": 50.0, "net_rating": -1.5 },
            "impact_analysis": { "net_rating_swing": 3.2, "message": "Team is better with this player" }
        }"#;
        let payload: AnalyticsPayload = serde_json::from_str(raw).expect("payload");
        assert_eq!(payload.with_player.win_pct, 55.0);
        assert_eq!(payload.with_player.games_played, Some(40));
        assert_eq!(payload.without_player.net_rating, Some(-1.5));
        assert_eq!(payload.without_player.wins, None);
        assert_eq!(payload.verdict.net_rating_swing, 3.2);
        assert_eq!(payload.verdict.message, "Team is better with this player");
    }

    #[test]
    fn payload_missing_verdict_is_rejected() {
        let raw = r#"{ "stats_with": { "win_pct": 55.0 }, "stats_without": { "win_pct": 50.0 } }"#;
        assert!(serde_json::from_str::<AnalyticsPayload>(raw).is_err());
    }
}
