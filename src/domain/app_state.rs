use super::entities::ImpactKey;

/// Session-only lookup inputs. Nothing here is persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub team_input: String,
    pub player_input: String,
}

impl AppState {
    /// Team id as typed, or `None` when blank.
    pub fn team_id(&self) -> Option<&str> {
        let trimmed = self.team_input.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Player id when the input parses as an unsigned integer.
    pub fn player_id(&self) -> Option<u32> {
        self.player_input.trim().parse().ok()
    }

    pub fn lookup_key(&self) -> Option<ImpactKey> {
        ImpactKey::new(self.team_id(), self.player_id())
    }

    pub fn clear(&mut self) {
        self.team_input.clear();
        self.player_input.clear();
    }
}
