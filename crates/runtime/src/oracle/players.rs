//! Player registry implementing [`hero_core::PlayerOracle`].

use hero_core::{PlayerOracle, PlayerRecord};

/// Current player list as last reported by the host.
#[derive(Clone, Debug, Default)]
pub struct PlayerRegistry {
    players: Vec<PlayerRecord>,
}

impl PlayerRegistry {
    pub fn new(players: Vec<PlayerRecord>) -> Self {
        Self { players }
    }

    /// Replace the whole list, typically once per tick.
    pub fn replace(&mut self, players: impl IntoIterator<Item = PlayerRecord>) {
        self.players.clear();
        self.players.extend(players);
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl PlayerOracle for PlayerRegistry {
    fn players(&self) -> &[PlayerRecord] {
        &self.players
    }
}
