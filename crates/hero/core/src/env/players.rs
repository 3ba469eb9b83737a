use crate::state::{EntityHandle, PlayerId};

/// Oracle exposing the host's current player list.
pub trait PlayerOracle {
    fn players(&self) -> &[PlayerRecord];
}

/// One player slot and the hero it controls, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub hero: Option<EntityHandle>,
    /// False once the engine has released the hero entity.
    pub hero_valid: bool,
}

impl PlayerRecord {
    pub const fn new(id: PlayerId, hero: Option<EntityHandle>) -> Self {
        Self {
            id,
            hero,
            hero_valid: hero.is_some(),
        }
    }

    pub const fn with_hero_valid(mut self, valid: bool) -> Self {
        self.hero_valid = valid;
        self
    }

    /// True if this player currently controls `actor` through a live entity.
    pub fn controls(&self, actor: EntityHandle) -> bool {
        self.hero_valid && self.hero == Some(actor)
    }
}
