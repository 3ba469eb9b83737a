//! Runtime implementations of the `hero-core` oracle traits.
//!
//! These are bundled into an [`OracleManager`] so the service can build
//! [`hero_core::HeroEnv`] views on demand. Unit statistics are immutable at
//! runtime; the player list is replaced by the host each tick.
mod players;
mod units;

use std::sync::Arc;

use hero_core::{Env, HeroEnv};

pub use players::PlayerRegistry;
pub use units::UnitStatsOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone, Debug, Default)]
pub struct OracleManager {
    pub(crate) units: Arc<UnitStatsOracleImpl>,
    pub(crate) players: PlayerRegistry,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(units: Arc<UnitStatsOracleImpl>, players: PlayerRegistry) -> Self {
        Self { units, players }
    }

    /// Converts oracle manager into HeroEnv for hero-core
    pub fn as_hero_env(&self) -> HeroEnv<'_> {
        Env::with_all(self.units.as_ref(), &self.players).as_hero_env()
    }

    pub fn units(&self) -> &UnitStatsOracleImpl {
        &self.units
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut PlayerRegistry {
        &mut self.players
    }
}
