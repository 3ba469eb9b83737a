//! Traits describing host-provided lookups.
//!
//! Oracles expose static unit statistics and the live player list. The
//! [`Env`] aggregate bundles them so pass-through queries can reach both
//! without hard coupling to concrete implementations.
mod error;
mod players;
mod units;

pub use error::OracleError;
pub use players::{PlayerOracle, PlayerRecord};
pub use units::{UnitStats, UnitStatsOracle};

use crate::state::HeroClass;

/// Aggregates the read-only oracles used by pass-through queries.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, U, P>
where
    U: UnitStatsOracle + ?Sized,
    P: PlayerOracle + ?Sized,
{
    units: Option<&'a U>,
    players: Option<&'a P>,
}

pub type HeroEnv<'a> = Env<'a, dyn UnitStatsOracle + 'a, dyn PlayerOracle + 'a>;

impl<'a, U, P> Env<'a, U, P>
where
    U: UnitStatsOracle + ?Sized,
    P: PlayerOracle + ?Sized,
{
    pub fn new(units: Option<&'a U>, players: Option<&'a P>) -> Self {
        Self { units, players }
    }

    pub fn with_all(units: &'a U, players: &'a P) -> Self {
        Self::new(Some(units), Some(players))
    }

    pub fn empty() -> Self {
        Self {
            units: None,
            players: None,
        }
    }

    /// Returns the UnitStatsOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::UnitStatsNotAvailable` if no unit oracle was provided.
    pub fn units(&self) -> Result<&'a U, OracleError> {
        self.units.ok_or(OracleError::UnitStatsNotAvailable)
    }

    /// Returns the PlayerOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::PlayersNotAvailable` if no player oracle was provided.
    pub fn players(&self) -> Result<&'a P, OracleError> {
        self.players.ok_or(OracleError::PlayersNotAvailable)
    }

    /// Looks up the stats row for `class`.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::UnitStatsNotAvailable` if no unit oracle was provided.
    pub fn unit_stats(&self, class: HeroClass) -> Result<Option<UnitStats>, OracleError> {
        Ok(self.units()?.unit_stats(class))
    }
}

impl<'a, U, P> Env<'a, U, P>
where
    U: UnitStatsOracle + 'a,
    P: PlayerOracle + 'a,
{
    /// Converts this environment into a trait-object based `HeroEnv`.
    pub fn as_hero_env(&self) -> HeroEnv<'a> {
        let units: Option<&'a dyn UnitStatsOracle> = self.units.map(|units| units as _);
        let players: Option<&'a dyn PlayerOracle> = self.players.map(|players| players as _);
        Env::new(units, players)
    }
}
