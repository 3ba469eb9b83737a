//! Oracle access errors.

use crate::error::{ErrorSeverity, HeroError};

/// Errors that occur when a query needs an oracle the host did not supply.
///
/// Missing *data* (a class without a stats row, a hero without a player) is
/// not an error; lookups report it as `None`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// UnitStatsOracle is not available in the environment.
    #[error("UnitStatsOracle not available")]
    UnitStatsNotAvailable,

    /// PlayerOracle is not available in the environment.
    #[error("PlayerOracle not available")]
    PlayersNotAvailable,
}

impl HeroError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnitStatsNotAvailable => "ORACLE_UNIT_STATS_NOT_AVAILABLE",
            Self::PlayersNotAvailable => "ORACLE_PLAYERS_NOT_AVAILABLE",
        }
    }
}
