use crate::error::{ErrorSeverity, HeroError};
use core::time::Duration;

/// Query configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QueryConfig {
    /// How long an invisibility answer stays fresh, in milliseconds.
    pub invis_ttl_ms: u64,
    /// How long an attack-range answer stays fresh, in milliseconds.
    pub attack_range_ttl_ms: u64,
    /// Upper bound on cached actors per resolver store.
    pub max_tracked_actors: usize,
}

impl QueryConfig {
    // ===== compile-time constants used as type parameters =====
    /// Ability slots carried by a hero snapshot (spells, talents, hidden sub-abilities).
    pub const MAX_SPELLS: usize = 24;
    /// Item slots carried by a hero snapshot (inventory, backpack, neutral).
    pub const MAX_ITEMS: usize = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_INVIS_TTL_MS: u64 = 150;
    pub const DEFAULT_ATTACK_RANGE_TTL_MS: u64 = 500;
    pub const DEFAULT_MAX_TRACKED_ACTORS: usize = 256;

    pub fn new() -> Self {
        Self {
            invis_ttl_ms: Self::DEFAULT_INVIS_TTL_MS,
            attack_range_ttl_ms: Self::DEFAULT_ATTACK_RANGE_TTL_MS,
            max_tracked_actors: Self::DEFAULT_MAX_TRACKED_ACTORS,
        }
    }

    pub fn with_ttls(invis_ttl_ms: u64, attack_range_ttl_ms: u64) -> Self {
        Self {
            invis_ttl_ms,
            attack_range_ttl_ms,
            ..Self::new()
        }
    }

    pub fn with_max_tracked_actors(mut self, max_tracked_actors: usize) -> Self {
        self.max_tracked_actors = max_tracked_actors;
        self
    }

    pub fn invis_ttl(&self) -> Duration {
        Duration::from_millis(self.invis_ttl_ms)
    }

    pub fn attack_range_ttl(&self) -> Duration {
        Duration::from_millis(self.attack_range_ttl_ms)
    }

    /// Rejects values that would make every cached answer stale on arrival
    /// or leave the stores with no room.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.invis_ttl_ms == 0 {
            return Err(ConfigError::ZeroTtl("invis_ttl_ms"));
        }
        if self.attack_range_ttl_ms == 0 {
            return Err(ConfigError::ZeroTtl("attack_range_ttl_ms"));
        }
        if self.max_tracked_actors == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors raised by [`QueryConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be greater than zero")]
    ZeroTtl(&'static str),

    #[error("max_tracked_actors must be greater than zero")]
    ZeroCapacity,
}

impl HeroError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroTtl(_) => "CONFIG_ZERO_TTL",
            Self::ZeroCapacity => "CONFIG_ZERO_CAPACITY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_resolver_windows() {
        let config = QueryConfig::default();
        assert_eq!(config.invis_ttl(), Duration::from_millis(150));
        assert_eq!(config.attack_range_ttl(), Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_values_are_rejected() {
        assert_eq!(
            QueryConfig::with_ttls(0, 500).validate(),
            Err(ConfigError::ZeroTtl("invis_ttl_ms"))
        );
        assert_eq!(
            QueryConfig::with_ttls(150, 0).validate(),
            Err(ConfigError::ZeroTtl("attack_range_ttl_ms"))
        );

        let err = QueryConfig::new()
            .with_max_tracked_actors(0)
            .validate()
            .unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ZERO_CAPACITY");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }
}
