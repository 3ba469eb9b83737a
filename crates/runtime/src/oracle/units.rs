//! Unit statistics oracle implementing [`hero_core::UnitStatsOracle`].

use std::collections::HashMap;

use hero_core::{HeroClass, UnitStats, UnitStatsOracle};

/// Oracle providing per-class attack timing rows.
#[derive(Clone, Debug, Default)]
pub struct UnitStatsOracleImpl {
    units: HashMap<HeroClass, UnitStats>,
}

impl UnitStatsOracleImpl {
    /// Create an empty oracle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a table produced by `hero_content::UnitStatsLoader`.
    pub fn from_table(units: HashMap<HeroClass, UnitStats>) -> Self {
        Self { units }
    }

    /// Add or replace the row for `class`.
    pub fn add(&mut self, class: HeroClass, stats: UnitStats) {
        self.units.insert(class, stats);
    }

    pub fn contains(&self, class: HeroClass) -> bool {
        self.units.contains_key(&class)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl UnitStatsOracle for UnitStatsOracleImpl {
    fn unit_stats(&self, class: HeroClass) -> Option<UnitStats> {
        self.units.get(&class).copied()
    }
}
