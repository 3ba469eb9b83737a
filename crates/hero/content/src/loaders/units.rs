//! Unit statistics table loader.

use std::collections::HashMap;
use std::path::Path;

use hero_core::{HeroClass, UnitStats};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One row of the unit statistics table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitStatsEntry {
    pub class: HeroClass,
    pub stats: UnitStats,
}

/// Unit statistics table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitTable {
    pub units: Vec<UnitStatsEntry>,
}

/// Loader for the unit statistics table from RON files.
pub struct UnitStatsLoader;

impl UnitStatsLoader {
    /// Load the unit table from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a UnitTable
    ///
    /// # Returns
    ///
    /// Returns the stats keyed by hero class.
    pub fn load(path: &Path) -> LoadResult<HashMap<HeroClass, UnitStats>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse the unit table from RON text, rejecting duplicate classes.
    pub fn parse(content: &str) -> LoadResult<HashMap<HeroClass, UnitStats>> {
        let table: UnitTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse unit table RON: {}", e))?;

        let mut units = HashMap::with_capacity(table.units.len());
        for entry in table.units {
            if units.insert(entry.class, entry.stats).is_some() {
                anyhow::bail!("Duplicate unit table entry for class '{}'", entry.class);
            }
        }

        tracing::debug!("Loaded unit stats for {} classes", units.len());
        Ok(units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_classes_are_rejected() {
        let content = r#"(
            units: [
                (class: sniper, stats: (attack_point: 0.17, attack_backswing: 0.7, attack_rate: 1.7, projectile_speed: 3000.0)),
                (class: sniper, stats: (attack_point: 0.2, attack_backswing: 0.7, attack_rate: 1.7, projectile_speed: 3000.0)),
            ],
        )"#;
        let err = UnitStatsLoader::parse(content).unwrap_err();
        assert!(err.to_string().contains("sniper"));
    }

    #[test]
    fn unknown_class_fails_to_parse() {
        let content = r#"(units: [(class: not_a_hero, stats: (attack_point: 0.1, attack_backswing: 0.1, attack_rate: 1.0, projectile_speed: 0.0))])"#;
        assert!(UnitStatsLoader::parse(content).is_err());
    }
}
