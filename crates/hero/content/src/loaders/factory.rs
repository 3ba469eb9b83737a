//! Content factory for loading query data from a data directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use hero_core::{HeroClass, HeroSnapshot, QueryConfig, UnitStats};

use crate::loaders::{ConfigLoader, LoadResult, SnapshotLoader, UnitStatsLoader};

/// Content factory that loads all query content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── query.toml
/// ├── units.ron
/// └── snapshots/
///     └── lane_fight.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load query configuration from `query.toml`.
    pub fn load_config(&self) -> LoadResult<QueryConfig> {
        ConfigLoader::load(&self.data_dir.join("query.toml"))
    }

    /// Load the unit statistics table from `units.ron`.
    pub fn load_units(&self) -> LoadResult<HashMap<HeroClass, UnitStats>> {
        UnitStatsLoader::load(&self.data_dir.join("units.ron"))
    }

    /// Load recorded heroes from `snapshots/{name}.ron`.
    pub fn load_snapshot(&self, name: &str) -> LoadResult<Vec<HeroSnapshot>> {
        let path = self
            .data_dir
            .join("snapshots")
            .join(format!("{}.ron", name));
        SnapshotLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
