//! Hero snapshot loader.

use std::path::Path;

use hero_core::HeroSnapshot;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Recorded heroes for one tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotFile {
    pub heroes: Vec<HeroSnapshot>,
}

/// Loader for hero snapshots from RON files.
pub struct SnapshotLoader;

impl SnapshotLoader {
    /// Load recorded heroes from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<HeroSnapshot>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse recorded heroes from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<HeroSnapshot>> {
        let file: SnapshotFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse hero snapshot RON: {}", e))?;

        Ok(file.heroes)
    }
}
