//! Content loaders for reading query data from files.
//!
//! This module provides loaders that convert RON/TOML files into the types
//! `hero-core` and the runtime oracles consume.

pub mod config;
pub mod factory;
pub mod snapshot;
pub mod units;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use snapshot::{SnapshotFile, SnapshotLoader};
pub use units::{UnitStatsEntry, UnitStatsLoader, UnitTable};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
