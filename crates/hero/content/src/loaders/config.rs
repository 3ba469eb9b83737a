//! Query configuration loader.

use std::path::Path;

use hero_core::QueryConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for query configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys take their defaults; the result is validated before it
    /// is returned.
    pub fn load(path: &Path) -> LoadResult<QueryConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<QueryConfig> {
        let config: QueryConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid query config: {}", e))?;

        Ok(config)
    }
}
