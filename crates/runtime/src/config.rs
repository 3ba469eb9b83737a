//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use hero_content::ConfigLoader;
use hero_core::QueryConfig;

/// Settings needed to assemble a [`crate::HeroService`].
#[derive(Clone, Debug, Default)]
pub struct RuntimeConfig {
    pub query: QueryConfig,
    /// TOML file whose values replace `query` before env overrides apply.
    pub query_config_path: Option<PathBuf>,
    /// RON unit table; the table bundled with `hero-content` when unset.
    pub unit_table_path: Option<PathBuf>,
}

impl RuntimeConfig {
    pub fn new(query: QueryConfig) -> Self {
        Self {
            query,
            query_config_path: None,
            unit_table_path: None,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HERO_QUERY_CONFIG` - Path to a query config TOML file (default: none)
    /// - `HERO_UNIT_TABLE` - Path to a unit table RON file (default: bundled table)
    /// - `HERO_INVIS_TTL_MS` - Invisibility freshness window (default: 150)
    /// - `HERO_RANGE_TTL_MS` - Attack range freshness window (default: 500)
    /// - `HERO_MAX_TRACKED_ACTORS` - Per-store actor bound (default: 256)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.query_config_path = env::var("HERO_QUERY_CONFIG").ok().map(PathBuf::from);
        config.unit_table_path = env::var("HERO_UNIT_TABLE").ok().map(PathBuf::from);
        config.apply_env_overrides();

        config
    }

    /// Applies `HERO_*` numeric overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(read_env);
    }

    /// Applies `HERO_*` numeric overrides on top of `query`, reading each
    /// variable through `lookup`.
    ///
    /// Unparseable values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(ms) = parse_var::<u64>(&lookup, "HERO_INVIS_TTL_MS") {
            self.query.invis_ttl_ms = ms;
        }
        if let Some(ms) = parse_var::<u64>(&lookup, "HERO_RANGE_TTL_MS") {
            self.query.attack_range_ttl_ms = ms;
        }
        if let Some(max) = parse_var::<usize>(&lookup, "HERO_MAX_TRACKED_ACTORS") {
            self.query.max_tracked_actors = max;
        }
    }

    /// Replaces `query` with the TOML at `query_config_path`, if any, and
    /// re-applies the overrides from `lookup` on top of it.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, parsed, or validated.
    pub fn load_query_file(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<()> {
        if let Some(path) = &self.query_config_path {
            self.query = ConfigLoader::load(path)?;
            self.apply_overrides(lookup);
        }
        Ok(())
    }
}

/// Reads one variable from the process environment.
pub fn read_env(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn overrides_replace_only_the_named_fields() {
        let mut config = RuntimeConfig::default();
        config.apply_overrides(vars(&[("HERO_RANGE_TTL_MS", "250")]));

        assert_eq!(config.query.attack_range_ttl_ms, 250);
        assert_eq!(config.query.invis_ttl_ms, QueryConfig::DEFAULT_INVIS_TTL_MS);
        assert_eq!(
            config.query.max_tracked_actors,
            QueryConfig::DEFAULT_MAX_TRACKED_ACTORS
        );
    }

    #[test]
    fn unparseable_overrides_are_ignored() {
        let mut config = RuntimeConfig::default();
        config.apply_overrides(vars(&[
            ("HERO_INVIS_TTL_MS", "soon"),
            ("HERO_MAX_TRACKED_ACTORS", "-4"),
        ]));

        assert_eq!(config.query, QueryConfig::default());
    }

    #[test]
    fn env_overrides_win_over_the_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "invis_ttl_ms = 40").unwrap();
        writeln!(file, "attack_range_ttl_ms = 80").unwrap();

        let mut config = RuntimeConfig::default();
        config.query_config_path = Some(file.path().to_path_buf());
        config.load_query_file(vars(&[("HERO_INVIS_TTL_MS", "90")])).unwrap();

        // file replaces defaults, env replaces file
        assert_eq!(config.query.invis_ttl_ms, 90);
        assert_eq!(config.query.attack_range_ttl_ms, 80);
        assert_eq!(
            config.query.max_tracked_actors,
            QueryConfig::DEFAULT_MAX_TRACKED_ACTORS
        );
    }

    #[test]
    fn without_a_file_query_is_left_alone() {
        let mut config = RuntimeConfig::new(QueryConfig::with_ttls(10, 20));
        config.load_query_file(vars(&[("HERO_INVIS_TTL_MS", "90")])).unwrap();

        assert_eq!(config.query, QueryConfig::with_ttls(10, 20));
    }
}
