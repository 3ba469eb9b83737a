//! Host-side wiring for the hero query layer.
//!
//! This crate bundles the oracle implementations, configuration loading, and
//! the [`HeroService`] façade a bot host embeds in its per-tick update:
//! - [`service`] owns the memoization stores and answers every query
//! - [`oracle`] provides in-memory unit statistics and player registry
//! - [`config`] reads runtime settings from the process environment
pub mod config;
pub mod error;
pub mod oracle;
pub mod service;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use oracle::{OracleManager, PlayerRegistry, UnitStatsOracleImpl};
pub use service::{HeroProfile, HeroService, HeroServiceBuilder};
