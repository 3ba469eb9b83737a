//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for the static data the query layer consumes:
//! - Unit statistics table (RON), backing the unit statistics oracle
//! - Query configuration (TOML)
//! - Recorded hero snapshots (RON), used by the probe and replay tooling
//!
//! Content is consumed by runtime oracles and never appears in cached state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, SnapshotLoader, UnitStatsEntry, UnitStatsLoader,
    UnitTable,
};
