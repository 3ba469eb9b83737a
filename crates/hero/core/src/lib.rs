//! Derived-attribute queries over live hero state.
//!
//! `hero-core` answers per-tick questions about a hero (effective attack
//! range, access to invisibility, whether it can die right now) from a
//! read-only [`view::HeroView`]. Expensive answers are memoized in
//! time-windowed caches owned by [`resolve::HeroQueries`]; cheap ones are
//! plain functions over the view.
//!
//! Raw unit statistics and player ownership come from host-provided oracles
//! bundled in [`env::Env`].
pub mod cache;
pub mod config;
pub mod env;
pub mod error;
pub mod resolve;
pub mod state;
pub mod view;

pub use cache::{Clock, FlagKey, FlagResolver, ManualClock, SystemClock, TtlCache};
pub use config::{ConfigError, QueryConfig};
pub use env::{
    Env, HeroEnv, OracleError, PlayerOracle, PlayerRecord, UnitStats, UnitStatsOracle,
};
pub use error::{ErrorSeverity, HeroError};
pub use resolve::{
    HeroQueries, aghanim_state, attack_backswing, attack_point, attack_rate, can_die,
    can_reincarnate, compute_attack_range, compute_can_go_invis, controlling_player,
    is_illusion, projectile_speed,
};
pub use state::{AbilitySlot, EntityHandle, HeroClass, PlayerId, RangeRule, names};
pub use view::{
    AbilitySnapshot, AbilityView, HeroFlags, HeroSnapshot, HeroSnapshotBuilder, HeroView,
    ItemSnapshot, SpellView,
};
