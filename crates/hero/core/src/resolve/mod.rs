//! Derived-attribute resolvers.
//!
//! Expensive attributes are memoized by [`HeroQueries`], which owns the
//! stores and the clock:
//!
//! | Attribute        | Store                | Key                         | TTL    |
//! |------------------|----------------------|-----------------------------|--------|
//! | `can_go_invis`   | shared flag store    | `(CanGoInvis, handle)`      | 150 ms |
//! | `attack_range`   | dedicated range store| `handle`                    | 500 ms |
//!
//! Everything else is recomputed on each call.
mod attack_range;
mod invisibility;
mod lethality;
mod lookup;

pub use attack_range::compute_attack_range;
pub use invisibility::compute_can_go_invis;
pub use lethality::{aghanim_state, can_die, can_reincarnate};
pub use lookup::{
    attack_backswing, attack_point, attack_rate, controlling_player, is_illusion,
    projectile_speed,
};

use tracing::trace;

use crate::cache::{Clock, FlagKey, FlagResolver, SystemClock, TtlCache};
use crate::config::{ConfigError, QueryConfig};
use crate::state::EntityHandle;
use crate::view::HeroView;

/// Per-tick query owner holding the memoization stores.
///
/// One instance serves every hero; entries are isolated by key. Hosts should
/// call [`HeroQueries::forget_actor`] when a hero leaves the game.
#[derive(Debug)]
pub struct HeroQueries<C: Clock = SystemClock> {
    clock: C,
    config: QueryConfig,
    flags: TtlCache<FlagKey, bool>,
    ranges: TtlCache<EntityHandle, f32>,
}

impl<C: Clock> HeroQueries<C> {
    /// Creates a query owner with the default configuration.
    pub fn new(clock: C) -> Self {
        let config = QueryConfig::default();
        Self {
            clock,
            flags: TtlCache::bounded(config.max_tracked_actors),
            ranges: TtlCache::bounded(config.max_tracked_actors),
            config,
        }
    }

    /// Creates a query owner with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails validation.
    pub fn with_config(clock: C, config: QueryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            clock,
            flags: TtlCache::bounded(config.max_tracked_actors),
            ranges: TtlCache::bounded(config.max_tracked_actors),
            config,
        })
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Whether the hero can turn invisible, memoized per hero.
    pub fn can_go_invis<H: HeroView>(&mut self, hero: &H) -> bool {
        let key = FlagKey::new(FlagResolver::CanGoInvis, hero.handle());
        let now = self.clock.now();
        if let Some(&cached) = self.flags.get_fresh(&key, now) {
            return cached;
        }

        let value = compute_can_go_invis(hero);
        trace!(actor = %key.actor, value, "recomputed {}", key.resolver);
        self.flags.put(key, value, self.config.invis_ttl(), now);
        value
    }

    /// Effective attack range, memoized per hero.
    pub fn attack_range<H: HeroView>(&mut self, hero: &H) -> f32 {
        let actor = hero.handle();
        let now = self.clock.now();
        if let Some(&cached) = self.ranges.get_fresh(&actor, now) {
            return cached;
        }

        let value = compute_attack_range(hero);
        trace!(actor = %actor, value, "recomputed attack_range");
        self.ranges
            .put(actor, value, self.config.attack_range_ttl(), now);
        value
    }

    /// Drops every cached answer about `actor`.
    pub fn forget_actor(&mut self, actor: EntityHandle) {
        self.ranges.remove(&actor);
        self.flags.retain(|key, _| key.actor != actor);
    }

    /// Keeps cached answers only for actors accepted by `live`.
    pub fn retain_actors(&mut self, mut live: impl FnMut(EntityHandle) -> bool) {
        self.ranges.retain(|actor, _| live(*actor));
        self.flags.retain(|key, _| live(key.actor));
    }

    /// Drops stale entries from both stores, returning how many went.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now();
        self.flags.purge_expired(now) + self.ranges.purge_expired(now)
    }

    /// Number of cached entries across both stores.
    pub fn cached_entries(&self) -> usize {
        self.flags.len() + self.ranges.len()
    }

    /// True if either store holds an entry for `actor`, fresh or not.
    pub fn is_tracking(&self, actor: EntityHandle) -> bool {
        self.ranges.get(&actor).is_some()
            || self
                .flags
                .get(&FlagKey::new(FlagResolver::CanGoInvis, actor))
                .is_some()
    }
}

impl Default for HeroQueries<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}
