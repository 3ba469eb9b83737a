//! Per-tick query façade for bot hosts.
//!
//! The host owns one [`HeroService`] for the whole match. Each tick it calls
//! [`HeroService::begin_tick`] with the heroes still present, refreshes the
//! player list, and then queries freely; repeated queries within a tick hit
//! the memoization stores.

use std::collections::HashSet;
use std::sync::Arc;

use hero_content::{ContentFactory, UnitStatsLoader};
use hero_core::{
    Clock, EntityHandle, HeroQueries, HeroView, PlayerId, PlayerRecord, QueryConfig, SystemClock,
};
use tracing::{debug, info};

use crate::config::{RuntimeConfig, read_env};
use crate::error::Result;
use crate::oracle::{OracleManager, PlayerRegistry, UnitStatsOracleImpl};

/// Every derived fact about one hero, gathered in one call.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct HeroProfile {
    pub actor: EntityHandle,
    pub controller: Option<PlayerId>,
    pub attack_range: f32,
    pub can_go_invis: bool,
    pub aghanim_state: bool,
    pub can_reincarnate: bool,
    pub can_die: bool,
    pub is_illusion: bool,
    pub attack_point: Option<f64>,
    pub attack_backswing: Option<f64>,
    pub attack_rate: Option<f64>,
    pub projectile_speed: Option<f64>,
}

/// Owns the query stores and oracles for one match.
pub struct HeroService<C: Clock = SystemClock> {
    queries: HeroQueries<C>,
    oracles: OracleManager,
}

impl HeroService<SystemClock> {
    pub fn builder() -> HeroServiceBuilder {
        HeroServiceBuilder::new()
    }
}

impl<C: Clock> HeroService<C> {
    pub fn new(queries: HeroQueries<C>, oracles: OracleManager) -> Self {
        Self { queries, oracles }
    }

    pub fn queries(&self) -> &HeroQueries<C> {
        &self.queries
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    /// Forgets cached answers for heroes no longer in `live` and returns how
    /// many entries were dropped.
    pub fn begin_tick(&mut self, live: impl IntoIterator<Item = EntityHandle>) -> usize {
        let live: HashSet<EntityHandle> = live.into_iter().collect();
        let before = self.queries.cached_entries();
        self.queries.retain_actors(|actor| live.contains(&actor));
        let dropped = before - self.queries.cached_entries();
        if dropped > 0 {
            debug!(
                "Dropped {} cached entries for departed heroes ({} live)",
                dropped,
                live.len()
            );
        }
        dropped
    }

    /// Removes every cached answer for a hero the host just destroyed.
    pub fn forget_actor(&mut self, actor: EntityHandle) {
        self.queries.forget_actor(actor);
    }

    /// Replaces the player list used for controller lookups.
    pub fn update_players(&mut self, players: impl IntoIterator<Item = PlayerRecord>) {
        self.oracles.players_mut().replace(players);
    }

    pub fn can_go_invis<H: HeroView>(&mut self, hero: &H) -> bool {
        self.queries.can_go_invis(hero)
    }

    pub fn attack_range<H: HeroView>(&mut self, hero: &H) -> f32 {
        self.queries.attack_range(hero)
    }

    pub fn can_die<H: HeroView>(
        &self,
        hero: &H,
        source_ability: Option<&str>,
        ignore_reincarnation: bool,
    ) -> bool {
        hero_core::can_die(hero, source_ability, ignore_reincarnation)
    }

    pub fn aghanim_state<H: HeroView>(&self, hero: &H) -> bool {
        hero_core::aghanim_state(hero)
    }

    pub fn can_reincarnate<H: HeroView>(&self, hero: &H) -> bool {
        hero_core::can_reincarnate(hero)
    }

    pub fn is_illusion<H: HeroView>(&self, hero: &H) -> bool {
        hero_core::is_illusion(hero)
    }

    pub fn controlling_player<H: HeroView>(&self, hero: &H) -> Result<Option<PlayerId>> {
        Ok(hero_core::controlling_player(
            hero,
            &self.oracles.as_hero_env(),
        )?)
    }

    pub fn attack_point<H: HeroView>(&self, hero: &H) -> Result<Option<f64>> {
        Ok(hero_core::attack_point(hero, &self.oracles.as_hero_env())?)
    }

    pub fn attack_backswing<H: HeroView>(&self, hero: &H) -> Result<Option<f64>> {
        Ok(hero_core::attack_backswing(hero, &self.oracles.as_hero_env())?)
    }

    pub fn attack_rate<H: HeroView>(&self, hero: &H) -> Result<Option<f64>> {
        Ok(hero_core::attack_rate(hero, &self.oracles.as_hero_env())?)
    }

    pub fn projectile_speed<H: HeroView>(&self, hero: &H) -> Result<Option<f64>> {
        Ok(hero_core::projectile_speed(hero, &self.oracles.as_hero_env())?)
    }

    /// Resolves every attribute of `hero` at once.
    ///
    /// `can_die` is evaluated for an unspecified source without ignoring
    /// reincarnation.
    ///
    /// # Errors
    ///
    /// Only fails when an oracle is missing from the environment, which the
    /// builder never produces.
    pub fn profile<H: HeroView>(&mut self, hero: &H) -> Result<HeroProfile> {
        let attack_range = self.queries.attack_range(hero);
        let can_go_invis = self.queries.can_go_invis(hero);

        let env = self.oracles.as_hero_env();
        Ok(HeroProfile {
            actor: hero.handle(),
            controller: hero_core::controlling_player(hero, &env)?,
            attack_range,
            can_go_invis,
            aghanim_state: hero_core::aghanim_state(hero),
            can_reincarnate: hero_core::can_reincarnate(hero),
            can_die: hero_core::can_die(hero, None, false),
            is_illusion: hero_core::is_illusion(hero),
            attack_point: hero_core::attack_point(hero, &env)?,
            attack_backswing: hero_core::attack_backswing(hero, &env)?,
            attack_rate: hero_core::attack_rate(hero, &env)?,
            projectile_speed: hero_core::projectile_speed(hero, &env)?,
        })
    }
}

/// Builder for [`HeroService`].
#[derive(Default)]
pub struct HeroServiceBuilder {
    config: RuntimeConfig,
    units: Option<UnitStatsOracleImpl>,
    players: PlayerRegistry,
}

impl HeroServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn query_config(mut self, query: QueryConfig) -> Self {
        self.config.query = query;
        self
    }

    /// Use an already-built unit oracle instead of loading a table.
    pub fn units(mut self, units: UnitStatsOracleImpl) -> Self {
        self.units = Some(units);
        self
    }

    pub fn players(mut self, players: Vec<PlayerRecord>) -> Self {
        self.players = PlayerRegistry::new(players);
        self
    }

    /// Builds a service on the system clock.
    pub fn build(self) -> Result<HeroService<SystemClock>> {
        self.build_with_clock(SystemClock)
    }

    /// Loads configured content, validates the query config, and builds the
    /// service on `clock`.
    pub fn build_with_clock<C: Clock>(self, clock: C) -> Result<HeroService<C>> {
        let mut config = self.config;
        config.load_query_file(read_env)?;

        let units = match (self.units, &config.unit_table_path) {
            (Some(units), _) => units,
            (None, Some(path)) => UnitStatsOracleImpl::from_table(UnitStatsLoader::load(path)?),
            (None, None) => UnitStatsOracleImpl::from_table(ContentFactory::bundled().load_units()?),
        };

        let queries = HeroQueries::with_config(clock, config.query.clone())?;
        info!(
            "Hero service ready: {} unit rows, invis ttl {}ms, range ttl {}ms",
            units.len(),
            config.query.invis_ttl_ms,
            config.query.attack_range_ttl_ms
        );

        Ok(HeroService::new(
            queries,
            OracleManager::new(Arc::new(units), self.players),
        ))
    }
}
