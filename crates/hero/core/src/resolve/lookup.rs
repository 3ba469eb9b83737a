//! Pass-through lookups answered by host oracles or the view itself.

use crate::env::{HeroEnv, OracleError, PlayerOracle, UnitStats};
use crate::state::PlayerId;
use crate::view::HeroView;

fn stat<H: HeroView>(
    hero: &H,
    env: &HeroEnv<'_>,
    field: fn(&UnitStats) -> f64,
) -> Result<Option<f64>, OracleError> {
    Ok(env.unit_stats(hero.class())?.as_ref().map(field))
}

/// Seconds from attack start to the damage point.
///
/// # Errors
///
/// Returns `OracleError::UnitStatsNotAvailable` if the env has no unit oracle.
pub fn attack_point<H: HeroView>(hero: &H, env: &HeroEnv<'_>) -> Result<Option<f64>, OracleError> {
    stat(hero, env, |s| s.attack_point)
}

/// Seconds of recovery animation after the damage point.
///
/// # Errors
///
/// Returns `OracleError::UnitStatsNotAvailable` if the env has no unit oracle.
pub fn attack_backswing<H: HeroView>(
    hero: &H,
    env: &HeroEnv<'_>,
) -> Result<Option<f64>, OracleError> {
    stat(hero, env, |s| s.attack_backswing)
}

/// Base attack time in seconds.
///
/// # Errors
///
/// Returns `OracleError::UnitStatsNotAvailable` if the env has no unit oracle.
pub fn attack_rate<H: HeroView>(hero: &H, env: &HeroEnv<'_>) -> Result<Option<f64>, OracleError> {
    stat(hero, env, |s| s.attack_rate)
}

/// Attack projectile speed; zero for melee classes.
///
/// # Errors
///
/// Returns `OracleError::UnitStatsNotAvailable` if the env has no unit oracle.
pub fn projectile_speed<H: HeroView>(
    hero: &H,
    env: &HeroEnv<'_>,
) -> Result<Option<f64>, OracleError> {
    stat(hero, env, |s| s.projectile_speed)
}

/// Finds the player controlling `hero` by scanning the player list.
///
/// Players whose hero entity is no longer valid never match.
///
/// # Errors
///
/// Returns `OracleError::PlayersNotAvailable` if the env has no player oracle.
pub fn controlling_player<H: HeroView>(
    hero: &H,
    env: &HeroEnv<'_>,
) -> Result<Option<PlayerId>, OracleError> {
    let actor = hero.handle();
    Ok(env
        .players()?
        .players()
        .iter()
        .find(|record| record.controls(actor))
        .map(|record| record.id))
}

#[inline]
pub fn is_illusion<H: HeroView>(hero: &H) -> bool {
    hero.is_illusion()
}
