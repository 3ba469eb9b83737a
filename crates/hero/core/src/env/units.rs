use crate::state::HeroClass;

/// Oracle providing per-class attack timing and projectile data.
///
/// Values are static balance data; the resolvers pass them through untouched.
pub trait UnitStatsOracle {
    fn unit_stats(&self, class: HeroClass) -> Option<UnitStats>;
}

/// Attack timing row for one hero class. Times are in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitStats {
    pub attack_point: f64,
    pub attack_backswing: f64,
    pub attack_rate: f64,
    /// Units per second; zero for melee heroes.
    pub projectile_speed: f64,
}

impl UnitStats {
    pub const fn new(
        attack_point: f64,
        attack_backswing: f64,
        attack_rate: f64,
        projectile_speed: f64,
    ) -> Self {
        Self {
            attack_point,
            attack_backswing,
            attack_rate,
            projectile_speed,
        }
    }
}
