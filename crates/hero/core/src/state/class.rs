//! Hero classification and the per-class attack-range rule table.

use super::names;
use super::slot::AbilitySlot;

/// Hero archetype as reported by the engine's class id.
///
/// The set is closed: heroes without class-specific rules still get a variant
/// so hosts can map engine ids exhaustively, and anything unrecognised maps
/// to [`HeroClass::Unknown`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum HeroClass {
    #[default]
    Unknown,

    // ========================================================================
    // Classes with dedicated range rules
    // ========================================================================
    TemplarAssassin,
    Sniper,
    Enchantress,

    // ========================================================================
    // Transformation heroes (range changes through modifiers)
    // ========================================================================
    LoneDruid,
    DragonKnight,
    Terrorblade,

    // ========================================================================
    // Heroes referenced by invisibility and lethality checks
    // ========================================================================
    Axe,
    BountyHunter,
    Clinkz,
    Dazzle,
    Oracle,
    Riki,
    SkeletonKing,

    // ========================================================================
    // Other heroes
    // ========================================================================
    AntiMage,
    CrystalMaiden,
    DrowRanger,
    Invoker,
    Juggernaut,
    Lina,
    Lion,
    Luna,
    Medusa,
    Mirana,
    Nevermore,
    PhantomAssassin,
    Pudge,
    Slark,
    Sven,
    Tinker,
    TrollWarlord,
    Weaver,
    Windrunner,
}

/// How a hero class earns bonus attack range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RangeRule {
    /// A leveled ability in `slot` grants its `key` data value.
    SpellData {
        slot: AbilitySlot,
        key: &'static str,
    },

    /// A leveled ultimate in `slot` grants `bonus` while the scepter upgrade
    /// is held.
    ScepterUltimate { slot: AbilitySlot, bonus: f64 },

    /// The first present modifier grants its paired bonus. Checked in order.
    Transformations(&'static [(&'static str, f64)]),
}

/// Transformation modifiers and their range deltas, in check order.
pub const TRANSFORMATION_RANGE_BONUSES: [(&str, f64); 3] = [
    (names::MODIFIER_LONE_DRUID_TRUE_FORM, -423.0),
    (names::MODIFIER_DRAGON_KNIGHT_DRAGON_FORM, 372.0),
    (names::MODIFIER_TERRORBLADE_METAMORPHOSIS, 422.0),
];

/// Flat range granted by Impetus with the scepter upgrade.
pub const IMPETUS_SCEPTER_RANGE_BONUS: f64 = 190.0;

impl HeroClass {
    /// Returns the bonus attack range rule for this class.
    pub const fn range_rule(self) -> RangeRule {
        match self {
            Self::TemplarAssassin => RangeRule::SpellData {
                slot: AbilitySlot::E,
                key: names::DATA_BONUS_ATTACK_RANGE,
            },
            Self::Sniper => RangeRule::SpellData {
                slot: AbilitySlot::E,
                key: names::DATA_BONUS_ATTACK_RANGE,
            },
            Self::Enchantress => RangeRule::ScepterUltimate {
                slot: AbilitySlot::R,
                bonus: IMPETUS_SCEPTER_RANGE_BONUS,
            },
            _ => RangeRule::Transformations(&TRANSFORMATION_RANGE_BONUSES),
        }
    }
}
