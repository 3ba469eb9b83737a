//! Engine identifiers for the abilities, items, and modifiers the resolvers
//! inspect.
//!
//! Names are matched verbatim against what the host reports; the engine uses
//! lowercase snake_case with an `item_` or `modifier_` prefix where relevant.

// ============================================================================
// Abilities
// ============================================================================

pub const BOUNTY_HUNTER_WIND_WALK: &str = "bounty_hunter_wind_walk";
pub const CLINKZ_SKELETON_WALK: &str = "clinkz_skeleton_walk";
pub const TEMPLAR_ASSASSIN_MELD: &str = "templar_assassin_meld";
pub const RIKI_PERMANENT_INVISIBILITY: &str = "riki_permanent_invisibility";
pub const SKELETON_KING_REINCARNATION: &str = "skeleton_king_reincarnation";
pub const AXE_CULLING_BLADE: &str = "axe_culling_blade";

/// Abilities that turn their caster invisible, in match priority.
pub const SELF_INVISIBILITY_SPELLS: [&str; 3] = [
    BOUNTY_HUNTER_WIND_WALK,
    CLINKZ_SKELETON_WALK,
    TEMPLAR_ASSASSIN_MELD,
];

// ============================================================================
// Items
// ============================================================================

pub const ITEM_INVIS_SWORD: &str = "item_invis_sword";
pub const ITEM_SILVER_EDGE: &str = "item_silver_edge";
pub const ITEM_GLIMMER_CAPE: &str = "item_glimmer_cape";
pub const ITEM_AEGIS: &str = "item_aegis";
pub const ITEM_DRAGON_LANCE: &str = "item_dragon_lance";

/// Items that grant invisibility on use.
pub const INVISIBILITY_ITEMS: [&str; 3] = [ITEM_INVIS_SWORD, ITEM_SILVER_EDGE, ITEM_GLIMMER_CAPE];

// ============================================================================
// Modifiers
// ============================================================================

pub const MODIFIER_SCEPTER_CONSUMED: &str = "modifier_item_ultimate_scepter_consumed";
pub const MODIFIER_SCEPTER: &str = "modifier_item_ultimate_scepter";

pub const MODIFIER_LONE_DRUID_TRUE_FORM: &str = "modifier_lone_druid_true_form";
pub const MODIFIER_DRAGON_KNIGHT_DRAGON_FORM: &str = "modifier_dragon_knight_dragon_form";
pub const MODIFIER_TERRORBLADE_METAMORPHOSIS: &str = "modifier_terrorblade_metamorphosis";

pub const MODIFIER_DAZZLE_SHALLOW_GRAVE: &str = "modifier_dazzle_shallow_grave";
pub const MODIFIER_ORACLE_FALSE_PROMISE: &str = "modifier_oracle_false_promise";
pub const MODIFIER_REINCARNATION_SCEPTER_ACTIVE: &str =
    "modifier_skeleton_king_reincarnation_scepter_active";

/// Modifiers that prevent death from any source except Culling Blade.
pub const DEATH_PREVENTION_MODIFIERS: [&str; 3] = [
    MODIFIER_DAZZLE_SHALLOW_GRAVE,
    MODIFIER_ORACLE_FALSE_PROMISE,
    MODIFIER_REINCARNATION_SCEPTER_ACTIVE,
];

// ============================================================================
// Ability data keys
// ============================================================================

pub const DATA_BONUS_ATTACK_RANGE: &str = "bonus_attack_range";
pub const DATA_BASE_ATTACK_RANGE: &str = "base_attack_range";
