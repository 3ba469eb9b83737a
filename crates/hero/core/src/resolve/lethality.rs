//! Scepter, reincarnation, and death checks. Cheap enough to never cache.

use crate::state::names;
use crate::view::{AbilityView, HeroView};

/// True while the hero holds or has consumed the scepter upgrade.
pub fn aghanim_state<H: HeroView>(hero: &H) -> bool {
    hero.has_any_modifier(&[names::MODIFIER_SCEPTER_CONSUMED, names::MODIFIER_SCEPTER])
}

/// True if the hero would come back after dying: it carries the Aegis, or
/// its reincarnation ultimate is ready.
pub fn can_reincarnate<H: HeroView>(hero: &H) -> bool {
    hero.find_item(names::ITEM_AEGIS).is_some()
        || hero
            .find_spell(names::SKELETON_KING_REINCARNATION)
            .is_some_and(|spell| spell.can_be_cast())
}

/// True if a killing blow would actually kill the hero now.
///
/// `ignore_reincarnation` bypasses every protection. Otherwise a hero that
/// can reincarnate cannot die, and death-preventing modifiers block the kill.
/// Culling Blade is only stopped by the active reincarnation scepter.
pub fn can_die<H: HeroView>(
    hero: &H,
    source_ability: Option<&str>,
    ignore_reincarnation: bool,
) -> bool {
    if ignore_reincarnation {
        return true;
    }
    if can_reincarnate(hero) {
        return false;
    }

    if source_ability == Some(names::AXE_CULLING_BLADE) {
        !hero.has_modifier(names::MODIFIER_REINCARNATION_SCEPTER_ACTIVE)
    } else {
        !hero.has_any_modifier(&names::DEATH_PREVENTION_MODIFIERS)
    }
}
