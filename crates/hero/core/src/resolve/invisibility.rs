//! Whether a hero can turn itself invisible right now.

use crate::state::names;
use crate::view::{AbilityView, HeroView, SpellView};

/// Computes invisibility access without touching any cache.
///
/// The first self-invisibility spell in slot order is the primary source; if
/// the spellbook has none, the first invisibility item is. Only when neither
/// exists does a leveled permanent invisibility count, and then only while
/// the hero is not silenced.
pub fn compute_can_go_invis<H: HeroView>(hero: &H) -> bool {
    let mut source_castable = None;
    let mut permanent = None;

    for spell in hero.spells() {
        let name = spell.name();
        if names::SELF_INVISIBILITY_SPELLS.iter().any(|n| *n == name) {
            source_castable = Some(spell.can_be_cast());
            break;
        }
        if name == names::RIKI_PERMANENT_INVISIBILITY {
            permanent = Some(spell);
        }
    }

    if source_castable.is_none() {
        source_castable = hero
            .items()
            .iter()
            .find(|item| names::INVISIBILITY_ITEMS.iter().any(|n| *n == item.name()))
            .map(|item| item.can_be_cast());
    }

    match source_castable {
        Some(castable) => hero.can_cast() && castable,
        None => permanent.is_some_and(|spell| spell.level() > 0) && !hero.is_silenced(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EntityHandle, HeroClass};
    use crate::view::{AbilitySnapshot, HeroFlags, HeroSnapshot, ItemSnapshot};

    fn riki() -> crate::view::HeroSnapshotBuilder {
        HeroSnapshot::builder(EntityHandle(3), HeroClass::Riki)
            .spell(AbilitySnapshot::new("riki_smoke_screen", 1))
            .spell(AbilitySnapshot::new("riki_blink_strike", 1))
            .spell(AbilitySnapshot::new(names::RIKI_PERMANENT_INVISIBILITY, 2))
    }

    #[test]
    fn permanent_invisibility_is_the_fallback() {
        assert!(compute_can_go_invis(&riki().build()));
        assert!(!compute_can_go_invis(&riki().silenced().build()));
    }

    #[test]
    fn unleveled_permanent_invisibility_grants_nothing() {
        let hero = HeroSnapshot::builder(EntityHandle(3), HeroClass::Riki)
            .spell(AbilitySnapshot::new(names::RIKI_PERMANENT_INVISIBILITY, 0))
            .build();
        assert!(!compute_can_go_invis(&hero));
    }

    #[test]
    fn primary_spell_overrides_the_fallback() {
        // silenced: the fallback alone would answer false
        let hero = HeroSnapshot::builder(EntityHandle(4), HeroClass::BountyHunter)
            .silenced()
            .spell(AbilitySnapshot::new(names::RIKI_PERMANENT_INVISIBILITY, 3))
            .spell(AbilitySnapshot::new(names::BOUNTY_HUNTER_WIND_WALK, 1))
            .build();
        assert!(compute_can_go_invis(&hero));
    }

    #[test]
    fn uncastable_primary_disables_the_fallback() {
        let hero = HeroSnapshot::builder(EntityHandle(4), HeroClass::Riki)
            .spell(AbilitySnapshot::new(names::RIKI_PERMANENT_INVISIBILITY, 3))
            .item(ItemSnapshot::new(names::ITEM_SILVER_EDGE).with_castable(false))
            .build();
        assert!(!compute_can_go_invis(&hero));
    }

    #[test]
    fn earlier_slot_wins_over_later_match() {
        let hero = HeroSnapshot::builder(EntityHandle(5), HeroClass::Clinkz)
            .spell(AbilitySnapshot::new(names::CLINKZ_SKELETON_WALK, 1).with_castable(false))
            .spell(AbilitySnapshot::new(names::TEMPLAR_ASSASSIN_MELD, 1))
            .build();
        assert!(!compute_can_go_invis(&hero));
    }

    #[test]
    fn items_count_only_when_no_spell_matches() {
        let shadow_blade = HeroSnapshot::builder(EntityHandle(6), HeroClass::Pudge)
            .item(ItemSnapshot::new(names::ITEM_INVIS_SWORD))
            .build();
        assert!(compute_can_go_invis(&shadow_blade));

        let disabled = HeroSnapshot::builder(EntityHandle(6), HeroClass::Pudge)
            .flag(HeroFlags::CAN_CAST, false)
            .item(ItemSnapshot::new(names::ITEM_GLIMMER_CAPE))
            .build();
        assert!(!compute_can_go_invis(&disabled));

        let nothing = HeroSnapshot::builder(EntityHandle(6), HeroClass::Pudge)
            .item(ItemSnapshot::new("item_blink"))
            .build();
        assert!(!compute_can_go_invis(&nothing));
    }
}
