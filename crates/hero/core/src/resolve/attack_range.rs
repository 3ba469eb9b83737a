//! Effective attack range: base range plus class and item bonuses plus half
//! the hull radius.

use super::lethality::aghanim_state;
use crate::state::{RangeRule, names};
use crate::view::{AbilityView, HeroView, SpellView};

/// Computes the effective attack range without touching any cache.
///
/// Bonuses accumulate in `f64`; the sum is narrowed to `f32` once at the end.
/// Missing spells, items, or data keys contribute nothing.
pub fn compute_attack_range<H: HeroView>(hero: &H) -> f32 {
    let mut bonus = class_bonus(hero);

    if hero.is_ranged() {
        if let Some(lance) = hero.find_item(names::ITEM_DRAGON_LANCE) {
            bonus += lance
                .data(names::DATA_BASE_ATTACK_RANGE)
                .map_or(0.0, f64::from);
        }
    }

    (f64::from(hero.attack_range()) + bonus + f64::from(hero.hull_radius() / 2.0)) as f32
}

fn class_bonus<H: HeroView>(hero: &H) -> f64 {
    match hero.class().range_rule() {
        RangeRule::SpellData { slot, key } => hero
            .spell(slot)
            .filter(|spell| spell.level() > 0)
            .and_then(|spell| spell.data(key))
            .map_or(0.0, f64::from),
        RangeRule::ScepterUltimate { slot, bonus } => {
            let leveled = hero.spell(slot).is_some_and(|spell| spell.level() > 0);
            if leveled && aghanim_state(hero) {
                bonus
            } else {
                0.0
            }
        }
        RangeRule::Transformations(table) => table
            .iter()
            .find(|(modifier, _)| hero.has_modifier(modifier))
            .map_or(0.0, |(_, bonus)| *bonus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EntityHandle, HeroClass};
    use crate::view::{AbilitySnapshot, HeroSnapshot, HeroSnapshotBuilder, ItemSnapshot};

    fn base(class: HeroClass) -> HeroSnapshotBuilder {
        HeroSnapshot::builder(EntityHandle(20), class)
            .attack_range(550.0)
            .hull_radius(24.0)
    }

    fn basic_spells(builder: HeroSnapshotBuilder, e: AbilitySnapshot) -> HeroSnapshotBuilder {
        builder
            .spell(AbilitySnapshot::new("q", 1))
            .spell(AbilitySnapshot::new("w", 1))
            .spell(e)
    }

    #[test]
    fn plain_hero_gets_base_plus_half_hull() {
        assert_eq!(compute_attack_range(&base(HeroClass::Lina).build()), 562.0);
    }

    #[test]
    fn sniper_reads_leveled_e_slot_data() {
        let leveled = basic_spells(
            base(HeroClass::Sniper),
            AbilitySnapshot::new("sniper_take_aim", 2).with_data(names::DATA_BONUS_ATTACK_RANGE, 200.0),
        )
        .build();
        assert_eq!(compute_attack_range(&leveled), 762.0);

        let unleveled = basic_spells(
            base(HeroClass::Sniper),
            AbilitySnapshot::new("sniper_take_aim", 0).with_data(names::DATA_BONUS_ATTACK_RANGE, 200.0),
        )
        .build();
        assert_eq!(compute_attack_range(&unleveled), 562.0);
    }

    #[test]
    fn templar_assassin_reads_psi_blades() {
        let hero = basic_spells(
            base(HeroClass::TemplarAssassin).attack_range(140.0),
            AbilitySnapshot::new("templar_assassin_psi_blades", 4)
                .with_data(names::DATA_BONUS_ATTACK_RANGE, 240.0),
        )
        .build();
        assert_eq!(compute_attack_range(&hero), 392.0);
    }

    #[test]
    fn enchantress_needs_ultimate_and_scepter() {
        let with_ult = |b: HeroSnapshotBuilder| {
            basic_spells(b, AbilitySnapshot::new("enchantress_natures_attendants", 1))
                .spell(AbilitySnapshot::new("enchantress_impetus", 1))
        };

        let no_scepter = with_ult(base(HeroClass::Enchantress)).build();
        assert_eq!(compute_attack_range(&no_scepter), 562.0);

        let scepter = with_ult(base(HeroClass::Enchantress))
            .modifier(names::MODIFIER_SCEPTER)
            .build();
        assert_eq!(compute_attack_range(&scepter), 752.0);

        let scepter_no_ult = base(HeroClass::Enchantress)
            .modifier(names::MODIFIER_SCEPTER)
            .build();
        assert_eq!(compute_attack_range(&scepter_no_ult), 562.0);
    }

    #[test]
    fn first_transformation_in_order_wins() {
        let hero = base(HeroClass::LoneDruid)
            .modifier(names::MODIFIER_TERRORBLADE_METAMORPHOSIS)
            .modifier(names::MODIFIER_LONE_DRUID_TRUE_FORM)
            .modifier(names::MODIFIER_DRAGON_KNIGHT_DRAGON_FORM)
            .build();
        assert_eq!(compute_attack_range(&hero), 550.0 - 423.0 + 12.0);
    }

    #[test]
    fn transformation_rules_do_not_apply_to_rule_classes() {
        let hero = base(HeroClass::Sniper)
            .modifier(names::MODIFIER_DRAGON_KNIGHT_DRAGON_FORM)
            .build();
        assert_eq!(compute_attack_range(&hero), 562.0);
    }

    #[test]
    fn dragon_lance_only_extends_ranged_heroes() {
        let lance = ItemSnapshot::new(names::ITEM_DRAGON_LANCE)
            .with_data(names::DATA_BASE_ATTACK_RANGE, 140.0);

        let ranged = base(HeroClass::DrowRanger)
            .ranged()
            .item(lance.clone())
            .build();
        assert_eq!(compute_attack_range(&ranged), 702.0);

        let melee = base(HeroClass::Sven).attack_range(150.0).item(lance).build();
        assert_eq!(compute_attack_range(&melee), 162.0);
    }

    #[test]
    fn fractional_bonuses_are_not_rounded() {
        let hero = base(HeroClass::Windrunner)
            .ranged()
            .hull_radius(27.0)
            .item(
                ItemSnapshot::new(names::ITEM_DRAGON_LANCE)
                    .with_data(names::DATA_BASE_ATTACK_RANGE, 12.25),
            )
            .build();
        let expected = (550.0f64 + 12.25 + f64::from(27.0f32 / 2.0)) as f32;
        assert_eq!(compute_attack_range(&hero), expected);
        assert_eq!(expected, 575.75);
    }
}
