//! Read-only contracts describing a hero as the host sees it this tick.
//!
//! The host implements these traits over its own engine objects, or copies
//! the engine state into a [`HeroSnapshot`] once per tick. Resolvers never
//! mutate a view.
mod snapshot;

pub use snapshot::{AbilitySnapshot, HeroFlags, HeroSnapshot, HeroSnapshotBuilder, ItemSnapshot};

use crate::state::{AbilitySlot, EntityHandle, HeroClass};

/// Anything castable the host exposes: spells and items alike.
pub trait AbilityView {
    /// Engine name, e.g. `"item_dragon_lance"`.
    fn name(&self) -> &str;

    /// Whether the engine would accept a cast right now (cooldown, mana,
    /// charges).
    fn can_be_cast(&self) -> bool;

    /// Looks up a named special value, e.g. `"bonus_attack_range"`.
    fn data(&self, key: &str) -> Option<f32>;
}

/// A spellbook ability. Items have no level.
pub trait SpellView: AbilityView {
    fn level(&self) -> u32;
}

/// Snapshot contract for one hero.
pub trait HeroView {
    type Spell: SpellView;
    type Item: AbilityView;

    fn handle(&self) -> EntityHandle;
    fn class(&self) -> HeroClass;

    /// True if a modifier with this exact name is currently attached.
    fn has_modifier(&self, name: &str) -> bool;

    /// Spellbook in slot order; see [`AbilitySlot`].
    fn spells(&self) -> &[Self::Spell];

    /// Held items.
    fn items(&self) -> &[Self::Item];

    /// Base attack range before hero-specific bonuses.
    fn attack_range(&self) -> f32;
    fn hull_radius(&self) -> f32;
    fn is_ranged(&self) -> bool;
    fn is_silenced(&self) -> bool;

    /// General ability to cast (not stunned, hexed, or otherwise disabled).
    fn can_cast(&self) -> bool;
    fn is_illusion(&self) -> bool;

    fn has_any_modifier(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.has_modifier(name))
    }

    fn spell(&self, slot: AbilitySlot) -> Option<&Self::Spell> {
        self.spells().get(slot.index())
    }

    fn find_spell(&self, name: &str) -> Option<&Self::Spell> {
        self.spells().iter().find(|spell| spell.name() == name)
    }

    fn find_item(&self, name: &str) -> Option<&Self::Item> {
        self.items().iter().find(|item| item.name() == name)
    }
}
