//! Owned, copyable hero state implementing the view traits.
//!
//! Hosts that cannot hand out long-lived references to engine objects copy
//! the fields they need here once per tick. The probe binary and the tests
//! build snapshots directly.

use arrayvec::ArrayVec;
use bitflags::bitflags;

use super::{AbilityView, HeroView, SpellView};
use crate::config::QueryConfig;
use crate::state::{EntityHandle, HeroClass};

bitflags! {
    /// Boolean hero state sampled from the engine.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct HeroFlags: u8 {
        const RANGED   = 1 << 0;
        const SILENCED = 1 << 1;
        const CAN_CAST = 1 << 2;
        const ILLUSION = 1 << 3;
    }
}

/// Named special values of an ability, in declaration order.
pub type AbilityData = Vec<(String, f32)>;

fn lookup(data: &AbilityData, key: &str) -> Option<f32> {
    data.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
}

/// A spellbook entry.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilitySnapshot {
    pub name: String,
    pub level: u32,
    pub castable: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub data: AbilityData,
}

impl AbilitySnapshot {
    /// Creates a spell that is castable whenever it has been leveled.
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
            castable: level > 0,
            data: Vec::new(),
        }
    }

    pub fn with_data(mut self, key: impl Into<String>, value: f32) -> Self {
        self.data.push((key.into(), value));
        self
    }

    pub fn with_castable(mut self, castable: bool) -> Self {
        self.castable = castable;
        self
    }
}

impl AbilityView for AbilitySnapshot {
    fn name(&self) -> &str {
        &self.name
    }

    fn can_be_cast(&self) -> bool {
        self.castable
    }

    fn data(&self, key: &str) -> Option<f32> {
        lookup(&self.data, key)
    }
}

impl SpellView for AbilitySnapshot {
    fn level(&self) -> u32 {
        self.level
    }
}

/// A held item.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSnapshot {
    pub name: String,
    pub castable: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub data: AbilityData,
}

impl ItemSnapshot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            castable: true,
            data: Vec::new(),
        }
    }

    pub fn with_data(mut self, key: impl Into<String>, value: f32) -> Self {
        self.data.push((key.into(), value));
        self
    }

    pub fn with_castable(mut self, castable: bool) -> Self {
        self.castable = castable;
        self
    }
}

impl AbilityView for ItemSnapshot {
    fn name(&self) -> &str {
        &self.name
    }

    fn can_be_cast(&self) -> bool {
        self.castable
    }

    fn data(&self, key: &str) -> Option<f32> {
        lookup(&self.data, key)
    }
}

/// One hero at one tick.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroSnapshot {
    pub handle: EntityHandle,
    pub class: HeroClass,
    pub attack_range: f32,
    pub hull_radius: f32,
    pub flags: HeroFlags,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifiers: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spells: ArrayVec<AbilitySnapshot, { QueryConfig::MAX_SPELLS }>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: ArrayVec<ItemSnapshot, { QueryConfig::MAX_ITEMS }>,
}

impl HeroSnapshot {
    pub fn builder(handle: EntityHandle, class: HeroClass) -> HeroSnapshotBuilder {
        HeroSnapshotBuilder::new(handle, class)
    }
}

impl HeroView for HeroSnapshot {
    type Spell = AbilitySnapshot;
    type Item = ItemSnapshot;

    fn handle(&self) -> EntityHandle {
        self.handle
    }

    fn class(&self) -> HeroClass {
        self.class
    }

    fn has_modifier(&self, name: &str) -> bool {
        self.modifiers.iter().any(|m| m == name)
    }

    fn spells(&self) -> &[AbilitySnapshot] {
        &self.spells
    }

    fn items(&self) -> &[ItemSnapshot] {
        &self.items
    }

    fn attack_range(&self) -> f32 {
        self.attack_range
    }

    fn hull_radius(&self) -> f32 {
        self.hull_radius
    }

    fn is_ranged(&self) -> bool {
        self.flags.contains(HeroFlags::RANGED)
    }

    fn is_silenced(&self) -> bool {
        self.flags.contains(HeroFlags::SILENCED)
    }

    fn can_cast(&self) -> bool {
        self.flags.contains(HeroFlags::CAN_CAST)
    }

    fn is_illusion(&self) -> bool {
        self.flags.contains(HeroFlags::ILLUSION)
    }
}

/// Builder for [`HeroSnapshot`].
///
/// Starts from a melee hero that can cast, with a 150 base range and a
/// 24 hull radius. Spells are appended in slot order.
#[derive(Clone, Debug)]
pub struct HeroSnapshotBuilder {
    snapshot: HeroSnapshot,
}

impl HeroSnapshotBuilder {
    pub const DEFAULT_ATTACK_RANGE: f32 = 150.0;
    pub const DEFAULT_HULL_RADIUS: f32 = 24.0;

    pub fn new(handle: EntityHandle, class: HeroClass) -> Self {
        Self {
            snapshot: HeroSnapshot {
                handle,
                class,
                attack_range: Self::DEFAULT_ATTACK_RANGE,
                hull_radius: Self::DEFAULT_HULL_RADIUS,
                flags: HeroFlags::CAN_CAST,
                modifiers: Vec::new(),
                spells: ArrayVec::new(),
                items: ArrayVec::new(),
            },
        }
    }

    pub fn attack_range(mut self, range: f32) -> Self {
        self.snapshot.attack_range = range;
        self
    }

    pub fn hull_radius(mut self, radius: f32) -> Self {
        self.snapshot.hull_radius = radius;
        self
    }

    pub fn flag(mut self, flag: HeroFlags, enabled: bool) -> Self {
        self.snapshot.flags.set(flag, enabled);
        self
    }

    pub fn ranged(self) -> Self {
        self.flag(HeroFlags::RANGED, true)
    }

    pub fn silenced(self) -> Self {
        self.flag(HeroFlags::SILENCED, true)
    }

    pub fn modifier(mut self, name: impl Into<String>) -> Self {
        self.snapshot.modifiers.push(name.into());
        self
    }

    /// Appends a spell; dropped with a warning once the spellbook is full.
    pub fn spell(mut self, spell: AbilitySnapshot) -> Self {
        if let Err(err) = self.snapshot.spells.try_push(spell) {
            tracing::warn!(
                "spellbook of hero {} is full, dropping {}",
                self.snapshot.handle,
                err.element().name
            );
        }
        self
    }

    /// Appends an item; dropped with a warning once all slots are taken.
    pub fn item(mut self, item: ItemSnapshot) -> Self {
        if let Err(err) = self.snapshot.items.try_push(item) {
            tracing::warn!(
                "inventory of hero {} is full, dropping {}",
                self.snapshot.handle,
                err.element().name
            );
        }
        self
    }

    pub fn build(self) -> HeroSnapshot {
        self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AbilitySlot;

    #[test]
    fn builder_keeps_slot_order_and_flags() {
        let hero = HeroSnapshot::builder(EntityHandle(7), HeroClass::Sniper)
            .ranged()
            .spell(AbilitySnapshot::new("sniper_shrapnel", 1))
            .spell(AbilitySnapshot::new("sniper_headshot", 0))
            .spell(AbilitySnapshot::new("sniper_take_aim", 2).with_data("bonus_attack_range", 200.0))
            .build();

        assert!(hero.is_ranged());
        assert!(hero.can_cast());
        assert!(!hero.is_silenced());

        let e = hero.spell(AbilitySlot::E).unwrap();
        assert_eq!(e.name(), "sniper_take_aim");
        assert_eq!(e.data("bonus_attack_range"), Some(200.0));
        assert_eq!(e.data("missing"), None);
        assert!(hero.spell(AbilitySlot::R).is_none());
    }

    #[test]
    fn full_inventory_drops_extra_items() {
        let mut builder = HeroSnapshot::builder(EntityHandle(1), HeroClass::Pudge);
        for i in 0..QueryConfig::MAX_ITEMS + 2 {
            builder = builder.item(ItemSnapshot::new(format!("item_{i}")));
        }
        let hero = builder.build();

        assert_eq!(hero.items().len(), QueryConfig::MAX_ITEMS);
        assert!(hero.find_item("item_0").is_some());
        assert!(hero.find_item(&format!("item_{}", QueryConfig::MAX_ITEMS)).is_none());
    }

    #[test]
    fn unleveled_spells_are_not_castable_by_default() {
        assert!(!AbilitySnapshot::new("riki_permanent_invisibility", 0).can_be_cast());
        assert!(AbilitySnapshot::new("riki_permanent_invisibility", 1).can_be_cast());
    }
}
