/// Fixed position of a hero ability in its spellbook.
///
/// Slots map to indices of [`crate::HeroView::spells`]: the three basic
/// abilities come first, followed by the ultimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilitySlot {
    Q,
    W,
    E,
    R,
}

impl AbilitySlot {
    /// Returns the slot's position in the spell list.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Q => 0,
            Self::W => 1,
            Self::E => 2,
            Self::R => 3,
        }
    }
}
