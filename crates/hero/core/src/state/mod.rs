//! Identity and classification types shared by views, caches, and resolvers.
mod class;
mod handle;
pub mod names;
mod slot;

pub use class::{
    HeroClass, IMPETUS_SCEPTER_RANGE_BONUS, RangeRule, TRANSFORMATION_RANGE_BONUSES,
};
pub use handle::{EntityHandle, PlayerId};
pub use slot::AbilitySlot;
