use crate::state::EntityHandle;

/// Boolean resolvers that memoize through the shared flag store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum FlagResolver {
    CanGoInvis,
}

/// Key of the shared flag store: the resolver's namespace plus the actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FlagKey {
    pub resolver: FlagResolver,
    pub actor: EntityHandle,
}

impl FlagKey {
    #[inline]
    pub const fn new(resolver: FlagResolver, actor: EntityHandle) -> Self {
        Self { resolver, actor }
    }
}
