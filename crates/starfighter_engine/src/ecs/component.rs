//! Component trait and kind flags
//!
//! The set of component kinds is closed: each kind owns exactly one table in
//! [`ComponentStore`], and the world tracks per-slot presence as a
//! [`ComponentKinds`] bitmask.

use super::components::{
    Collider, Damage, Health, ParticleEmitter, PlayerControlled, Position, Sprite, TimeToLive,
    Velocity,
};
use super::storage::{ComponentStore, ComponentTable};

bitflags::bitflags! {
    /// Presence mask over every component kind
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ComponentKinds: u16 {
        /// [`Position`]
        const POSITION = 1 << 0;
        /// [`Velocity`]
        const VELOCITY = 1 << 1;
        /// [`Sprite`]
        const SPRITE = 1 << 2;
        /// [`PlayerControlled`]
        const PLAYER_CONTROLLED = 1 << 3;
        /// [`Collider`]
        const COLLIDER = 1 << 4;
        /// [`ParticleEmitter`]
        const PARTICLE_EMITTER = 1 << 5;
        /// [`TimeToLive`]
        const TIME_TO_LIVE = 1 << 6;
        /// [`Health`]
        const HEALTH = 1 << 7;
        /// [`Damage`]
        const DAMAGE = 1 << 8;
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A plain data record stored in one of the world's component tables
pub trait Component: sealed::Sealed + Sized + 'static {
    /// Presence flag for this kind
    const KIND: ComponentKinds;

    #[doc(hidden)]
    fn table(store: &ComponentStore) -> &ComponentTable<Self>;

    #[doc(hidden)]
    fn table_mut(store: &mut ComponentStore) -> &mut ComponentTable<Self>;
}

macro_rules! impl_component {
    ($ty:ty, $kind:ident, $field:ident) => {
        impl sealed::Sealed for $ty {}

        impl Component for $ty {
            const KIND: ComponentKinds = ComponentKinds::$kind;

            fn table(store: &ComponentStore) -> &ComponentTable<Self> {
                &store.$field
            }

            fn table_mut(store: &mut ComponentStore) -> &mut ComponentTable<Self> {
                &mut store.$field
            }
        }
    };
}

impl_component!(Position, POSITION, positions);
impl_component!(Velocity, VELOCITY, velocities);
impl_component!(Sprite, SPRITE, sprites);
impl_component!(PlayerControlled, PLAYER_CONTROLLED, players);
impl_component!(Collider, COLLIDER, colliders);
impl_component!(ParticleEmitter, PARTICLE_EMITTER, emitters);
impl_component!(TimeToLive, TIME_TO_LIVE, lifetimes);
impl_component!(Health, HEALTH, healths);
impl_component!(Damage, DAMAGE, damages);
