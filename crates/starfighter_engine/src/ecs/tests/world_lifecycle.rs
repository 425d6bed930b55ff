//! Entity lifecycle scenarios against the world contract

use crate::ecs::components::{Collider, ColliderTag, Health, Position, Sprite, TimeToLive, Velocity};
use crate::ecs::{ComponentKinds, EcsError, Entity, World};
use crate::foundation::math::Vec2;
use crate::render::TextureHandle;

fn moving(world: &mut World, x: f32) -> Result<Entity, EcsError> {
    let e = world.create_entity()?;
    world.add_component(e, Position::new(x, 0.0))?;
    world.add_component(e, Velocity::new(1.0, 0.0))?;
    Ok(e)
}

#[test]
fn test_capacity_two_scenario() {
    let mut world = World::new(2);
    let a = moving(&mut world, 0.0).unwrap();
    let b = moving(&mut world, 1.0).unwrap();

    assert_eq!(moving(&mut world, 2.0), Err(EcsError::CapacityExceeded { capacity: 2 }));
    assert_eq!(world.len(), 2);

    assert!(world.destroy_entity(a));
    let c = moving(&mut world, 2.0).unwrap();

    assert_eq!(c.index(), a.index());
    assert_ne!(c, a);
    assert!(world.is_alive(b));
    assert!(world.is_alive(c));
    assert!(!world.is_alive(a));
    assert!(world.get_component::<Position>(a).is_none());
}

#[test]
fn test_live_count_never_exceeds_capacity() {
    let mut world = World::new(3);
    let mut live = Vec::new();

    for step in 0..40 {
        if step % 3 == 2 {
            if let Some(e) = live.pop() {
                assert!(world.destroy_entity(e));
            }
        } else if let Ok(e) = world.create_entity() {
            live.push(e);
        }
        assert!(world.len() <= world.capacity());
        assert_eq!(world.len(), live.len());
    }
}

#[test]
fn test_destroy_clears_every_kind() {
    let mut world = World::new(4);
    let e = world.create_entity().unwrap();
    world.add_component(e, Position::new(1.0, 1.0)).unwrap();
    world.add_component(e, Velocity::new(1.0, 1.0)).unwrap();
    world
        .add_component(e, Sprite::new(TextureHandle::default(), Vec2::new(4.0, 4.0)))
        .unwrap();
    world.add_component(e, Collider::circle(2.0, ColliderTag::Enemy)).unwrap();
    world.add_component(e, TimeToLive::new(1.0)).unwrap();
    world.add_component(e, Health::new(3)).unwrap();

    world.destroy_entity(e);

    assert!(world.get_component::<Position>(e).is_none());
    assert!(world.get_component::<Velocity>(e).is_none());
    assert!(world.get_component::<Sprite>(e).is_none());
    assert!(world.get_component::<Collider>(e).is_none());
    assert!(world.get_component::<TimeToLive>(e).is_none());
    assert!(world.get_component::<Health>(e).is_none());

    // The recycled slot starts empty.
    let fresh = world.create_entity().unwrap();
    assert_eq!(fresh.index(), e.index());
    assert_eq!(world.kinds_of(fresh), Some(ComponentKinds::empty()));
}

#[test]
fn test_query_membership_follows_components() {
    let mut world = World::new(4);
    let e = world.create_entity().unwrap();
    let both = ComponentKinds::POSITION | ComponentKinds::VELOCITY;

    world.add_component(e, Position::new(0.0, 0.0)).unwrap();
    assert!(world.query(both).collect(&world).is_empty());

    world.add_component(e, Velocity::zero()).unwrap();
    assert_eq!(world.query(both).collect(&world), vec![e]);

    world.remove_component::<Velocity>(e);
    assert!(world.query(both).collect(&world).is_empty());
    assert_eq!(world.query(ComponentKinds::POSITION).collect(&world), vec![e]);
}
