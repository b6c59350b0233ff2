//! Decoration animation.
//!
//! Evaluates the stateless drivers from
//! [`crate::components::decoration`] against the animation clock and writes
//! the results into [`MapPosition`] and [`Opacity`].
use bevy_ecs::prelude::*;

use crate::components::decoration::{Floating, Opacity, Orbiting, Pulse};
use crate::components::mapposition::MapPosition;
use crate::resources::worldtime::WorldTime;

pub fn decoration_motion_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut MapPosition, Option<&Floating>, Option<&Orbiting>)>,
) {
    let t = world_time.elapsed;
    for (mut position, floating, orbiting) in query.iter_mut() {
        if let Some(orbiting) = orbiting {
            let (x, z) = orbiting.xz_at(t);
            position.pos.x = x;
            position.pos.z = z;
        }
        if let Some(floating) = floating {
            position.pos.y = floating.height_at(t);
        }
    }
}

pub fn decoration_pulse_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&Pulse, &mut Opacity)>,
) {
    let t = world_time.elapsed;
    for (pulse, mut opacity) in query.iter_mut() {
        opacity.0 = pulse.value_at(t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn run_at(world: &mut World, elapsed: f32) {
        world.resource_mut::<WorldTime>().elapsed = elapsed;
        let mut schedule = Schedule::default();
        schedule.add_systems((decoration_motion_system, decoration_pulse_system));
        schedule.run(world);
    }

    #[test]
    fn test_title_floats_around_base() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        let e = world
            .spawn((MapPosition::new(0.0, 5.0, -5.0), Floating::new(5.0, 0.2, 0.5)))
            .id();
        run_at(&mut world, 1.0);
        let pos = world.get::<MapPosition>(e).unwrap().pos;
        assert!((pos.y - (5.0 + 0.5f32.sin() * 0.2)).abs() < EPSILON);
        assert!((pos.z + 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_orbiting_keeps_radius() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        let e = world
            .spawn((
                MapPosition::new(8.0, 2.0, 0.0),
                Orbiting {
                    radius: 8.0,
                    angle: 0.0,
                    rate: 0.1,
                },
            ))
            .id();
        run_at(&mut world, 7.3);
        let pos = world.get::<MapPosition>(e).unwrap().pos;
        assert!(((pos.x * pos.x + pos.z * pos.z).sqrt() - 8.0).abs() < 1e-4);
        assert!((pos.y - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_grid_opacity_pulses() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        let e = world
            .spawn((
                Pulse {
                    base: 0.3,
                    amplitude: 0.1,
                    frequency: 1.0,
                },
                Opacity::default(),
            ))
            .id();
        run_at(&mut world, 2.0);
        let opacity = world.get::<Opacity>(e).unwrap().0;
        assert!((opacity - (0.3 + 2.0f32.sin() * 0.1)).abs() < EPSILON);
    }
}
