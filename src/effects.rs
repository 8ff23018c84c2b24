//! Radial impulse and force effects: click explosions, wind, and the
//! orbiting vortex core.
//!
//! All effects either change `Velocity` directly (impulses) or accumulate
//! into `ExternalForce` ahead of the physics step; the force buffer is
//! cleared at the start of every frame.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::Prop;
use crate::config::GameConfig;
use crate::game::PlaygroundMode;
use crate::system_order::PrePhysicsSet;

/// Below this distance from an effect origin the push direction is
/// undefined; we fall back to straight up instead of producing NaNs.
pub const ORIGIN_EPSILON: f32 = 1e-4;

/// One radial impulse burst, fully described by origin, radius and strength.
#[derive(Event, Debug, Clone, Copy)]
pub struct ExplosionEvent {
    pub origin: Vec3,
    pub radius: f32,
    pub strength: f32,
}

/// Presentation cue: spawn a poof burst at this position.
#[derive(Event, Debug, Clone, Copy)]
pub struct PoofEvent {
    pub position: Vec3,
}

/// Runtime wind force, adjusted from the keyboard in sandbox mode.
#[derive(Resource, Debug, Default)]
pub struct WindState {
    pub force: Vec3,
}

/// The orbiting swirl core; off until toggled with V.
#[derive(Resource, Debug, Default)]
pub struct VortexState {
    pub enabled: bool,
    pub angle: f32,
}

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ExplosionEvent>()
            .add_event::<PoofEvent>()
            .init_resource::<WindState>()
            .init_resource::<VortexState>()
            .add_systems(
                Update,
                (
                    clear_external_forces,
                    apply_wind.run_if(resource_equals(PlaygroundMode::Sandbox)),
                    apply_vortex,
                    draw_vortex_core,
                    apply_explosions,
                )
                    .chain()
                    .in_set(PrePhysicsSet),
            );
    }
}

/// Linear radial falloff: `strength * (1 - d/r)`, exactly zero at and
/// beyond the radius.
pub fn radial_falloff(distance: f32, radius: f32, strength: f32) -> f32 {
    if radius <= 0.0 || distance >= radius {
        return 0.0;
    }
    strength * (1.0 - distance / radius)
}

/// Outward direction from `origin` to `position`, with the upward fallback
/// for a body sitting exactly on the origin.
pub fn push_direction(origin: Vec3, position: Vec3) -> Vec3 {
    let delta = position - origin;
    let dist = delta.length();
    if dist < ORIGIN_EPSILON {
        Vec3::Y
    } else {
        delta / dist
    }
}

pub fn clear_external_forces(mut q: Query<&mut ExternalForce, With<Prop>>) {
    for mut ef in q.iter_mut() {
        ef.force = Vec3::ZERO;
        ef.torque = Vec3::ZERO;
    }
}

pub fn apply_explosions(
    mut events: EventReader<ExplosionEvent>,
    mut q: Query<(&Transform, &mut Velocity, Option<&mut Sleeping>), With<Prop>>,
    mut poofs: EventWriter<PoofEvent>,
) {
    for explosion in events.read() {
        for (tf, mut vel, sleeping) in q.iter_mut() {
            let distance = tf.translation.distance(explosion.origin);
            let magnitude = radial_falloff(distance, explosion.radius, explosion.strength);
            if magnitude <= 0.0 {
                continue;
            }
            let dir = push_direction(explosion.origin, tf.translation);
            vel.linvel += dir * magnitude;
            if let Some(mut sleeping) = sleeping {
                sleeping.sleeping = false;
            }
            poofs.write(PoofEvent {
                position: tf.translation,
            });
        }
        // Central burst regardless of hits.
        poofs.write(PoofEvent {
            position: explosion.origin + Vec3::Y,
        });
    }
}

pub fn apply_wind(wind: Res<WindState>, mut q: Query<&mut ExternalForce, With<Prop>>) {
    if wind.force == Vec3::ZERO {
        return;
    }
    for mut ef in q.iter_mut() {
        ef.force += wind.force;
    }
}

/// Position of the vortex core for a given orbit angle.
pub fn vortex_core(cfg: &GameConfig, angle: f32) -> Vec3 {
    let v = &cfg.effects.vortex;
    Vec3::new(
        angle.sin() * v.orbit_radius,
        1.0,
        angle.cos() * v.orbit_radius,
    )
}

pub fn apply_vortex(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut state: ResMut<VortexState>,
    mut q: Query<(&Transform, &mut ExternalForce, Option<&mut Sleeping>), With<Prop>>,
) {
    if !state.enabled {
        return;
    }
    let v = &cfg.effects.vortex;
    state.angle += v.orbit_speed * time.delta_secs();
    let core = vortex_core(&cfg, state.angle);

    for (tf, mut ef, sleeping) in q.iter_mut() {
        let distance = tf.translation.distance(core);
        let pull = radial_falloff(distance, v.radius, v.pull);
        let swirl = radial_falloff(distance, v.radius, v.swirl);
        if pull <= 0.0 && swirl <= 0.0 {
            continue;
        }
        let outward = push_direction(core, tf.translation);
        let tangent = Vec3::Y.cross(outward);
        ef.force += -outward * pull + tangent * swirl;
        if let Some(mut sleeping) = sleeping {
            sleeping.sleeping = false;
        }
    }
}

fn draw_vortex_core(cfg: Res<GameConfig>, state: Res<VortexState>, mut gizmos: Gizmos) {
    if !state.enabled {
        return;
    }
    let core = vortex_core(&cfg, state.angle);
    gizmos.sphere(
        Isometry3d::from_translation(core),
        0.8,
        Color::srgba(0.8, 0.8, 1.0, 0.6),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falloff_is_linear_inside_radius() {
        assert_eq!(radial_falloff(5.0, 10.0, 100.0), 50.0);
        assert_eq!(radial_falloff(0.0, 10.0, 100.0), 100.0);
        assert_eq!(radial_falloff(7.5, 10.0, 100.0), 25.0);
    }

    #[test]
    fn falloff_is_zero_at_and_beyond_radius() {
        assert_eq!(radial_falloff(10.0, 10.0, 100.0), 0.0);
        assert_eq!(radial_falloff(25.0, 10.0, 100.0), 0.0);
    }

    #[test]
    fn falloff_handles_degenerate_radius() {
        assert_eq!(radial_falloff(1.0, 0.0, 100.0), 0.0);
        assert_eq!(radial_falloff(1.0, -3.0, 100.0), 0.0);
    }

    #[test]
    fn push_direction_is_finite_at_origin() {
        let dir = push_direction(Vec3::ZERO, Vec3::ZERO);
        assert!(dir.is_finite());
        assert_eq!(dir, Vec3::Y);
    }

    #[test]
    fn push_direction_is_normalized() {
        let dir = push_direction(Vec3::ZERO, Vec3::new(3.0, 0.0, 4.0));
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert_eq!(dir, Vec3::new(0.6, 0.0, 0.8));
    }
}
