//! Reset and clear: R returns every prop to its creation-time snapshot, C
//! removes every prop (body and visual) from the world.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::{Prop, PropVisual, SpawnTransform};

const LOG_TARGET: &str = "reset";

pub struct ResetPlugin;

impl Plugin for ResetPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (reset_on_key, clear_on_key));
    }
}

fn reset_on_key(
    keys: Res<ButtonInput<KeyCode>>,
    mut props: Query<
        (
            &SpawnTransform,
            &mut Transform,
            &mut Velocity,
            &mut ExternalForce,
            Option<&mut Sleeping>,
        ),
        With<Prop>,
    >,
) {
    if !keys.just_pressed(KeyCode::KeyR) {
        return;
    }
    let count = reset_all(&mut props);
    info!(target: LOG_TARGET, "Reset {count} props to their spawn transforms");
}

/// Restores every prop to its own captured snapshot and zeroes all motion
/// state. Safe to run repeatedly; the second pass is a no-op.
pub fn reset_all(
    props: &mut Query<
        (
            &SpawnTransform,
            &mut Transform,
            &mut Velocity,
            &mut ExternalForce,
            Option<&mut Sleeping>,
        ),
        With<Prop>,
    >,
) -> usize {
    let mut count = 0;
    for (snapshot, mut tf, mut vel, mut ef, sleeping) in props.iter_mut() {
        *tf = snapshot.0;
        vel.linvel = Vec3::ZERO;
        vel.angvel = Vec3::ZERO;
        ef.force = Vec3::ZERO;
        ef.torque = Vec3::ZERO;
        if let Some(mut sleeping) = sleeping {
            sleeping.sleeping = false;
        }
        count += 1;
    }
    count
}

fn clear_on_key(
    keys: Res<ButtonInput<KeyCode>>,
    mut commands: Commands,
    props: Query<(Entity, &PropVisual), With<Prop>>,
) {
    if !keys.just_pressed(KeyCode::KeyC) {
        return;
    }
    let mut count = 0;
    for (body, visual) in props.iter() {
        commands.entity(visual.0).despawn();
        commands.entity(body).despawn();
        count += 1;
    }
    info!(target: LOG_TARGET, "Cleared {count} props");
}
