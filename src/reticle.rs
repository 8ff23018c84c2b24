//! Effect origin tracking: projects the cursor onto the ground plane and
//! draws the blast-radius ring there.

use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::config::GameConfig;
use crate::game::PlaygroundMode;

/// Where the next explosion happens and how far it reaches.
#[derive(Resource, Debug)]
pub struct EffectReticle {
    pub position: Vec3,
    pub radius: f32,
}

pub struct ReticlePlugin;

impl Plugin for ReticlePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, init_reticle).add_systems(
            Update,
            (track_cursor, adjust_radius, draw_reticle)
                .run_if(resource_equals(PlaygroundMode::Town)),
        );
    }
}

fn init_reticle(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.insert_resource(EffectReticle {
        position: Vec3::ZERO,
        radius: cfg.effects.explosion.radius,
    });
}

fn track_cursor(
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut reticle: ResMut<EffectReticle>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, cam_tf)) = cameras.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(cam_tf, cursor) else {
        return;
    };
    let Some(t) = ray.intersect_plane(Vec3::ZERO, InfinitePlane3d::new(Vec3::Y)) else {
        return;
    };
    reticle.position = ray.get_point(t);
}

fn adjust_radius(
    keys: Res<ButtonInput<KeyCode>>,
    mut wheel: EventReader<MouseWheel>,
    cfg: Res<GameConfig>,
    mut reticle: ResMut<EffectReticle>,
) {
    let shift = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);
    if !shift {
        return;
    }
    let e = &cfg.effects.explosion;
    for ev in wheel.read() {
        let delta = if ev.y > 0.0 { e.radius_step } else { -e.radius_step };
        reticle.radius = (reticle.radius + delta).clamp(e.radius_min, e.radius_max);
    }
}

fn draw_reticle(reticle: Res<EffectReticle>, mut gizmos: Gizmos) {
    gizmos.circle(
        Isometry3d::new(
            reticle.position + Vec3::Y * 0.01,
            Quat::from_rotation_x(-FRAC_PI_2),
        ),
        reticle.radius,
        Color::srgba(1.0, 0.33, 0.0, 0.6),
    );
}
