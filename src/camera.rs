use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

use crate::game::PlaygroundMode;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, (orbit_camera, apply_camera_transform).chain());
    }
}

/// Orbit rig around a fixed focus point, driven by middle-mouse drag and the
/// scroll wheel.
#[derive(Component, Debug)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
}

fn setup_camera(mut commands: Commands, mode: Res<PlaygroundMode>) {
    let radius = match *mode {
        PlaygroundMode::Town | PlaygroundMode::Drive => 35.0,
        PlaygroundMode::Paint => 40.0,
        PlaygroundMode::Sandbox => 15.0,
    };
    let rig = OrbitCamera {
        focus: Vec3::ZERO,
        radius,
        yaw: 0.45,
        pitch: 0.65,
    };
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(radius, radius, radius).looking_at(Vec3::ZERO, Vec3::Y),
        // Listener for positional pop sounds.
        SpatialListener::new(0.4),
        rig,
    ));
}

fn orbit_camera(
    buttons: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    mut motion: EventReader<MouseMotion>,
    mut wheel: EventReader<MouseWheel>,
    mut rigs: Query<&mut OrbitCamera>,
) {
    let Ok(mut rig) = rigs.single_mut() else {
        return;
    };
    if buttons.pressed(MouseButton::Middle) {
        for ev in motion.read() {
            rig.yaw -= ev.delta.x * 0.005;
            rig.pitch = (rig.pitch + ev.delta.y * 0.005).clamp(0.05, 1.45);
        }
    } else {
        motion.clear();
    }
    // Shift+wheel belongs to the effect reticle, plain wheel zooms.
    let shift = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);
    for ev in wheel.read() {
        if shift {
            continue;
        }
        rig.radius = (rig.radius - ev.y * 2.0).clamp(5.0, 200.0);
    }
}

fn apply_camera_transform(mut q: Query<(&OrbitCamera, &mut Transform)>) {
    for (rig, mut tf) in q.iter_mut() {
        let offset = Vec3::new(
            rig.radius * rig.pitch.cos() * rig.yaw.sin(),
            rig.radius * rig.pitch.sin(),
            rig.radius * rig.pitch.cos() * rig.yaw.cos(),
        );
        *tf = Transform::from_translation(rig.focus + offset).looking_at(rig.focus, Vec3::Y);
    }
}
