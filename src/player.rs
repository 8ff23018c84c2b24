//! Drive mode: a kinematic player cube steered with WASD, with a nitro
//! charge held on Shift and spent on release.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::config::GameConfig;
use crate::game::PlaygroundMode;
use crate::system_order::PrePhysicsSet;

#[derive(Component, Debug, Default)]
pub struct Player {
    pub speed: f32,
    pub steering: f32,
    pub nitro_charge: f32,
    pub nitro_active: bool,
}

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            spawn_player.run_if(resource_equals(PlaygroundMode::Drive)),
        )
        .add_systems(
            Update,
            (drive_player, tint_player_by_nitro)
                .run_if(resource_equals(PlaygroundMode::Drive))
                .in_set(PrePhysicsSet),
        );
    }
}

fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<GameConfig>,
) {
    let size = cfg.player.size;
    let half = size * 0.5;
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(size, size, size))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0xff, 0x63, 0x47),
            emissive: Color::srgb_u8(0xff, 0x63, 0x47).to_linear() * 1.5,
            perceptual_roughness: 0.3,
            metallic: 0.1,
            ..default()
        })),
        Transform::from_xyz(0.0, half, 0.0),
        GlobalTransform::default(),
        RigidBody::KinematicPositionBased,
        Collider::cuboid(half, half, half),
        Player::default(),
    ));
}

fn drive_player(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut q: Query<(&mut Player, &mut Transform)>,
) {
    let Ok((mut player, mut tf)) = q.single_mut() else {
        return;
    };
    let dt = time.delta_secs();
    let p = &cfg.player;
    let charging = keys.pressed(KeyCode::ShiftLeft);

    if charging && player.speed > 0.1 && !player.nitro_active {
        player.nitro_charge = (player.nitro_charge + p.nitro_charge_rate * dt).min(p.nitro_max);
    }
    if !charging && player.nitro_charge > 0.0 && !player.nitro_active && player.speed > 0.1 {
        player.nitro_active = true;
        player.speed += p.nitro_boost;
        player.nitro_charge = 0.0;
    }

    if player.nitro_active {
        player.speed *= 0.96;
        if player.speed < p.max_speed {
            player.nitro_active = false;
        }
    } else if keys.pressed(KeyCode::KeyW) {
        player.speed = (player.speed + p.acceleration * dt).min(p.max_speed);
    } else if keys.pressed(KeyCode::KeyS) {
        player.speed = (player.speed - p.acceleration * dt).max(-p.max_speed);
    } else {
        player.speed *= 0.95;
    }

    let steer_sign = if player.speed >= 0.0 { 1.0 } else { -1.0 };
    if keys.pressed(KeyCode::KeyA) {
        player.steering += p.turn_speed * dt * steer_sign;
    }
    if keys.pressed(KeyCode::KeyD) {
        player.steering -= p.turn_speed * dt * steer_sign;
    }
    if player.speed.abs() < 0.1 {
        player.steering *= 0.8;
    }

    tf.rotation = Quat::from_rotation_y(player.steering);
    let forward = tf.rotation * Vec3::NEG_Z;
    tf.translation += forward * player.speed * dt;
    // Glued to the ground plane.
    tf.translation.y = cfg.player.size * 0.5;
}

fn tint_player_by_nitro(
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<GameConfig>,
    q: Query<(&Player, &MeshMaterial3d<StandardMaterial>)>,
) {
    let Ok((player, material)) = q.single() else {
        return;
    };
    let Some(mat) = materials.get_mut(&material.0) else {
        return;
    };
    let base = Color::srgb_u8(0xff, 0x63, 0x47);
    mat.base_color = if player.nitro_charge > 0.0 {
        let t = (player.nitro_charge / cfg.player.nitro_max).clamp(0.0, 1.0);
        Color::hsl(10.0 + t * 140.0, 1.0, 0.45 + t * 0.25)
    } else {
        base
    };
}
