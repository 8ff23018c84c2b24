//! Static scenery: ground plane, invisible containment walls, lights and the
//! ground grid overlay.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::config::GameConfig;
use crate::game::PlaygroundMode;

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        let not_paint = |mode: Res<PlaygroundMode>| *mode != PlaygroundMode::Paint;
        app.add_systems(
            Startup,
            (
                setup_environment,
                setup_ground.run_if(not_paint),
                setup_walls.run_if(not_paint),
            ),
        )
        .add_systems(Update, draw_ground_grid.run_if(not_paint));
    }
}

fn setup_environment(mut commands: Commands, mode: Res<PlaygroundMode>) {
    let sky = match *mode {
        // Warm creamy backdrop behind the paper sheet, pastel sky elsewhere.
        PlaygroundMode::Paint => Color::srgb_u8(0xff, 0xe2, 0x9f),
        _ => Color::srgb_u8(0xa7, 0xc7, 0xe7),
    };
    commands.insert_resource(ClearColor(sky));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });
    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn setup_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<GameConfig>,
) {
    let size = cfg.arena.ground_size;
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(size, size))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0xd0, 0x8c, 0x9b),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::default(),
        GlobalTransform::default(),
        RigidBody::Fixed,
        // Thin slab sunk below the plane so its top surface sits at y=0.
        Collider::compound(vec![(
            Vec3::new(0.0, -0.1, 0.0),
            Quat::IDENTITY,
            Collider::cuboid(size * 0.5, 0.1, size * 0.5),
        )]),
        Friction::coefficient(cfg.arena.ground_friction),
        Restitution::coefficient(cfg.arena.ground_restitution),
        Name::new("Ground"),
    ));
}

/// Invisible walls and ceiling boxing props into the playable square, so an
/// explosion cannot fling them off the table for good.
fn setup_walls(mut commands: Commands, cfg: Res<GameConfig>) {
    let half = cfg.arena.half_extent;
    let t = cfg.arena.wall_thickness;
    let h = cfg.arena.wall_height;
    let span = half + t;

    let walls = [
        (Vec3::new(half + t * 0.5, h * 0.5, 0.0), Vec3::new(t * 0.5, h * 0.5, span)),
        (Vec3::new(-half - t * 0.5, h * 0.5, 0.0), Vec3::new(t * 0.5, h * 0.5, span)),
        (Vec3::new(0.0, h * 0.5, half + t * 0.5), Vec3::new(span, h * 0.5, t * 0.5)),
        (Vec3::new(0.0, h * 0.5, -half - t * 0.5), Vec3::new(span, h * 0.5, t * 0.5)),
        (Vec3::new(0.0, cfg.arena.ceiling_y, 0.0), Vec3::new(span, t * 0.5, span)),
    ];
    for (center, half_extents) in walls {
        commands.spawn((
            Transform::from_translation(center),
            GlobalTransform::default(),
            RigidBody::Fixed,
            Collider::cuboid(half_extents.x, half_extents.y, half_extents.z),
            Name::new("WallSegment"),
        ));
    }
}

fn draw_ground_grid(mut gizmos: Gizmos, cfg: Res<GameConfig>) {
    let cells = cfg.arena.ground_size as u32;
    gizmos.grid(
        Isometry3d::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
        UVec2::splat(cells),
        Vec2::splat(1.0),
        Color::srgba(1.0, 1.0, 1.0, 0.15),
    );
}
