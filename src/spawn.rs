//! Prop spawners: primitives, composite structures, and the procedural
//! populators that fill a scene with them.
//!
//! Every spawner creates a tracked pair: a rigid-body entity (with its
//! creation-time [`SpawnTransform`] snapshot) and a separate visual entity,
//! linked through [`PropVisual`].

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::Rng;

use crate::components::{Prop, PropVisual, SpawnTransform};
use crate::config::GameConfig;
use crate::game::PlaygroundMode;
use crate::variants::{ScatterKind, StructureKind, WeightedTable};

/// Geometric dimensions are floored here so a degenerate random draw can
/// never produce a zero-size collider or mesh.
pub const MIN_DIMENSION: f32 = 0.05;

pub struct ScenePopulatePlugin;

impl Plugin for ScenePopulatePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                populate_town_scene.run_if(resource_equals(PlaygroundMode::Town)),
                populate_cube_field.run_if(resource_equals(PlaygroundMode::Drive)),
            ),
        )
        .add_systems(
            Update,
            sandbox_click_spawn.run_if(resource_equals(PlaygroundMode::Sandbox)),
        );
    }
}

#[derive(Debug, Copy, Clone)]
pub struct SpawnedProp {
    pub body: Entity,
    pub visual: Entity,
}

fn spawn_pair(
    commands: &mut Commands,
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
    collider: Collider,
    position: Vec3,
    restitution: f32,
    friction: f32,
    asleep: bool,
) -> SpawnedProp {
    let transform = Transform::from_translation(position);
    let visual = commands
        .spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            transform,
            GlobalTransform::default(),
        ))
        .id();
    let mut body = commands.spawn((
        transform,
        GlobalTransform::default(),
        RigidBody::Dynamic,
        collider,
        Velocity::zero(),
        ExternalForce::default(),
        Restitution::coefficient(restitution),
        Friction::coefficient(friction),
        Prop,
        PropVisual(visual),
        SpawnTransform(transform),
    ));
    if asleep {
        body.insert(Sleeping {
            sleeping: true,
            ..Default::default()
        });
    }
    SpawnedProp {
        body: body.id(),
        visual,
    }
}

pub fn spawn_box(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    cfg: &GameConfig,
    position: Vec3,
    size: f32,
    color: Color,
    asleep: bool,
) -> SpawnedProp {
    let size = size.max(MIN_DIMENSION);
    let half = size * 0.5;
    spawn_pair(
        commands,
        meshes.add(Cuboid::new(size, size, size)),
        materials.add(color),
        Collider::cuboid(half, half, half),
        position,
        cfg.materials.box_restitution,
        cfg.materials.friction,
        asleep,
    )
}

pub fn spawn_sphere(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    cfg: &GameConfig,
    position: Vec3,
    radius: f32,
    color: Color,
) -> SpawnedProp {
    let radius = radius.max(MIN_DIMENSION);
    spawn_pair(
        commands,
        meshes.add(Sphere::new(radius)),
        materials.add(color),
        Collider::ball(radius),
        position,
        cfg.materials.sphere_restitution,
        cfg.materials.friction,
        false,
    )
}

pub fn spawn_cylinder(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    cfg: &GameConfig,
    position: Vec3,
    radius: f32,
    height: f32,
    color: Color,
    asleep: bool,
) -> SpawnedProp {
    let radius = radius.max(MIN_DIMENSION);
    let height = height.max(MIN_DIMENSION);
    spawn_pair(
        commands,
        meshes.add(Cylinder::new(radius, height)),
        materials.add(color),
        Collider::cylinder(height * 0.5, radius),
        position,
        cfg.materials.box_restitution,
        cfg.materials.friction,
        asleep,
    )
}

/// House: base block, offset upper block, chimney cylinder. Spawned asleep so
/// towns stay put until something disturbs them.
pub fn spawn_house(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    cfg: &GameConfig,
    x: f32,
    z: f32,
) {
    let base_size = 2.0;
    let base_height = base_size;
    let upper_size = 1.2;
    let offset = Vec3::new(0.3, 0.0, -0.3);

    let base_pos = Vec3::new(x, base_height * 0.5, z);
    spawn_box(
        commands,
        meshes,
        materials,
        cfg,
        base_pos,
        base_size,
        Color::srgb_u8(0xff, 0xe2, 0x9f),
        true,
    );

    let upper_y = base_height + upper_size * 0.5;
    let upper_pos = Vec3::new(x, upper_y, z) + offset;
    spawn_box(
        commands,
        meshes,
        materials,
        cfg,
        upper_pos,
        upper_size,
        Color::srgb_u8(0xe0, 0xbb, 0xff),
        true,
    );

    let chimney_height = 0.6;
    let chimney_pos = upper_pos + Vec3::Y * (upper_size * 0.5 + chimney_height * 0.5);
    spawn_cylinder(
        commands,
        meshes,
        materials,
        cfg,
        chimney_pos,
        0.25,
        chimney_height,
        Color::srgb_u8(0xcb, 0xb8, 0xff),
        true,
    );
}

/// Tower: a stack of random-size blocks, each resting on the previous one.
pub fn spawn_tower(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    cfg: &GameConfig,
    rng: &mut impl Rng,
    x: f32,
    z: f32,
    floors: u32,
) {
    let mut current_y = 0.0;
    for _ in 0..floors {
        let size = rng.gen_range(0.9..1.6);
        current_y += size * 0.5;
        spawn_box(
            commands,
            meshes,
            materials,
            cfg,
            Vec3::new(x, current_y, z),
            size,
            random_hsl(rng),
            false,
        );
        current_y += size * 0.5;
    }
}

pub fn spawn_cylinder_stack(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    cfg: &GameConfig,
    x: f32,
    z: f32,
) {
    let height = 3.0;
    spawn_cylinder(
        commands,
        meshes,
        materials,
        cfg,
        Vec3::new(x, height * 0.5, z),
        1.0,
        height,
        Color::srgb_u8(0xa0, 0xc4, 0xff),
        false,
    );
}

pub fn structure_table(cfg: &GameConfig) -> WeightedTable<StructureKind> {
    WeightedTable::new([
        (cfg.town.house_weight, StructureKind::House),
        (cfg.town.tower_weight, StructureKind::Tower),
        (cfg.town.cylinder_weight, StructureKind::CylinderStack),
    ])
}

pub fn scatter_table(cfg: &GameConfig) -> WeightedTable<ScatterKind> {
    WeightedTable::new([
        (cfg.scatter.box_weight, ScatterKind::Box),
        (cfg.scatter.tower_weight, ScatterKind::Tower),
        (cfg.scatter.sphere_weight, ScatterKind::Sphere),
        (cfg.scatter.cylinder_weight, ScatterKind::Cylinder),
    ])
}

/// Fills a symmetric (2r+1)×(2r+1) grid around `center` with one structure
/// per cell, the variant drawn from the town's weighted table.
pub fn populate_town(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    cfg: &GameConfig,
    rng: &mut impl Rng,
    center: Vec2,
) {
    let table = structure_table(cfg);
    let r = cfg.town.grid_radius;
    let spacing = cfg.town.spacing;
    for row in -r..=r {
        for col in -r..=r {
            let x = center.x + col as f32 * spacing;
            let z = center.y + row as f32 * spacing;
            match table.pick(rng) {
                StructureKind::House => {
                    spawn_house(commands, meshes, materials, cfg, x, z);
                }
                StructureKind::Tower => {
                    let fr = &cfg.town.tower_floors;
                    let floors = if fr.min < fr.max {
                        rng.gen_range(fr.min..fr.max)
                    } else {
                        fr.min
                    };
                    spawn_tower(commands, meshes, materials, cfg, rng, x, z, floors);
                }
                StructureKind::CylinderStack => {
                    spawn_cylinder_stack(commands, meshes, materials, cfg, x, z);
                }
            }
        }
    }
}

/// Loose props strewn across the ground between the towns.
pub fn scatter_props(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    cfg: &GameConfig,
    rng: &mut impl Rng,
) {
    let table = scatter_table(cfg);
    // A zero or negative extent still has to yield a non-empty draw range.
    let extent = cfg.scatter.half_extent.max(MIN_DIMENSION);
    for _ in 0..cfg.scatter.count {
        let x = rng.gen_range(-extent..extent);
        let z = rng.gen_range(-extent..extent);
        match table.pick(rng) {
            ScatterKind::Box => {
                let size = rng.gen_range(0.5..2.0);
                let y = size * 0.5 + rng.gen_range(0.0..3.0);
                spawn_box(
                    commands,
                    meshes,
                    materials,
                    cfg,
                    Vec3::new(x, y, z),
                    size,
                    random_hsl(rng),
                    false,
                );
            }
            ScatterKind::Tower => {
                let floors = rng.gen_range(3..8);
                spawn_tower(commands, meshes, materials, cfg, rng, x, z, floors);
            }
            ScatterKind::Sphere => {
                let radius = rng.gen_range(0.5..2.0);
                let y = radius + rng.gen_range(0.0..2.0);
                spawn_sphere(
                    commands,
                    meshes,
                    materials,
                    cfg,
                    Vec3::new(x, y, z),
                    radius,
                    random_hsl(rng),
                );
            }
            ScatterKind::Cylinder => {
                let radius = rng.gen_range(0.4..1.4);
                let height = rng.gen_range(1.0..3.0);
                let y = height * 0.5 + rng.gen_range(0.0..2.0);
                spawn_cylinder(
                    commands,
                    meshes,
                    materials,
                    cfg,
                    Vec3::new(x, y, z),
                    radius,
                    height,
                    random_hsl(rng),
                    false,
                );
            }
        }
    }
}

fn populate_town_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<GameConfig>,
) {
    let mut rng = rand::thread_rng();
    populate_town(
        &mut commands,
        &mut meshes,
        &mut materials,
        &cfg,
        &mut rng,
        Vec2::ZERO,
    );
    for &(x, z) in &cfg.town.outposts {
        populate_town(
            &mut commands,
            &mut meshes,
            &mut materials,
            &cfg,
            &mut rng,
            Vec2::new(x, z),
        );
    }
    scatter_props(&mut commands, &mut meshes, &mut materials, &cfg, &mut rng);
}

/// Drive mode: a field of loose cubes for the player to plow through.
fn populate_cube_field(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<GameConfig>,
) {
    let mut rng = rand::thread_rng();
    let extent = cfg.arena.half_extent.max(MIN_DIMENSION);
    let sr = &cfg.cube_field.size;
    for _ in 0..cfg.cube_field.count {
        let size = if sr.min < sr.max {
            rng.gen_range(sr.min..sr.max)
        } else {
            sr.min
        };
        let x = rng.gen_range(-extent..extent);
        let z = rng.gen_range(-extent..extent);
        spawn_box(
            &mut commands,
            &mut meshes,
            &mut materials,
            &cfg,
            Vec3::new(x, size * 0.5, z),
            size,
            random_hsl(&mut rng),
            false,
        );
    }
}

/// Sandbox mode: left click drops a cube, right click drops a sphere.
fn sandbox_click_spawn(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<GameConfig>,
    buttons: Res<ButtonInput<MouseButton>>,
) {
    let left = buttons.just_pressed(MouseButton::Left);
    let right = buttons.just_pressed(MouseButton::Right);
    if !left && !right {
        return;
    }
    let mut rng = rand::thread_rng();
    let x = rng.gen_range(-7.5..7.5);
    let z = rng.gen_range(-7.5..7.5);
    let color = pastel_color(&mut rng);
    if left {
        spawn_box(
            &mut commands,
            &mut meshes,
            &mut materials,
            &cfg,
            Vec3::new(x, 5.0, z),
            1.0,
            color,
            false,
        );
    } else {
        spawn_sphere(
            &mut commands,
            &mut meshes,
            &mut materials,
            &cfg,
            Vec3::new(x, 5.0, z),
            0.52,
            color,
        );
    }
}

pub fn random_hsl(rng: &mut impl Rng) -> Color {
    Color::hsl(rng.gen_range(0.0..360.0), 0.70, 0.60)
}

pub fn pastel_color(rng: &mut impl Rng) -> Color {
    const PASTELS: [(u8, u8, u8); 10] = [
        (0xff, 0xc8, 0xdd),
        (0xff, 0xaf, 0xcc),
        (0xbd, 0xe0, 0xfe),
        (0xa2, 0xd2, 0xff),
        (0xcd, 0xb4, 0xdb),
        (0xe4, 0xc1, 0xf9),
        (0xb9, 0xfb, 0xc0),
        (0xa0, 0xc4, 0xff),
        (0xfb, 0xc3, 0xbc),
        (0xfd, 0xe4, 0xcf),
    ];
    let (r, g, b) = PASTELS[rng.gen_range(0..PASTELS.len())];
    Color::srgb_u8(r, g, b)
}
