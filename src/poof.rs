//! Poof particle bursts: short-lived emissive spheres that fly outward,
//! grow, fade and despawn. Presentation only.

use bevy::color::Mix;
use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::PI;

use crate::config::GameConfig;
use crate::effects::PoofEvent;
use crate::spawn::pastel_color;
use crate::system_order::PostPhysicsAdjustSet;
use crate::variants::PoofKind;

#[derive(Component)]
pub struct PoofParticle {
    velocity: Vec3,
    scale_speed: f32,
    fade_speed: f32,
}

/// Shared unit sphere mesh for all particles.
#[derive(Resource)]
struct PoofMesh(Handle<Mesh>);

pub struct PoofPlugin;

impl Plugin for PoofPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, init_poof_mesh)
            .add_systems(
                Update,
                (spawn_poofs, update_poofs).chain().in_set(PostPhysicsAdjustSet),
            );
    }
}

fn init_poof_mesh(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    commands.insert_resource(PoofMesh(meshes.add(Sphere::new(1.0))));
}

fn spawn_poofs(
    mut commands: Commands,
    mut events: EventReader<PoofEvent>,
    mesh: Res<PoofMesh>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<GameConfig>,
) {
    let mut rng = rand::thread_rng();
    let table = PoofKind::table();
    for event in events.read() {
        let kind = table.pick(&mut rng);
        let base = kind.base_color();
        let pr = &cfg.poof.particles;
        let count = if pr.min < pr.max {
            rng.gen_range(pr.min..=pr.max)
        } else {
            pr.min
        };
        for _ in 0..count {
            let pastel = pastel_color(&mut rng);
            let color = pastel.mix(&base, rng.gen_range(0.2..0.5));
            let radius = rng.gen_range(0.05..0.08);
            let angle = rng.gen_range(0.0..PI * 2.0);
            let elevation = rng.gen_range(0.0..PI);
            let dir = Vec3::new(
                angle.cos() * elevation.sin(),
                elevation.cos(),
                angle.sin() * elevation.sin(),
            );
            let speed = if cfg.poof.speed.min < cfg.poof.speed.max {
                rng.gen_range(cfg.poof.speed.min..cfg.poof.speed.max)
            } else {
                cfg.poof.speed.min
            };
            commands.spawn((
                Mesh3d(mesh.0.clone()),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: color.with_alpha(0.85),
                    emissive: color.to_linear() * 0.4,
                    perceptual_roughness: 0.7,
                    metallic: 0.2,
                    alpha_mode: AlphaMode::Blend,
                    ..default()
                })),
                Transform::from_translation(event.position).with_scale(Vec3::splat(radius)),
                GlobalTransform::default(),
                PoofParticle {
                    velocity: dir * speed,
                    scale_speed: cfg.poof.scale_speed + rng.gen_range(0.0..0.1),
                    fade_speed: cfg.poof.fade_speed + rng.gen_range(0.0..0.1),
                },
            ));
        }
    }
}

fn update_poofs(
    mut commands: Commands,
    time: Res<Time>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut particles: Query<(Entity, &PoofParticle, &mut Transform, &MeshMaterial3d<StandardMaterial>)>,
) {
    let dt = time.delta_secs();
    for (entity, particle, mut tf, material) in particles.iter_mut() {
        tf.translation += particle.velocity * dt;
        tf.scale *= 1.0 + particle.scale_speed * dt;
        let Some(mat) = materials.get_mut(&material.0) else {
            commands.entity(entity).despawn();
            continue;
        };
        let alpha = mat.base_color.alpha() - particle.fade_speed * dt;
        if alpha <= 0.0 {
            commands.entity(entity).despawn();
        } else {
            mat.base_color.set_alpha(alpha);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app(cfg: GameConfig) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(cfg)
            .insert_resource(Assets::<Mesh>::default())
            .insert_resource(Assets::<StandardMaterial>::default())
            .add_event::<PoofEvent>()
            .add_plugins(PoofPlugin);
        app
    }

    #[test]
    fn inverted_particle_range_falls_back_to_min() {
        let mut cfg = GameConfig::default();
        cfg.poof.particles.min = 10;
        cfg.poof.particles.max = 4;
        let mut app = test_app(cfg);
        app.world_mut().send_event(PoofEvent {
            position: Vec3::ZERO,
        });

        app.update();

        let world = app.world_mut();
        let count = world.query::<&PoofParticle>().iter(world).count();
        assert_eq!(count, 10);
    }
}
