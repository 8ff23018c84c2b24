//! Continuous force accumulation: the per-frame clear, the wind push, and
//! the vortex pull/swirl, driven through the real systems in their frame
//! order.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use bouncy_playground::components::Prop;
use bouncy_playground::config::GameConfig;
use bouncy_playground::effects::{
    apply_vortex, apply_wind, clear_external_forces, VortexState, WindState,
};

fn test_app(cfg: GameConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(cfg)
        .init_resource::<WindState>()
        .init_resource::<VortexState>()
        .add_systems(
            Update,
            (clear_external_forces, apply_wind, apply_vortex).chain(),
        );
    app
}

fn spawn_prop(app: &mut App, pos: Vec3) -> Entity {
    app.world_mut()
        .spawn((
            Prop,
            Transform::from_translation(pos),
            GlobalTransform::default(),
            Velocity::zero(),
            ExternalForce::default(),
        ))
        .id()
}

fn force_of(app: &App, entity: Entity) -> Vec3 {
    app.world().get::<ExternalForce>(entity).unwrap().force
}

#[test]
fn wind_pushes_every_prop_each_frame() {
    let mut app = test_app(GameConfig::default());
    let a = spawn_prop(&mut app, Vec3::new(0.0, 1.0, 0.0));
    let b = spawn_prop(&mut app, Vec3::new(40.0, 1.0, -40.0));
    app.world_mut().resource_mut::<WindState>().force = Vec3::new(3.0, 0.0, 0.0);

    app.update();

    assert_eq!(force_of(&app, a), Vec3::new(3.0, 0.0, 0.0));
    assert_eq!(force_of(&app, b), Vec3::new(3.0, 0.0, 0.0));
}

#[test]
fn forces_are_cleared_not_accumulated_across_frames() {
    let mut app = test_app(GameConfig::default());
    let prop = spawn_prop(&mut app, Vec3::new(0.0, 1.0, 0.0));
    app.world_mut().resource_mut::<WindState>().force = Vec3::new(3.0, 0.0, 0.0);

    app.update();
    app.update();
    app.update();

    // The buffer restarts from zero each frame, so three frames of wind
    // still read as a single frame's worth.
    assert_eq!(force_of(&app, prop), Vec3::new(3.0, 0.0, 0.0));
}

#[test]
fn vortex_pulls_and_swirls_inside_its_radius() {
    // Pin the core at the arena center so distances are exact.
    let mut cfg = GameConfig::default();
    cfg.effects.vortex.orbit_radius = 0.0;
    let mut app = test_app(cfg);
    let inside = spawn_prop(&mut app, Vec3::new(5.0, 1.0, 0.0));
    app.world_mut().resource_mut::<VortexState>().enabled = true;

    app.update();

    // Core at (0,1,0), body 5 out of radius 15: pull 8*(2/3), swirl 12*(2/3).
    let force = force_of(&app, inside);
    let expected = Vec3::new(-8.0, 0.0, 0.0) * (2.0 / 3.0)
        + Vec3::new(0.0, 0.0, -12.0) * (2.0 / 3.0);
    assert!(
        (force - expected).length() < 1e-4,
        "vortex force {force:?}, expected {expected:?}"
    );
}

#[test]
fn vortex_ignores_bodies_outside_its_radius() {
    let mut cfg = GameConfig::default();
    cfg.effects.vortex.orbit_radius = 0.0;
    let mut app = test_app(cfg);
    let outside = spawn_prop(&mut app, Vec3::new(30.0, 1.0, 0.0));
    app.world_mut().resource_mut::<VortexState>().enabled = true;

    app.update();

    assert_eq!(force_of(&app, outside), Vec3::ZERO);
}

#[test]
fn wind_and_vortex_combine_additively() {
    let mut cfg = GameConfig::default();
    cfg.effects.vortex.orbit_radius = 0.0;
    let mut app = test_app(cfg);
    let prop = spawn_prop(&mut app, Vec3::new(5.0, 1.0, 0.0));
    app.world_mut().resource_mut::<WindState>().force = Vec3::new(3.0, 0.0, 0.0);
    app.world_mut().resource_mut::<VortexState>().enabled = true;

    app.update();

    let force = force_of(&app, prop);
    let vortex_part = Vec3::new(-8.0, 0.0, 0.0) * (2.0 / 3.0)
        + Vec3::new(0.0, 0.0, -12.0) * (2.0 / 3.0);
    assert!((force - (Vec3::new(3.0, 0.0, 0.0) + vortex_part)).length() < 1e-4);
}
