//! Headless checks of the radial impulse application, driven through the
//! real system via events rather than calling the math helpers.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use bouncy_playground::components::Prop;
use bouncy_playground::effects::{apply_explosions, ExplosionEvent, PoofEvent};

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_event::<ExplosionEvent>()
        .add_event::<PoofEvent>()
        .add_systems(Update, apply_explosions);
    app
}

fn spawn_prop(app: &mut App, pos: Vec3) -> Entity {
    app.world_mut()
        .spawn((
            Prop,
            Transform::from_translation(pos),
            GlobalTransform::default(),
            Velocity::zero(),
        ))
        .id()
}

fn explode(app: &mut App, origin: Vec3, radius: f32, strength: f32) {
    app.world_mut().send_event(ExplosionEvent {
        origin,
        radius,
        strength,
    });
    app.update();
}

#[test]
fn impulse_scales_linearly_with_distance() {
    let mut app = test_app();
    let near = spawn_prop(&mut app, Vec3::new(5.0, 0.0, 0.0));
    explode(&mut app, Vec3::ZERO, 10.0, 100.0);

    let vel = app.world().get::<Velocity>(near).unwrap();
    // strength * (1 - 5/10) = 50, pushed along +X
    assert!((vel.linvel - Vec3::new(50.0, 0.0, 0.0)).length() < 1e-4);
}

#[test]
fn bodies_outside_radius_are_untouched() {
    let mut app = test_app();
    let far = spawn_prop(&mut app, Vec3::new(20.0, 0.0, 0.0));
    let edge = spawn_prop(&mut app, Vec3::new(10.0, 0.0, 0.0));
    explode(&mut app, Vec3::ZERO, 10.0, 100.0);

    assert_eq!(app.world().get::<Velocity>(far).unwrap().linvel, Vec3::ZERO);
    assert_eq!(
        app.world().get::<Velocity>(edge).unwrap().linvel,
        Vec3::ZERO,
        "falloff reaches exactly zero at the radius"
    );
}

#[test]
fn body_at_origin_is_pushed_up() {
    let mut app = test_app();
    let centered = spawn_prop(&mut app, Vec3::ZERO);
    explode(&mut app, Vec3::ZERO, 10.0, 100.0);

    let vel = app.world().get::<Velocity>(centered).unwrap();
    assert!(vel.linvel.is_finite());
    assert!((vel.linvel - Vec3::new(0.0, 100.0, 0.0)).length() < 1e-4);
}

#[test]
fn overlapping_explosions_accumulate() {
    let mut app = test_app();
    let prop = spawn_prop(&mut app, Vec3::new(5.0, 0.0, 0.0));
    app.world_mut().send_event(ExplosionEvent {
        origin: Vec3::ZERO,
        radius: 10.0,
        strength: 100.0,
    });
    app.world_mut().send_event(ExplosionEvent {
        origin: Vec3::ZERO,
        radius: 10.0,
        strength: 100.0,
    });
    app.update();

    let vel = app.world().get::<Velocity>(prop).unwrap();
    assert!((vel.linvel.x - 100.0).abs() < 1e-4);
}

#[test]
fn hits_emit_poof_events() {
    let mut app = test_app();
    spawn_prop(&mut app, Vec3::new(2.0, 0.0, 0.0));
    explode(&mut app, Vec3::ZERO, 10.0, 100.0);

    let poofs = app.world().resource::<Events<PoofEvent>>();
    // One per hit body plus the central burst.
    assert_eq!(poofs.len(), 2);
}
