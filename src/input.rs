//! Pointer and keyboard bindings: click explosions, wind/gravity tuning,
//! vortex toggle.

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::effects::{ExplosionEvent, VortexState, WindState};
use crate::game::PlaygroundMode;
use crate::reticle::EffectReticle;
use crate::system_order::PrePhysicsSet;

const LOG_TARGET: &str = "input";

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, init_wind).add_systems(
            Update,
            (
                trigger_click_explosion
                    .run_if(resource_equals(PlaygroundMode::Town))
                    .before(PrePhysicsSet),
                adjust_wind.run_if(resource_equals(PlaygroundMode::Sandbox)),
                adjust_gravity.run_if(resource_equals(PlaygroundMode::Sandbox)),
                toggle_vortex,
            ),
        );
    }
}

fn init_wind(cfg: Res<GameConfig>, mut wind: ResMut<WindState>) {
    wind.force = Vec3::new(cfg.effects.wind.force, 0.0, 0.0);
}

/// Left click fires the strong blast, right click the weak one, both at the
/// reticle's ground position.
fn trigger_click_explosion(
    buttons: Res<ButtonInput<MouseButton>>,
    cfg: Res<GameConfig>,
    reticle: Res<EffectReticle>,
    mut explosions: EventWriter<ExplosionEvent>,
) {
    let strength = if buttons.just_pressed(MouseButton::Left) {
        cfg.effects.explosion.strong_impulse
    } else if buttons.just_pressed(MouseButton::Right) {
        cfg.effects.explosion.weak_impulse
    } else {
        return;
    };
    explosions.write(ExplosionEvent {
        origin: reticle.position,
        radius: reticle.radius,
        strength,
    });
}

fn adjust_wind(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut wind: ResMut<WindState>,
) {
    let step = cfg.effects.wind.step * time.delta_secs();
    let mut changed = false;
    if keys.pressed(KeyCode::ArrowLeft) {
        wind.force.x -= step;
        changed = true;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        wind.force.x += step;
        changed = true;
    }
    if changed {
        let max = cfg.effects.wind.max;
        wind.force.x = wind.force.x.clamp(-max, max);
        info!(target: LOG_TARGET, "Wind -> {:.1} N", wind.force.x);
    }
}

fn adjust_gravity(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut cfg: ResMut<GameConfig>,
) {
    let step = 5.0 * time.delta_secs();
    let mut changed = false;
    if keys.pressed(KeyCode::ArrowUp) {
        cfg.gravity.y += step;
        changed = true;
    }
    if keys.pressed(KeyCode::ArrowDown) {
        cfg.gravity.y -= step;
        changed = true;
    }
    if changed {
        cfg.gravity.y = cfg.gravity.y.clamp(-30.0, 5.0);
        info!(target: LOG_TARGET, "Gravity -> {:.2} m/s²", cfg.gravity.y);
    }
}

fn toggle_vortex(keys: Res<ButtonInput<KeyCode>>, mut vortex: ResMut<VortexState>) {
    if keys.just_pressed(KeyCode::KeyV) {
        vortex.enabled = !vortex.enabled;
        info!(
            target: LOG_TARGET,
            "Vortex {}",
            if vortex.enabled { "enabled" } else { "disabled" }
        );
    }
}
