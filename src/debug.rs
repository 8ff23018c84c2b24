//! Runtime debug helpers: rapier wireframe toggle (F3) and a periodic
//! entity-count log line.

use bevy::prelude::*;
use bevy_rapier3d::render::{DebugRenderContext, RapierDebugRenderPlugin};

use crate::components::Prop;
use crate::config::GameConfig;
use crate::poof::PoofParticle;

const LOG_TARGET: &str = "debug";

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        let start_enabled = app
            .world()
            .get_resource::<GameConfig>()
            .map(|cfg| cfg.rapier_debug)
            .unwrap_or(false);
        app.add_plugins(RapierDebugRenderPlugin {
            enabled: start_enabled,
            ..default()
        })
        .add_systems(Update, (toggle_rapier_debug, log_entity_counts));
    }
}

fn toggle_rapier_debug(
    keys: Res<ButtonInput<KeyCode>>,
    ctx: Option<ResMut<DebugRenderContext>>,
) {
    if !keys.just_pressed(KeyCode::F3) {
        return;
    }
    if let Some(mut ctx) = ctx {
        ctx.enabled = !ctx.enabled;
        info!(target: LOG_TARGET, "rapier debug render {}", if ctx.enabled { "on" } else { "off" });
    }
}

fn log_entity_counts(
    time: Res<Time>,
    mut timer: Local<f32>,
    q_props: Query<&Prop>,
    q_poofs: Query<&PoofParticle>,
) {
    *timer += time.delta_secs();
    if *timer > 5.0 {
        *timer = 0.0;
        info!(
            target: LOG_TARGET,
            "props={} poof_particles={}",
            q_props.iter().count(),
            q_poofs.iter().count()
        );
    }
}
