use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use clap::ValueEnum;

use crate::arena::ArenaPlugin;
use crate::audio::SoundPlugin;
use crate::camera::CameraPlugin;
use crate::config::GameConfig;
use crate::debug::DebugPlugin;
use crate::effects::EffectsPlugin;
use crate::input::InputPlugin;
use crate::player::PlayerPlugin;
use crate::poof::PoofPlugin;
use crate::reset::ResetPlugin;
use crate::reticle::ReticlePlugin;
use crate::spawn::ScenePopulatePlugin;
use crate::sync::VisualSyncPlugin;
use crate::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
use crate::terrain::TerrainPlugin;

/// Which playground the app runs; picked on the command line, one fixed
/// mode per process.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlaygroundMode {
    /// Populated town + scatter, click explosions, poofs and sound.
    Town,
    /// Empty ground, click to drop cubes/spheres, wind and gravity keys.
    Sandbox,
    /// Drivable cube plowing through a field of boxes.
    Drive,
    /// Still noise-displaced paper terrain to orbit around.
    Paint,
}

pub struct PlaygroundPlugin;

impl Plugin for PlaygroundPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (PrePhysicsSet, PostPhysicsAdjustSet.after(PrePhysicsSet)),
        )
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins((
            CameraPlugin,
            ArenaPlugin,
            ScenePopulatePlugin,
            VisualSyncPlugin,
            EffectsPlugin,
            ReticlePlugin,
            InputPlugin,
            ResetPlugin,
            PoofPlugin,
            SoundPlugin,
            PlayerPlugin,
            TerrainPlugin,
            DebugPlugin,
        ))
        .add_systems(Update, apply_config_gravity);
    }
}

/// Pushes the configured gravity into rapier whenever it changes (the
/// context entity appears a frame after startup, hence a steady system
/// instead of a Startup hook).
fn apply_config_gravity(cfg: Res<GameConfig>, mut rapier_cfg: Query<&mut RapierConfiguration>) {
    let gravity = Vec3::new(0.0, cfg.gravity.y, 0.0);
    for mut rc in rapier_cfg.iter_mut() {
        if rc.gravity != gravity {
            rc.gravity = gravity;
        }
    }
}
