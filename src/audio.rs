//! Positional sound cues. Sounds load once into a bank at startup; playback
//! is fire-and-forget (one despawning audio entity per cue).

use bevy::audio::Volume;
use bevy::prelude::*;
use rand::Rng;

use crate::config::GameConfig;
use crate::effects::ExplosionEvent;

#[derive(Resource, Default)]
pub struct SoundBank {
    pops: Vec<Handle<AudioSource>>,
}

pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundBank>()
            .add_systems(Startup, load_sounds)
            .add_systems(Update, play_explosion_sounds);
    }
}

fn load_sounds(asset_server: Res<AssetServer>, cfg: Res<GameConfig>, mut bank: ResMut<SoundBank>) {
    if !cfg.audio.enabled {
        return;
    }
    bank.pops = cfg
        .audio
        .pop_sounds
        .iter()
        .map(|path| asset_server.load(path.as_str()))
        .collect();
}

fn play_explosion_sounds(
    mut commands: Commands,
    mut events: EventReader<ExplosionEvent>,
    bank: Res<SoundBank>,
    cfg: Res<GameConfig>,
) {
    if bank.pops.is_empty() {
        events.clear();
        return;
    }
    let mut rng = rand::thread_rng();
    for explosion in events.read() {
        let sound = bank.pops[rng.gen_range(0..bank.pops.len())].clone();
        commands.spawn((
            AudioPlayer::new(sound),
            PlaybackSettings::DESPAWN
                .with_volume(Volume::Linear(cfg.audio.volume))
                .with_speed(rng.gen_range(0.95..1.05))
                .with_spatial(true),
            Transform::from_translation(explosion.origin),
            GlobalTransform::default(),
        ));
    }
}
