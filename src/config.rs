use anyhow::Context;
use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Bouncy Playground".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: -9.81 }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

/// Static geometry keeping props on the table: visible ground plane plus
/// invisible walls and a ceiling around the playable square.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ArenaConfig {
    pub ground_size: f32,
    pub half_extent: f32,
    pub wall_height: f32,
    pub wall_thickness: f32,
    pub ceiling_y: f32,
    pub ground_friction: f32,
    pub ground_restitution: f32,
}
impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            ground_size: 200.0,
            half_extent: 50.0,
            wall_height: 80.0,
            wall_thickness: 30.0,
            ceiling_y: 80.0,
            ground_friction: 0.4,
            ground_restitution: 0.8,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TownConfig {
    /// Grid cells per side = 2 * grid_radius + 1.
    pub grid_radius: i32,
    pub spacing: f32,
    pub house_weight: f32,
    pub tower_weight: f32,
    pub cylinder_weight: f32,
    pub tower_floors: SpawnRange<u32>,
    /// Additional town centers populated besides the origin.
    pub outposts: Vec<(f32, f32)>,
}
impl Default for TownConfig {
    fn default() -> Self {
        Self {
            grid_radius: 1,
            spacing: 7.0,
            house_weight: 0.40,
            tower_weight: 0.35,
            cylinder_weight: 0.25,
            tower_floors: SpawnRange { min: 2, max: 4 },
            outposts: vec![(-40.0, 30.0), (40.0, -30.0), (-60.0, -60.0), (60.0, 60.0)],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScatterConfig {
    pub count: usize,
    pub half_extent: f32,
    pub box_weight: f32,
    pub tower_weight: f32,
    pub sphere_weight: f32,
    pub cylinder_weight: f32,
}
impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            count: 50,
            half_extent: 30.0,
            box_weight: 0.25,
            tower_weight: 0.25,
            sphere_weight: 0.25,
            cylinder_weight: 0.25,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PropMaterialConfig {
    pub friction: f32,
    pub box_restitution: f32,
    pub sphere_restitution: f32,
}
impl Default for PropMaterialConfig {
    fn default() -> Self {
        Self {
            friction: 0.3,
            box_restitution: 0.3,
            sphere_restitution: 0.8,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ExplosionConfig {
    pub strong_impulse: f32,
    pub weak_impulse: f32,
    /// Initial reticle radius; Shift+wheel adjusts within [radius_min, radius_max].
    pub radius: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub radius_step: f32,
}
impl Default for ExplosionConfig {
    fn default() -> Self {
        Self {
            strong_impulse: 100.0,
            weak_impulse: 30.0,
            radius: 2.0,
            radius_min: 0.5,
            radius_max: 20.0,
            radius_step: 0.2,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindConfig {
    /// Initial horizontal force along +X, newtons per body.
    pub force: f32,
    pub step: f32,
    pub max: f32,
}
impl Default for WindConfig {
    fn default() -> Self {
        Self {
            force: 0.0,
            step: 2.0,
            max: 30.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct VortexConfig {
    pub pull: f32,
    pub swirl: f32,
    pub radius: f32,
    pub orbit_radius: f32,
    pub orbit_speed: f32,
}
impl Default for VortexConfig {
    fn default() -> Self {
        Self {
            pull: 8.0,
            swirl: 12.0,
            radius: 15.0,
            orbit_radius: 10.0,
            orbit_speed: 0.5,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EffectsConfig {
    pub explosion: ExplosionConfig,
    pub wind: WindConfig,
    pub vortex: VortexConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PoofConfig {
    pub particles: SpawnRange<u32>,
    /// Particle growth and fade rates, per second.
    pub scale_speed: f32,
    pub fade_speed: f32,
    pub speed: SpawnRange<f32>,
}
impl Default for PoofConfig {
    fn default() -> Self {
        Self {
            particles: SpawnRange { min: 18, max: 30 },
            scale_speed: 0.5,
            fade_speed: 0.6,
            speed: SpawnRange { min: 12.0, max: 24.0 },
        }
    }
}

/// The field of loose boxes the drive-mode player plows through.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CubeFieldConfig {
    pub count: usize,
    pub size: SpawnRange<f32>,
}
impl Default for CubeFieldConfig {
    fn default() -> Self {
        Self {
            count: 90,
            size: SpawnRange { min: 1.0, max: 6.0 },
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    pub size: f32,
    pub acceleration: f32,
    pub max_speed: f32,
    pub turn_speed: f32,
    pub nitro_charge_rate: f32,
    pub nitro_max: f32,
    pub nitro_boost: f32,
}
impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            size: 3.0,
            acceleration: 15.0,
            max_speed: 20.0,
            turn_speed: 2.5,
            nitro_charge_rate: 90.0,
            nitro_max: 200.0,
            nitro_boost: 100.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    pub volume: f32,
    /// Asset paths of the one-shot pop sounds; one is picked at random.
    pub pop_sounds: Vec<String>,
}
impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 0.7,
            pop_sounds: vec!["sounds/pop.ogg".into()],
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub gravity: GravityConfig,
    pub arena: ArenaConfig,
    pub town: TownConfig,
    pub scatter: ScatterConfig,
    pub materials: PropMaterialConfig,
    pub effects: EffectsConfig,
    pub poof: PoofConfig,
    pub cube_field: CubeFieldConfig,
    pub player: PlayerConfig,
    pub audio: AudioConfig,
    pub rapier_debug: bool,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            gravity: Default::default(),
            arena: Default::default(),
            town: Default::default(),
            scatter: Default::default(),
            materials: Default::default(),
            effects: Default::default(),
            poof: Default::default(),
            cube_field: Default::default(),
            player: Default::default(),
            audio: Default::default(),
            rapier_debug: false,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        ron::from_str(&data).with_context(|| format!("parse RON {}", path.display()))
    }

    /// Load the config or fall back to defaults, reporting the failure.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<anyhow::Error>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}
