pub mod arena;
pub mod audio;
pub mod camera;
pub mod components;
pub mod config;
pub mod debug;
pub mod effects;
pub mod game;
pub mod input;
pub mod player;
pub mod poof;
pub mod reset;
pub mod reticle;
pub mod spawn;
pub mod sync;
pub mod system_order;
pub mod terrain;
pub mod variants;

// Curated re-exports
pub use components::{Prop, PropVisual, SpawnTransform};
pub use config::GameConfig;
pub use game::{PlaygroundMode, PlaygroundPlugin};
