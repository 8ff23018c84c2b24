use bevy::prelude::*;

/// Marker for a physics-backed prop: one rigid body paired with one visual.
#[derive(Component)]
pub struct Prop;

/// Points from a prop's body entity to its paired visual entity. The pair is
/// co-created by the spawners and co-destroyed by clear.
#[derive(Component, Debug, Copy, Clone)]
pub struct PropVisual(pub Entity);

/// Transform captured at creation time; reset restores a body to this state.
#[derive(Component, Debug, Copy, Clone)]
pub struct SpawnTransform(pub Transform);
