use bevy::prelude::*;

/// Systems feeding forces/impulses into rapier; runs in `Update`, before the
/// physics plugin steps in `PostUpdate`.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet;

/// Presentation-side updates that must observe the effects applied this
/// frame (particle aging, debug visuals).
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostPhysicsAdjustSet;
