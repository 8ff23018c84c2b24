//! Body → visual transform synchronization.
//!
//! Runs in `PostUpdate` after rapier's transform writeback, so every visual
//! observes the state of the physics step that just finished, never a stale
//! one. Rendering extracts transforms afterwards.

use bevy::prelude::*;
use bevy_rapier3d::prelude::PhysicsSet;

use crate::components::{Prop, PropVisual};

pub struct VisualSyncPlugin;

impl Plugin for VisualSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, sync_prop_visuals.after(PhysicsSet::Writeback));
    }
}

pub fn sync_prop_visuals(
    bodies: Query<(&Transform, &PropVisual), With<Prop>>,
    mut visuals: Query<&mut Transform, Without<Prop>>,
) {
    for (body_tf, visual) in bodies.iter() {
        // A visual can be despawned one frame ahead of its body by clear;
        // skip the dangling reference instead of panicking.
        let Ok(mut visual_tf) = visuals.get_mut(visual.0) else {
            continue;
        };
        visual_tf.translation = body_tf.translation;
        visual_tf.rotation = body_tf.rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::SpawnTransform;

    fn spawn_pair(world: &mut World, at: Vec3) -> (Entity, Entity) {
        let visual = world
            .spawn((Transform::default(), GlobalTransform::default()))
            .id();
        let body = world
            .spawn((
                Transform::from_translation(at),
                GlobalTransform::default(),
                Prop,
                PropVisual(visual),
                SpawnTransform(Transform::from_translation(at)),
            ))
            .id();
        (body, visual)
    }

    #[test]
    fn visual_matches_body_after_sync() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_systems(Update, sync_prop_visuals);
        let (body, visual) = spawn_pair(app.world_mut(), Vec3::new(1.0, 2.0, 3.0));

        for frame in 0..3 {
            // Perturb the body each frame; the visual must follow.
            let offset = Vec3::new(frame as f32, 0.5, -1.0);
            let rot = Quat::from_rotation_y(0.3 * frame as f32);
            {
                let mut tf = app.world_mut().get_mut::<Transform>(body).unwrap();
                tf.translation = offset;
                tf.rotation = rot;
            }
            app.update();
            let visual_tf = app.world().get::<Transform>(visual).unwrap();
            assert_eq!(visual_tf.translation, offset);
            assert_eq!(visual_tf.rotation, rot);
        }
    }

    #[test]
    fn dangling_visual_is_skipped() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_systems(Update, sync_prop_visuals);
        let (_body, visual) = spawn_pair(app.world_mut(), Vec3::ONE);
        app.world_mut().despawn(visual);
        // Must not panic.
        app.update();
    }
}
