//! Shape domain: freeform drawing, limb pose generation and preset shapes.

mod draw;
mod events;
mod presets;
mod processor;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use draw::{FreehandDrawState, normalize_screen_point};
pub use events::{ShapeChanged, ShapeRejected, ShapeSelected, StrokeCompleted};
pub use processor::{
    Limb, LimbChain, LimbPathPair, LimbPose, LimbSegment, MIN_PATH_POINTS, ShapeProcessor,
    ShapeRejection, TORSO_ANCHOR, TorsoGuide,
};
pub use resources::{ActivePose, ShapeTuning};

use bevy::prelude::*;

use crate::core::TickSet;
use crate::shape::systems::{
    apply_shape_selection, process_completed_strokes, reset_pose_on_restart,
};

pub struct ShapePlugin;

impl Plugin for ShapePlugin {
    fn build(&self, app: &mut App) {
        let tuning = app
            .world()
            .get_resource::<ShapeTuning>()
            .cloned()
            .unwrap_or_default();
        let processor = ShapeProcessor::new(tuning.clone());
        let active_pose = ActivePose::new(&processor);

        app.insert_resource(tuning)
            .insert_resource(processor)
            .insert_resource(active_pose)
            .init_resource::<FreehandDrawState>()
            .add_message::<StrokeCompleted>()
            .add_message::<ShapeSelected>()
            .add_message::<ShapeChanged>()
            .add_message::<ShapeRejected>()
            .add_systems(Update, reset_pose_on_restart.before(TickSet::Input))
            .add_systems(
                Update,
                (apply_shape_selection, process_completed_strokes)
                    .chain()
                    .in_set(TickSet::Pose),
            );
    }
}
