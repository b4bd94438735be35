//! Shape domain: systems applying preset and freeform shapes.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{BodyShape, RestartRequested};
use crate::shape::draw::FreehandDrawState;
use crate::shape::events::{ShapeChanged, ShapeRejected, ShapeSelected, StrokeCompleted};
use crate::shape::processor::{ShapeProcessor, ShapeRejection};
use crate::shape::resources::ActivePose;

pub(crate) fn apply_shape_selection(
    mut selections: MessageReader<ShapeSelected>,
    processor: Res<ShapeProcessor>,
    mut active_pose: ResMut<ActivePose>,
    mut changed: MessageWriter<ShapeChanged>,
    mut rejected: MessageWriter<ShapeRejected>,
) {
    for selection in selections.read() {
        if selection.shape == active_pose.shape() {
            continue;
        }
        if !active_pose.select(selection.shape, &processor) {
            let reason = ShapeRejection::NoFreeformPose;
            warn!("Shape selection ignored: {}", reason);
            rejected.write(ShapeRejected { reason });
            continue;
        }
        debug!("Shape selected: {}", selection.shape);
        changed.write(ShapeChanged {
            shape: selection.shape,
        });
    }
}

pub(crate) fn process_completed_strokes(
    mut strokes: MessageReader<StrokeCompleted>,
    processor: Res<ShapeProcessor>,
    mut active_pose: ResMut<ActivePose>,
    mut changed: MessageWriter<ShapeChanged>,
    mut rejected: MessageWriter<ShapeRejected>,
) {
    for stroke in strokes.read() {
        match processor.process(&stroke.points) {
            Ok(pose) => {
                active_pose.apply_custom(pose);
                info!("Applied freeform shape from {} points", stroke.points.len());
                changed.write(ShapeChanged {
                    shape: BodyShape::Custom,
                });
            }
            Err(reason) => {
                warn!("Freeform shape rejected: {}", reason);
                rejected.write(ShapeRejected { reason });
            }
        }
    }
}

pub(crate) fn reset_pose_on_restart(
    mut restarts: MessageReader<RestartRequested>,
    processor: Res<ShapeProcessor>,
    mut active_pose: ResMut<ActivePose>,
    mut draw_state: ResMut<FreehandDrawState>,
) {
    if restarts.read().count() == 0 {
        return;
    }
    active_pose.reset(&processor);
    draw_state.clear();
}
