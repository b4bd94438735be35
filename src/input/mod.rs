//! Input domain: keyboard rotation, shape hotkeys, freeform stroke capture and session keys.

mod bindings;
mod resources;
mod systems;


pub use bindings::{rotation_axis, shape_hotkey};
pub use resources::{InputTuning, PlayerInput};

use bevy::prelude::*;

use crate::core::TickSet;
use crate::input::systems::{
    apply_input_tuning, capture_stroke, read_rotation, request_restart, select_shape_hotkeys,
    toggle_drawing_mode, toggle_pause,
};

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        let tuning = app
            .world()
            .get_resource::<InputTuning>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(tuning)
            .init_resource::<PlayerInput>()
            .add_systems(Startup, apply_input_tuning)
            .add_systems(
                Update,
                (
                    read_rotation,
                    select_shape_hotkeys,
                    toggle_drawing_mode,
                    capture_stroke,
                )
                    .chain()
                    .in_set(TickSet::Input),
            )
            // Session keys work while paused
            .add_systems(Update, (request_restart, toggle_pause));
    }
}
