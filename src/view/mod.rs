//! View domain: renders the frame snapshot with sprites and overlays drawing mode.

mod components;
mod scene;
mod systems;


pub use components::{BodyPartSprite, TrampolineBed};
pub use scene::{
    BodyPart, PIXELS_PER_METRE, VIEW_CENTRE_HEIGHT, bed_rect, body_part_count, body_parts,
    to_screen, torso_to_canvas,
};

use bevy::prelude::*;

use crate::core::TickSet;
use crate::view::systems::{
    draw_stroke_overlay, setup_camera, spawn_scene, update_body, update_trampoline,
};

pub struct ViewPlugin;

impl Plugin for ViewPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_camera, spawn_scene))
            .add_systems(
                Update,
                (update_trampoline, update_body, draw_stroke_overlay).after(TickSet::Publish),
            );
    }
}
