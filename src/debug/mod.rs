//! Debug overlay for tuning the simulation (dev-tools builds only).
//!
//! - F1 or ` toggles a readout of character, trampoline and trick state
//! - F2 toggles contact band, floor and torso guides

mod state;
mod systems;


pub use state::DebugState;
pub use systems::format_info;

use bevy::prelude::*;

use crate::debug::systems::{draw_debug_guides, handle_debug_hotkeys, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (handle_debug_hotkeys, update_debug_info_overlay).chain())
            .add_systems(
                Update,
                draw_debug_guides.run_if(|state: Res<DebugState>| state.show_guides),
            );
    }
}
