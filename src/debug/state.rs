//! Debug state resource.

use bevy::prelude::*;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the simulation readout is visible
    pub show_info: bool,
    /// Whether contact band, floor and torso guides are drawn
    pub show_guides: bool,
}
