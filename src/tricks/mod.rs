//! Tricks domain: rotation-based trick detection.

mod detector;
mod events;
mod systems;
mod trick;


pub use detector::TrickDetector;
pub use events::TrickDetected;
pub use trick::{Trick, TrickKind};

use bevy::prelude::*;

use crate::core::TickSet;
use crate::tricks::systems::{reset_detector_on_restart, track_rotation};

pub struct TricksPlugin;

impl Plugin for TricksPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrickDetector>()
            .add_message::<TrickDetected>()
            .add_systems(Update, reset_detector_on_restart.before(TickSet::Input))
            .add_systems(Update, track_rotation.in_set(TickSet::Tracking));
    }
}
