//! Core domain: game state, tick ordering, shared tags and session flow.

mod events;
mod resources;
mod state;
mod systems;
mod types;

pub use events::RestartRequested;
pub use resources::{FrameSnapshot, SessionClock};
pub use state::{GameState, TickSet};
pub use types::BodyShape;

use bevy::prelude::*;

use crate::core::systems::{publish_frame_snapshot, reset_clock_on_restart};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<SessionClock>()
            .init_resource::<FrameSnapshot>()
            .add_message::<RestartRequested>()
            .configure_sets(
                Update,
                (
                    TickSet::Input,
                    TickSet::Pose,
                    TickSet::Motion,
                    TickSet::Tracking,
                    TickSet::Contact,
                    TickSet::Scoring,
                    TickSet::Publish,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(Update, reset_clock_on_restart.before(TickSet::Input))
            .add_systems(Update, publish_frame_snapshot.in_set(TickSet::Publish));
    }
}
