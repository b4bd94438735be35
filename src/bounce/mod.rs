//! Bounce domain: point-mass flight, trampoline contact and relaunch.

mod events;
mod physics;
mod resources;
mod simulator;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{FellOff, TrampolineContact};
pub use physics::{
    apply_bounce, bounce_force, check_contact, clamp_dt, integrate, landing_quality,
    launch_drift, recover_trampoline, steer_rotation,
};
pub use resources::{BounceTuning, SpinTuning};
pub use simulator::{BounceSimulator, Landing};
pub use state::{CharacterState, TrampolineState};

use bevy::prelude::*;

use crate::bounce::systems::{
    advance_motion, reset_simulation_on_restart, resolve_trampoline_contact,
    sync_character_shape,
};
use crate::core::TickSet;

pub struct BouncePlugin;

impl Plugin for BouncePlugin {
    fn build(&self, app: &mut App) {
        let tuning = app
            .world()
            .get_resource::<BounceTuning>()
            .cloned()
            .unwrap_or_default();
        let spin = app
            .world()
            .get_resource::<SpinTuning>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(BounceSimulator::new(tuning.clone(), spin.clone()))
            .insert_resource(tuning)
            .insert_resource(spin)
            .add_message::<TrampolineContact>()
            .add_message::<FellOff>()
            .add_systems(Update, reset_simulation_on_restart.before(TickSet::Input))
            .add_systems(
                Update,
                (sync_character_shape, advance_motion)
                    .chain()
                    .in_set(TickSet::Motion),
            )
            .add_systems(
                Update,
                resolve_trampoline_contact.in_set(TickSet::Contact),
            );
    }
}
