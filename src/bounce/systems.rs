//! Bounce domain: per-tick simulation systems.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::bounce::events::{FellOff, TrampolineContact};
use crate::bounce::simulator::BounceSimulator;
use crate::core::{RestartRequested, SessionClock};
use crate::input::PlayerInput;
use crate::shape::ShapeChanged;
use crate::tricks::TrickDetector;

pub(crate) fn sync_character_shape(
    mut changes: MessageReader<ShapeChanged>,
    mut simulator: ResMut<BounceSimulator>,
) {
    for change in changes.read() {
        simulator.set_shape(change.shape);
    }
}

pub(crate) fn advance_motion(
    time: Res<Time>,
    input: Res<PlayerInput>,
    mut simulator: ResMut<BounceSimulator>,
    mut clock: ResMut<SessionClock>,
    mut fell_off: MessageWriter<FellOff>,
) {
    let dt = simulator.clamp_dt(time.delta_secs());
    clock.advance(dt);

    simulator.set_lean(input.rotation.y);
    if simulator.step(input.rotation.x, dt) {
        let position = simulator.character().position;
        warn!(
            "Character missed the trampoline at x={:.2}, z={:.2}",
            position.x, position.z
        );
        fell_off.write(FellOff);
    }
}

pub(crate) fn resolve_trampoline_contact(
    mut simulator: ResMut<BounceSimulator>,
    mut detector: ResMut<TrickDetector>,
    mut contacts: MessageWriter<TrampolineContact>,
) {
    if let Some(landing) = simulator.resolve_contact(&mut detector) {
        contacts.write(TrampolineContact { landing });
    }
}

pub(crate) fn reset_simulation_on_restart(
    mut restarts: MessageReader<RestartRequested>,
    mut simulator: ResMut<BounceSimulator>,
) {
    if restarts.read().count() > 0 {
        simulator.reset();
    }
}
