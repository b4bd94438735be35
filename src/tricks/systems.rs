//! Tricks domain: rotation tracking systems.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::bounce::BounceSimulator;
use crate::core::RestartRequested;
use crate::tricks::detector::TrickDetector;
use crate::tricks::events::TrickDetected;

pub(crate) fn track_rotation(
    simulator: Res<BounceSimulator>,
    mut detector: ResMut<TrickDetector>,
    mut detected: MessageWriter<TrickDetected>,
) {
    let character = simulator.character();
    if let Some(trick) = detector.track(character.rotation, character.shape, character.airborne) {
        detected.write(TrickDetected { trick });
    }
}

pub(crate) fn reset_detector_on_restart(
    mut restarts: MessageReader<RestartRequested>,
    mut detector: ResMut<TrickDetector>,
) {
    if restarts.read().count() > 0 {
        detector.reset();
    }
}
