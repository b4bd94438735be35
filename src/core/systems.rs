//! Core domain: session flow systems.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::bounce::BounceSimulator;
use crate::core::events::RestartRequested;
use crate::core::resources::{FrameSnapshot, SessionClock};
use crate::core::state::GameState;
use crate::scoring::ScoreEngine;
use crate::tricks::TrickDetector;

pub(crate) fn reset_clock_on_restart(
    mut restarts: MessageReader<RestartRequested>,
    mut clock: ResMut<SessionClock>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if restarts.read().count() == 0 {
        return;
    }
    clock.reset();
    next_state.set(GameState::Playing);
    info!("Session restarted");
}

pub(crate) fn publish_frame_snapshot(
    simulator: Res<BounceSimulator>,
    detector: Res<TrickDetector>,
    engine: Res<ScoreEngine>,
    mut snapshot: ResMut<FrameSnapshot>,
) {
    let character = simulator.character();
    let trampoline = simulator.trampoline();

    *snapshot = FrameSnapshot {
        position: character.position,
        rotation: character.rotation,
        shape: character.shape,
        airborne: character.airborne,
        trampoline_rest_height: trampoline.rest_height(),
        trampoline_radius: simulator.tuning().trampoline_radius,
        trampoline_compression: trampoline.compression(),
        current_trick: detector.current_trick().cloned(),
        total_score: engine.total_score(),
        high_score: engine.high_score(),
        combo_count: engine.combo_count(),
    };
}
