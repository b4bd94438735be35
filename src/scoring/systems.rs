//! Scoring domain: systems turning landings into points.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::bounce::TrampolineContact;
use crate::core::{RestartRequested, SessionClock};
use crate::scoring::engine::ScoreEngine;
use crate::scoring::events::TrickScored;

pub(crate) fn score_landings(
    mut contacts: MessageReader<TrampolineContact>,
    clock: Res<SessionClock>,
    mut engine: ResMut<ScoreEngine>,
    mut scored: MessageWriter<TrickScored>,
) {
    for contact in contacts.read() {
        let landing = &contact.landing;
        let Some(trick) = landing.trick.clone() else {
            continue;
        };

        let previous_high = engine.high_score();
        let points = engine.calculate_points(&trick, landing.landing_quality, clock.elapsed());
        engine.add_points(points);

        let novel = engine.state().last_was_novel;
        info!(
            "Scored {} for {} (quality {:.2}, combo {}, novel {}). Total: {}",
            points,
            trick,
            landing.landing_quality,
            engine.combo_count(),
            novel,
            engine.total_score()
        );
        if engine.high_score() > previous_high {
            info!("New high score: {}", engine.high_score());
        }

        scored.write(TrickScored {
            trick,
            points,
            landing_quality: landing.landing_quality,
            combo_count: engine.combo_count(),
            novel,
            total_score: engine.total_score(),
        });
    }
}

pub(crate) fn reset_score_on_restart(
    mut restarts: MessageReader<RestartRequested>,
    mut engine: ResMut<ScoreEngine>,
) {
    if restarts.read().count() > 0 {
        engine.reset_score();
    }
}
