//! Scoring domain: trick points, combos, novelty and the high score.

use bevy::prelude::*;
use std::collections::HashSet;

use crate::core::BodyShape;
use crate::scoring::resources::ScoreTuning;
use crate::scoring::store::{KeyValueStore, MemoryStore, read_high_score, write_high_score};
use crate::tricks::{Trick, TrickKind};

/// Base points per completed rotation of each trick.
pub fn base_points(kind: TrickKind) -> u32 {
    match kind {
        TrickKind::HalfFlip => 50,
        TrickKind::Flip => 100,
        TrickKind::TuckFlip => 120,
        TrickKind::PikeFlip => 140,
        TrickKind::StraddleFlip => 160,
        TrickKind::CustomFlip => 180,
    }
}

/// Round to the nearest multiple of ten, never below zero.
fn round_to_ten(points: f32) -> u32 {
    if !points.is_finite() || points <= 0.0 {
        return 0;
    }
    ((points / 10.0).round() * 10.0) as u32
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreState {
    pub total_score: u32,
    /// Only ever ratchets up
    pub high_score: u32,
    pub combo_count: u32,
    pub last_trick_time: Option<f64>,
    pub last_trick_kind: Option<TrickKind>,
    /// Whether the last scored trick earned the novelty bonus
    pub last_was_novel: bool,
    performed: HashSet<(TrickKind, BodyShape)>,
}

impl ScoreState {
    pub fn has_performed(&self, kind: TrickKind, shape: BodyShape) -> bool {
        self.performed.contains(&(kind, shape))
    }

    pub fn performed_count(&self) -> usize {
        self.performed.len()
    }
}

/// Owns the score state. The high score is loaded from and persisted to the
/// injected key-value store.
#[derive(Resource, Debug)]
pub struct ScoreEngine {
    tuning: ScoreTuning,
    state: ScoreState,
    store: Box<dyn KeyValueStore>,
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new(ScoreTuning::default(), Box::new(MemoryStore::default()))
    }
}

impl ScoreEngine {
    pub fn new(tuning: ScoreTuning, store: Box<dyn KeyValueStore>) -> Self {
        let high_score = read_high_score(store.as_ref(), &tuning.high_score_key);
        Self {
            tuning,
            state: ScoreState {
                high_score,
                ..default()
            },
            store,
        }
    }

    pub fn state(&self) -> &ScoreState {
        &self.state
    }

    pub fn total_score(&self) -> u32 {
        self.state.total_score
    }

    pub fn high_score(&self) -> u32 {
        self.state.high_score
    }

    pub fn combo_count(&self) -> u32 {
        self.state.combo_count
    }

    /// Points for `trick` landed with `landing_quality` at session time `now`.
    ///
    /// Updates novelty and combo bookkeeping but not the total; pass the
    /// result to [`ScoreEngine::add_points`].
    pub fn calculate_points(&mut self, trick: &Trick, landing_quality: f32, now: f64) -> u32 {
        let base = base_points(trick.kind) * trick.rotation_count();
        let mut points = base as f32 * trick.difficulty_multiplier;

        let landing_factor = if landing_quality.is_nan() {
            self.tuning.min_landing_factor
        } else {
            landing_quality.max(self.tuning.min_landing_factor)
        };
        points *= landing_factor;

        self.state.last_was_novel = self.state.performed.insert((trick.kind, trick.shape));
        if self.state.last_was_novel {
            points *= self.tuning.novelty_bonus;
        }

        let within_window = self
            .state
            .last_trick_time
            .is_some_and(|last| now - last <= f64::from(self.tuning.combo_window_secs));
        let different_trick = self
            .state
            .last_trick_kind
            .is_some_and(|last| last != trick.kind);

        if within_window && different_trick {
            self.state.combo_count += 1;
            let exponent = self.state.combo_count.min(self.tuning.max_combo_exponent) as i32;
            points *= self.tuning.combo_multiplier.powi(exponent);
        } else {
            self.state.combo_count = 0;
        }
        self.state.last_trick_time = Some(now);
        self.state.last_trick_kind = Some(trick.kind);

        round_to_ten(points)
    }

    /// Add to the total, ratcheting and persisting the high score when beaten.
    pub fn add_points(&mut self, points: u32) {
        self.state.total_score = self.state.total_score.saturating_add(points);
        if self.state.total_score <= self.state.high_score {
            return;
        }

        self.state.high_score = self.state.total_score;
        match write_high_score(
            self.store.as_mut(),
            &self.tuning.high_score_key,
            self.state.high_score,
        ) {
            Ok(()) => debug!("New high score persisted: {}", self.state.high_score),
            Err(e) => error!("{}", e),
        }
    }

    /// Clear the session score. The high score is kept.
    pub fn reset_score(&mut self) {
        self.state = ScoreState {
            high_score: self.state.high_score,
            ..default()
        };
    }
}
