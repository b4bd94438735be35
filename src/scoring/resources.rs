//! Scoring domain: tuning resource.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::scoring::store::HIGH_SCORE_KEY;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoreTuning {
    /// Seconds within which a different trick extends the combo
    pub combo_window_secs: f32,
    pub combo_multiplier: f32,
    /// Cap on the combo exponent
    pub max_combo_exponent: u32,
    /// One-time multiplier for a new trick/shape pairing
    pub novelty_bonus: f32,
    /// Landing quality factor never drops below this
    pub min_landing_factor: f32,
    pub high_score_key: String,
}

impl Default for ScoreTuning {
    fn default() -> Self {
        Self {
            combo_window_secs: 5.0,
            combo_multiplier: 1.5,
            max_combo_exponent: 3,
            novelty_bonus: 1.5,
            min_landing_factor: 0.1,
            high_score_key: HIGH_SCORE_KEY.to_string(),
        }
    }
}
