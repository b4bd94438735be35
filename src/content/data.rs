//! Data definitions for the tuning RON file.
//!
//! `GameTuning` mirrors assets/data/tuning.ron. Every section is optional in
//! the file and falls back to its defaults.

use serde::{Deserialize, Serialize};

use crate::bounce::{BounceTuning, SpinTuning};
use crate::input::InputTuning;
use crate::scoring::ScoreTuning;
use crate::shape::ShapeTuning;

/// Schema version this build understands.
pub const TUNING_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameTuning {
    pub schema_version: u32,
    pub bounce: BounceTuning,
    pub spin: SpinTuning,
    pub shape: ShapeTuning,
    pub score: ScoreTuning,
    pub input: InputTuning,
}

impl Default for GameTuning {
    fn default() -> Self {
        Self {
            schema_version: TUNING_SCHEMA_VERSION,
            bounce: BounceTuning::default(),
            spin: SpinTuning::default(),
            shape: ShapeTuning::default(),
            score: ScoreTuning::default(),
            input: InputTuning::default(),
        }
    }
}
