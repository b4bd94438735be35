//! Input domain: sampled input and tuning resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Input sampled this tick.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct PlayerInput {
    /// x steers rotation (positive spins forward), y leans the next takeoff
    pub rotation: Vec2,
}

#[derive(Resource, Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InputTuning {
    /// Start the session in freeform drawing mode
    pub drawing_starts_enabled: bool,
    /// Flip the rotation axis
    pub invert_spin: bool,
}

