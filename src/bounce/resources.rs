//! Bounce domain: tuning resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Point-mass and trampoline tuning, in metres and seconds.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BounceTuning {
    pub gravity: f32,
    /// Height the character is dropped from at session start
    pub start_height: f32,
    pub trampoline_rest_height: f32,
    pub trampoline_radius: f32,
    /// Contact band above the trampoline surface
    pub contact_epsilon: f32,
    /// Contact band below the trampoline surface; covers one clamped step at bounce speed
    pub contact_depth: f32,
    /// Safety floor for a character that misses the trampoline
    pub floor_height: f32,
    /// Compression per m/s of descent speed
    pub compression_per_speed: f32,
    pub max_compression: f32,
    /// Fraction of compression kept per tick while recovering
    pub compression_damping: f32,
    /// Below this the compression snaps to zero
    pub compression_snap: f32,
    pub base_bounce_force: f32,
    pub max_bounce_force: f32,
    pub min_landing_quality: f32,
    /// Landing quality lost per rad/s of spin at contact
    pub rotation_speed_influence: f32,
    /// Largest tick delta the integrator accepts
    pub max_dt: f32,
    /// Sideways launch speed per unit of bounce force at a 90° tilt
    pub landing_drift: f32,
    /// Sideways launch speed per unit of bounce force at full lean
    pub lean_drift: f32,
}

impl Default for BounceTuning {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            start_height: 4.0,
            trampoline_rest_height: 0.5,
            trampoline_radius: 2.0,
            contact_epsilon: 0.05,
            contact_depth: 1.5,
            floor_height: -1.5,
            compression_per_speed: 0.05,
            max_compression: 0.6,
            compression_damping: 0.85,
            compression_snap: 0.001,
            base_bounce_force: 8.0,
            max_bounce_force: 13.0,
            min_landing_quality: 0.1,
            rotation_speed_influence: 0.05,
            max_dt: 0.1,
            landing_drift: 0.1,
            lean_drift: 0.05,
        }
    }
}

impl BounceTuning {
    /// Apex height reached from the trampoline surface for a given launch speed.
    /// Uses h = v² / (2g).
    pub fn apex_height(&self, launch_speed: f32) -> f32 {
        if self.gravity <= 0.0 {
            return 0.0;
        }
        launch_speed * launch_speed / (2.0 * self.gravity)
    }

    /// Time spent in the air for a given launch speed: t = 2v / g.
    pub fn airtime(&self, launch_speed: f32) -> f32 {
        if self.gravity <= 0.0 {
            return 0.0;
        }
        2.0 * launch_speed / self.gravity
    }
}

/// In-air rotation control.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpinTuning {
    /// Spin speed at full input in the straight shape, rad/s
    pub max_spin_speed: f32,
    /// Angular acceleration toward the input target, rad/s²
    pub spin_accel: f32,
    /// Angular deceleration without input, rad/s²
    pub spin_drag: f32,
    /// Inputs below this magnitude count as released
    pub input_deadzone: f32,
}

impl Default for SpinTuning {
    fn default() -> Self {
        Self {
            max_spin_speed: 9.0,
            spin_accel: 30.0,
            spin_drag: 6.0,
            input_deadzone: 0.1,
        }
    }
}
