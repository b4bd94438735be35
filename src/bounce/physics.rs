//! Bounce domain: explicit-Euler point-mass integration and trampoline response.
//!
//! These functions are frame-rate dependent. Callers clamp `dt` with
//! [`clamp_dt`] before integrating so a stalled frame cannot tunnel the
//! character through the trampoline bed.

use bevy::math::Vec3;

use crate::bounce::resources::{BounceTuning, SpinTuning};
use crate::bounce::state::{CharacterState, TrampolineState};
use crate::tricks::TrickDetector;

/// Clamp a frame delta into `[0, max_dt]`. Non-finite deltas become zero.
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    if !dt.is_finite() {
        return 0.0;
    }
    dt.clamp(0.0, max_dt.max(0.0))
}

/// Move the flip speed toward the player's requested spin.
///
/// Only airborne characters can steer; compact shapes reach higher speeds.
pub fn steer_rotation(character: &mut CharacterState, input: f32, spin: &SpinTuning, dt: f32) {
    if !character.airborne {
        return;
    }

    let input = input.clamp(-1.0, 1.0);
    let (target, rate) = if input.abs() > spin.input_deadzone {
        (
            input * spin.max_spin_speed * character.shape.spin_factor(),
            spin.spin_accel,
        )
    } else {
        (0.0, spin.spin_drag)
    };

    let delta = target - character.rotation_speed;
    let max_step = rate * dt;
    character.rotation_speed += delta.clamp(-max_step, max_step);
}

/// Integrate gravity, position and flip angle over `dt`.
///
/// Returns `true` on the tick the character hits the safety floor.
pub fn integrate(character: &mut CharacterState, tuning: &BounceTuning, dt: f32) -> bool {
    character.velocity.y -= tuning.gravity * dt;
    character.position += character.velocity * dt;
    character.rotation += character.rotation_speed * dt;

    if character.position.y < tuning.floor_height {
        let newly_grounded = character.airborne;
        character.position.y = tuning.floor_height;
        character.velocity = Vec3::ZERO;
        character.airborne = false;
        return newly_grounded;
    }
    false
}

/// Whether a descending character is touching the trampoline bed.
///
/// On contact the bed is compressed in proportion to descent speed.
pub fn check_contact(
    character: &CharacterState,
    trampoline: &mut TrampolineState,
    tuning: &BounceTuning,
) -> bool {
    if character.velocity.y >= 0.0 {
        return false;
    }
    if character.horizontal_distance() > tuning.trampoline_radius {
        return false;
    }

    let separation = character.position.y - trampoline.surface_height();
    if separation > tuning.contact_epsilon || separation < -tuning.contact_depth {
        return false;
    }

    let descent_speed = -character.velocity.y;
    trampoline.compress(
        descent_speed * tuning.compression_per_speed,
        tuning.max_compression,
    );
    true
}

/// How feet-first the character is, in `(0, 1]`.
///
/// `|cos(rotation)|` penalised by spin speed, floored at the minimum quality.
pub fn landing_quality(character: &CharacterState, tuning: &BounceTuning) -> f32 {
    let upright = character.rotation.cos().abs();
    let spin_penalty = character.rotation_speed.abs() * tuning.rotation_speed_influence;
    let floor = tuning.min_landing_quality.clamp(f32::EPSILON, 1.0);
    let quality = upright - spin_penalty;
    if quality.is_nan() {
        return floor;
    }
    quality.clamp(floor, 1.0)
}

/// Launch speed for a landing, interpolated between base and max force.
pub fn bounce_force(landing_quality: f32, tuning: &BounceTuning) -> f32 {
    let quality = if landing_quality.is_nan() {
        0.0
    } else {
        landing_quality.clamp(0.0, 1.0)
    };
    tuning.base_bounce_force + (tuning.max_bounce_force - tuning.base_bounce_force) * quality
}

/// Sideways launch speed for a bounce.
///
/// A tilted body pushes off the bed at an angle, and leaning adds to it.
/// `lean` is clamped to `[-1, 1]`.
pub fn launch_drift(
    character: &CharacterState,
    force: f32,
    lean: f32,
    tuning: &BounceTuning,
) -> f32 {
    let lean = if lean.is_nan() { 0.0 } else { lean.clamp(-1.0, 1.0) };
    let tilt = character.rotation.sin();
    force * (tilt * tuning.landing_drift + lean * tuning.lean_drift)
}

/// Relaunch the character and clear rotation tracking.
///
/// `drift` replaces the horizontal speed along x; depth speed is dropped.
pub fn apply_bounce(
    character: &mut CharacterState,
    force: f32,
    drift: f32,
    detector: &mut TrickDetector,
) {
    character.velocity = Vec3::new(drift, force, 0.0);
    character.airborne = true;
    detector.bounce();
}

/// One recovery step of the trampoline bed.
pub fn recover_trampoline(trampoline: &mut TrampolineState, tuning: &BounceTuning) {
    trampoline.recover(tuning.compression_damping, tuning.compression_snap);
}
