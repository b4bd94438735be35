//! Range checks for tuning values loaded from RON.

use super::data::{GameTuning, TUNING_SCHEMA_VERSION};

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Helper macro for checking a value against a condition
macro_rules! check {
    ($errors:expr, $section:expr, $field:expr, $ok:expr, $($msg:tt)+) => {
        if !$ok {
            $errors.push(ValidationError {
                section: $section,
                field: $field,
                message: format!($($msg)+),
            });
        }
    };
}

/// Validate every tuning section.
/// Returns a list of validation errors, empty if all values are usable.
pub fn validate_tuning(tuning: &GameTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check!(
        errors,
        "tuning",
        "schema_version",
        tuning.schema_version == TUNING_SCHEMA_VERSION,
        "expected {}, found {}",
        TUNING_SCHEMA_VERSION,
        tuning.schema_version
    );

    // Bounce
    let b = &tuning.bounce;
    check!(errors, "bounce", "gravity", b.gravity > 0.0, "must be positive, got {}", b.gravity);
    check!(
        errors,
        "bounce",
        "start_height",
        b.start_height > b.trampoline_rest_height,
        "must be above the trampoline ({} <= {})",
        b.start_height,
        b.trampoline_rest_height
    );
    check!(
        errors,
        "bounce",
        "trampoline_radius",
        b.trampoline_radius > 0.0,
        "must be positive, got {}",
        b.trampoline_radius
    );
    check!(
        errors,
        "bounce",
        "contact_epsilon",
        b.contact_epsilon >= 0.0,
        "must not be negative, got {}",
        b.contact_epsilon
    );
    check!(
        errors,
        "bounce",
        "contact_depth",
        b.contact_depth > 0.0,
        "must be positive, got {}",
        b.contact_depth
    );
    // One clamped step at full launch speed must stay inside the contact band
    let max_step = b.max_dt * (b.max_bounce_force + b.gravity * b.max_dt);
    check!(
        errors,
        "bounce",
        "contact_depth",
        b.contact_depth >= max_step,
        "must cover one max_dt step at max_bounce_force ({} < {})",
        b.contact_depth,
        max_step
    );
    check!(
        errors,
        "bounce",
        "floor_height",
        b.floor_height <= b.trampoline_rest_height - b.contact_depth,
        "must sit below the contact band ({} > {})",
        b.floor_height,
        b.trampoline_rest_height - b.contact_depth
    );
    check!(
        errors,
        "bounce",
        "max_compression",
        b.max_compression >= 0.0,
        "must not be negative, got {}",
        b.max_compression
    );
    check!(
        errors,
        "bounce",
        "compression_damping",
        b.compression_damping > 0.0 && b.compression_damping < 1.0,
        "must be in (0, 1), got {}",
        b.compression_damping
    );
    check!(
        errors,
        "bounce",
        "compression_snap",
        b.compression_snap > 0.0,
        "must be positive, got {}",
        b.compression_snap
    );
    check!(
        errors,
        "bounce",
        "max_bounce_force",
        b.base_bounce_force > 0.0 && b.base_bounce_force < b.max_bounce_force,
        "must exceed base_bounce_force ({} >= {})",
        b.base_bounce_force,
        b.max_bounce_force
    );
    check!(
        errors,
        "bounce",
        "min_landing_quality",
        b.min_landing_quality > 0.0 && b.min_landing_quality <= 1.0,
        "must be in (0, 1], got {}",
        b.min_landing_quality
    );
    check!(
        errors,
        "bounce",
        "rotation_speed_influence",
        b.rotation_speed_influence >= 0.0,
        "must not be negative, got {}",
        b.rotation_speed_influence
    );
    check!(errors, "bounce", "max_dt", b.max_dt > 0.0, "must be positive, got {}", b.max_dt);
    check!(
        errors,
        "bounce",
        "landing_drift",
        b.landing_drift >= 0.0,
        "must not be negative, got {}",
        b.landing_drift
    );
    check!(
        errors,
        "bounce",
        "lean_drift",
        b.lean_drift >= 0.0,
        "must not be negative, got {}",
        b.lean_drift
    );

    // Spin
    let s = &tuning.spin;
    check!(
        errors,
        "spin",
        "max_spin_speed",
        s.max_spin_speed > 0.0,
        "must be positive, got {}",
        s.max_spin_speed
    );
    check!(errors, "spin", "spin_accel", s.spin_accel > 0.0, "must be positive, got {}", s.spin_accel);
    check!(
        errors,
        "spin",
        "spin_drag",
        s.spin_drag >= 0.0,
        "must not be negative, got {}",
        s.spin_drag
    );
    check!(
        errors,
        "spin",
        "input_deadzone",
        (0.0..1.0).contains(&s.input_deadzone),
        "must be in [0, 1), got {}",
        s.input_deadzone
    );

    // Shape
    let sh = &tuning.shape;
    check!(
        errors,
        "shape",
        "simplify_tolerance",
        sh.simplify_tolerance > 0.0,
        "must be positive, got {}",
        sh.simplify_tolerance
    );
    check!(
        errors,
        "shape",
        "torso_radius",
        sh.torso_radius > 0.0,
        "must be positive, got {}",
        sh.torso_radius
    );
    check!(
        errors,
        "shape",
        "segments_per_limb",
        sh.segments_per_limb >= 1,
        "must be at least 1, got {}",
        sh.segments_per_limb
    );
    check!(
        errors,
        "shape",
        "limb_base_radius",
        sh.limb_base_radius > 0.0,
        "must be positive, got {}",
        sh.limb_base_radius
    );
    check!(
        errors,
        "shape",
        "limb_taper",
        (0.0..1.0).contains(&sh.limb_taper),
        "must be in [0, 1), got {}",
        sh.limb_taper
    );
    check!(
        errors,
        "shape",
        "default_arm_length",
        sh.default_arm_length > 0.0 && sh.default_leg_length > 0.0,
        "limb lengths must be positive ({}, {})",
        sh.default_arm_length,
        sh.default_leg_length
    );
    check!(
        errors,
        "shape",
        "draw_scale",
        sh.draw_scale > 0.0,
        "must be positive, got {}",
        sh.draw_scale
    );

    // Score
    let sc = &tuning.score;
    check!(
        errors,
        "score",
        "combo_window_secs",
        sc.combo_window_secs > 0.0,
        "must be positive, got {}",
        sc.combo_window_secs
    );
    check!(
        errors,
        "score",
        "combo_multiplier",
        sc.combo_multiplier >= 1.0,
        "must be at least 1, got {}",
        sc.combo_multiplier
    );
    check!(
        errors,
        "score",
        "novelty_bonus",
        sc.novelty_bonus > 1.0,
        "must exceed 1, got {}",
        sc.novelty_bonus
    );
    check!(
        errors,
        "score",
        "min_landing_factor",
        sc.min_landing_factor > 0.0 && sc.min_landing_factor <= 1.0,
        "must be in (0, 1], got {}",
        sc.min_landing_factor
    );
    check!(
        errors,
        "score",
        "high_score_key",
        !sc.high_score_key.trim().is_empty(),
        "must not be empty"
    );

    errors
}
