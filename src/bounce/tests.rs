//! Bounce domain: tests for integration, contact, landing quality and recovery.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f32::consts::{FRAC_PI_2, PI};

use super::{
    BounceSimulator, BounceTuning, CharacterState, SpinTuning, TrampolineState, apply_bounce,
    bounce_force, check_contact, clamp_dt, integrate, landing_quality, launch_drift,
    recover_trampoline, steer_rotation,
};
use crate::core::BodyShape;
use crate::tricks::TrickDetector;

fn descending_at(height: f32, speed: f32) -> CharacterState {
    let mut character = CharacterState::spawn(height);
    character.velocity.y = -speed;
    character
}

// -----------------------------------------------------------------------------
// Integration tests
// -----------------------------------------------------------------------------

#[test]
fn test_integrate_applies_gravity_and_velocity() {
    let tuning = BounceTuning::default();
    let mut character = CharacterState::spawn(4.0);
    character.velocity = Vec3::new(1.0, 0.0, -2.0);
    character.rotation_speed = 2.0;

    let fell = integrate(&mut character, &tuning, 0.1);

    assert!(!fell);
    assert!((character.velocity.y + tuning.gravity * 0.1).abs() < 1e-5);
    assert!((character.position.x - 0.1).abs() < 1e-6);
    assert!((character.position.z + 0.2).abs() < 1e-6);
    assert!(character.position.y < 4.0);
    assert!((character.rotation - 0.2).abs() < 1e-6);
}

#[test]
fn test_integrate_safety_floor() {
    let tuning = BounceTuning::default();
    let mut character = descending_at(tuning.floor_height + 0.1, 5.0);
    character.velocity.x = 2.0;

    assert!(integrate(&mut character, &tuning, 0.1));
    assert_eq!(character.position.y, tuning.floor_height);
    assert_eq!(character.velocity, Vec3::ZERO);
    assert!(!character.airborne);

    // Already grounded: no second report
    assert!(!integrate(&mut character, &tuning, 0.1));
    assert_eq!(character.position.y, tuning.floor_height);
}

#[test]
fn test_clamp_dt() {
    assert_eq!(clamp_dt(0.016, 0.1), 0.016);
    assert_eq!(clamp_dt(3.0, 0.1), 0.1);
    assert_eq!(clamp_dt(-1.0, 0.1), 0.0);
    assert_eq!(clamp_dt(f32::NAN, 0.1), 0.0);
}

// -----------------------------------------------------------------------------
// Steering tests
// -----------------------------------------------------------------------------

#[test]
fn test_steering_accelerates_toward_target() {
    let spin = SpinTuning::default();
    let mut character = CharacterState::spawn(3.0);

    steer_rotation(&mut character, 1.0, &spin, 0.1);
    assert!((character.rotation_speed - spin.spin_accel * 0.1).abs() < 1e-5);

    for _ in 0..100 {
        steer_rotation(&mut character, 1.0, &spin, 0.1);
    }
    assert!((character.rotation_speed - spin.max_spin_speed).abs() < 1e-4);
}

#[test]
fn test_compact_shapes_spin_faster() {
    let spin = SpinTuning::default();
    let mut straight = CharacterState::spawn(3.0);
    let mut tuck = CharacterState::spawn(3.0);
    tuck.shape = BodyShape::Tuck;

    for _ in 0..100 {
        steer_rotation(&mut straight, -1.0, &spin, 0.1);
        steer_rotation(&mut tuck, -1.0, &spin, 0.1);
    }
    assert!(tuck.rotation_speed < straight.rotation_speed);
    assert!(straight.rotation_speed < 0.0);
}

#[test]
fn test_released_input_decays_spin() {
    let spin = SpinTuning::default();
    let mut character = CharacterState::spawn(3.0);
    character.rotation_speed = 1.0;

    steer_rotation(&mut character, 0.05, &spin, 0.1);
    assert!((character.rotation_speed - (1.0 - spin.spin_drag * 0.1)).abs() < 1e-5);

    for _ in 0..10 {
        steer_rotation(&mut character, 0.0, &spin, 0.1);
    }
    assert_eq!(character.rotation_speed, 0.0);
}

#[test]
fn test_grounded_character_cannot_steer() {
    let spin = SpinTuning::default();
    let mut character = CharacterState::spawn(3.0);
    character.airborne = false;
    steer_rotation(&mut character, 1.0, &spin, 0.1);
    assert_eq!(character.rotation_speed, 0.0);
}

// -----------------------------------------------------------------------------
// Contact tests
// -----------------------------------------------------------------------------

#[test]
fn test_contact_requires_descent() {
    let tuning = BounceTuning::default();
    let mut trampoline = TrampolineState::new(tuning.trampoline_rest_height);
    let mut character = CharacterState::spawn(tuning.trampoline_rest_height);
    character.velocity.y = 3.0;

    assert!(!check_contact(&character, &mut trampoline, &tuning));
    assert_eq!(trampoline.compression(), 0.0);
}

#[test]
fn test_contact_requires_horizontal_overlap() {
    let tuning = BounceTuning::default();
    let mut trampoline = TrampolineState::new(tuning.trampoline_rest_height);
    let mut character = descending_at(tuning.trampoline_rest_height, 5.0);
    character.position.x = tuning.trampoline_radius * 0.8;
    character.position.z = tuning.trampoline_radius * 0.8;

    assert!(!check_contact(&character, &mut trampoline, &tuning));
}

#[test]
fn test_contact_band() {
    let tuning = BounceTuning::default();
    let surface = tuning.trampoline_rest_height;

    for (height, expected) in [
        (surface + tuning.contact_epsilon * 2.0, false),
        (surface + tuning.contact_epsilon * 0.5, true),
        (surface - tuning.contact_depth * 0.5, true),
        (surface - tuning.contact_depth * 2.0, false),
    ] {
        let mut trampoline = TrampolineState::new(surface);
        let character = descending_at(height, 5.0);
        assert_eq!(
            check_contact(&character, &mut trampoline, &tuning),
            expected,
            "height {height}"
        );
    }
}

#[test]
fn test_contact_compression_scales_and_caps() {
    let tuning = BounceTuning::default();
    let surface = tuning.trampoline_rest_height;

    let mut trampoline = TrampolineState::new(surface);
    assert!(check_contact(&descending_at(surface, 4.0), &mut trampoline, &tuning));
    assert!((trampoline.compression() - 4.0 * tuning.compression_per_speed).abs() < 1e-6);
    assert!(trampoline.is_recovering());

    let mut trampoline = TrampolineState::new(surface);
    assert!(check_contact(&descending_at(surface, 500.0), &mut trampoline, &tuning));
    assert_eq!(trampoline.compression(), tuning.max_compression);
}

// -----------------------------------------------------------------------------
// Landing quality and bounce force tests
// -----------------------------------------------------------------------------

#[test]
fn test_landing_quality_upright_is_one() {
    let tuning = BounceTuning::default();
    let character = CharacterState::spawn(0.0);
    assert_eq!(landing_quality(&character, &tuning), 1.0);

    let mut flipped = CharacterState::spawn(0.0);
    flipped.rotation = 2.0 * PI;
    assert!((landing_quality(&flipped, &tuning) - 1.0).abs() < 1e-5);
}

#[test]
fn test_landing_quality_sideways_hits_floor() {
    let tuning = BounceTuning::default();
    let mut character = CharacterState::spawn(0.0);
    character.rotation = FRAC_PI_2;
    assert_eq!(landing_quality(&character, &tuning), tuning.min_landing_quality);
}

#[test]
fn test_landing_quality_penalises_spin() {
    let tuning = BounceTuning::default();
    let mut character = CharacterState::spawn(0.0);
    character.rotation_speed = -4.0;
    let expected = 1.0 - 4.0 * tuning.rotation_speed_influence;
    assert!((landing_quality(&character, &tuning) - expected).abs() < 1e-6);
}

#[test]
fn test_landing_quality_always_in_unit_interval() {
    let tuning = BounceTuning::default();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..1000 {
        let mut character = CharacterState::spawn(0.0);
        character.rotation = rng.random_range(-100.0..100.0);
        character.rotation_speed = rng.random_range(-50.0..50.0);
        let quality = landing_quality(&character, &tuning);
        assert!(quality > 0.0 && quality <= 1.0, "quality {quality}");
    }
}

#[test]
fn test_bounce_force_endpoints() {
    let tuning = BounceTuning::default();
    assert_eq!(bounce_force(1.0, &tuning), tuning.max_bounce_force);

    let expected =
        tuning.base_bounce_force + (tuning.max_bounce_force - tuning.base_bounce_force) * 0.1;
    assert!((bounce_force(0.1, &tuning) - expected).abs() < 1e-6);
}

#[test]
fn test_bounce_force_monotonic_and_bounded() {
    let tuning = BounceTuning::default();
    let mut previous = bounce_force(0.0, &tuning);
    for i in 1..=100 {
        let force = bounce_force(i as f32 / 100.0, &tuning);
        assert!(force >= previous);
        assert!(force >= tuning.base_bounce_force && force <= tuning.max_bounce_force);
        previous = force;
    }
    assert_eq!(bounce_force(5.0, &tuning), tuning.max_bounce_force);
    assert_eq!(bounce_force(-5.0, &tuning), tuning.base_bounce_force);
}

#[test]
fn test_apply_bounce_relaunches_and_clears_tricks() {
    let mut detector = TrickDetector::default();
    detector.track(0.0, BodyShape::Straight, true);
    detector.track(4.0, BodyShape::Straight, true);
    assert!(detector.current_trick().is_some());

    let mut character = descending_at(0.5, 6.0);
    character.airborne = false;
    character.velocity.z = 1.0;
    apply_bounce(&mut character, 11.0, -0.5, &mut detector);

    assert_eq!(character.velocity, Vec3::new(-0.5, 11.0, 0.0));
    assert!(character.airborne);
    assert!(detector.current_trick().is_none());
    assert_eq!(detector.rotation_total(), 0.0);
}

#[test]
fn test_launch_drift_follows_tilt_and_lean() {
    let tuning = BounceTuning::default();
    let upright = CharacterState::spawn(0.0);
    assert_eq!(launch_drift(&upright, 10.0, 0.0, &tuning), 0.0);

    let mut tilted = CharacterState::spawn(0.0);
    tilted.rotation = FRAC_PI_2;
    let expected = 10.0 * tuning.landing_drift;
    assert!((launch_drift(&tilted, 10.0, 0.0, &tuning) - expected).abs() < 1e-5);
    tilted.rotation = -FRAC_PI_2;
    assert!((launch_drift(&tilted, 10.0, 0.0, &tuning) + expected).abs() < 1e-5);

    // Lean is clamped to full
    let full = launch_drift(&upright, 10.0, 1.0, &tuning);
    assert!((full - 10.0 * tuning.lean_drift).abs() < 1e-6);
    assert_eq!(launch_drift(&upright, 10.0, 7.0, &tuning), full);
    assert_eq!(launch_drift(&upright, 10.0, f32::NAN, &tuning), 0.0);
}

// -----------------------------------------------------------------------------
// Trampoline recovery tests
// -----------------------------------------------------------------------------

#[test]
fn test_compression_decays_to_exactly_zero() {
    let tuning = BounceTuning::default();
    let bound = ((tuning.compression_snap / tuning.max_compression).ln()
        / tuning.compression_damping.ln())
    .ceil() as usize
        + 1;

    let mut rng = ChaCha8Rng::seed_from_u64(9);
    for _ in 0..100 {
        let mut trampoline = TrampolineState::new(tuning.trampoline_rest_height);
        trampoline.compress(
            rng.random_range(0.0..=tuning.max_compression),
            tuning.max_compression,
        );

        let mut previous = trampoline.compression();
        let mut ticks = 0;
        while trampoline.is_recovering() {
            recover_trampoline(&mut trampoline, &tuning);
            assert!(trampoline.compression() >= 0.0);
            assert!(trampoline.compression() <= previous);
            previous = trampoline.compression();
            ticks += 1;
            assert!(ticks <= bound, "did not converge within {bound} ticks");
        }
        assert_eq!(trampoline.compression(), 0.0);
    }
}

#[test]
fn test_compress_never_negative() {
    let mut trampoline = TrampolineState::new(0.5);
    trampoline.compress(-1.0, 0.6);
    assert_eq!(trampoline.compression(), 0.0);
    assert!(!trampoline.is_recovering());

    trampoline.compress(f32::NAN, 0.6);
    assert_eq!(trampoline.compression(), 0.6);
    assert_eq!(trampoline.surface_height(), 0.5 - 0.6);
}

// -----------------------------------------------------------------------------
// Simulator tests
// -----------------------------------------------------------------------------

#[test]
fn test_dropped_character_bounces() {
    let mut simulator = BounceSimulator::default();
    let mut detector = TrickDetector::default();

    let mut landing = None;
    for _ in 0..600 {
        simulator.step(0.0, 1.0 / 60.0);
        if let Some(contact) = simulator.resolve_contact(&mut detector) {
            landing = Some(contact);
            break;
        }
    }

    let landing = landing.expect("character reaches the trampoline");
    assert_eq!(landing.landing_quality, 1.0);
    assert_eq!(landing.bounce_force, simulator.tuning().max_bounce_force);
    assert!(landing.descent_speed > 0.0);
    assert!(landing.trick.is_none());
    assert_eq!(simulator.character().velocity.y, landing.bounce_force);
    assert!(simulator.trampoline().compression() > 0.0);
}

#[test]
fn test_stalled_frames_do_not_tunnel() {
    let mut simulator = BounceSimulator::default();
    let mut detector = TrickDetector::default();
    let mut contacts = 0;

    // Every frame stalls for a full second; the clamp keeps steps small
    for _ in 0..300 {
        assert!(!simulator.step(0.0, 1.0));
        if simulator.resolve_contact(&mut detector).is_some() {
            contacts += 1;
        }
    }

    assert!(contacts >= 5);
    assert!(simulator.character().airborne);
    assert!(simulator.character().position.y > simulator.tuning().floor_height);
}

#[test]
fn test_spinning_flight_reports_trick_at_contact() {
    let mut simulator = BounceSimulator::default();
    let mut detector = TrickDetector::default();
    simulator.set_shape(BodyShape::Tuck);

    // First contact from the initial drop launches at full force
    let mut launched = false;
    let mut landing = None;
    for _ in 0..2000 {
        let spin = if launched { 1.0 } else { 0.0 };
        simulator.step(spin, 1.0 / 120.0);
        let character = simulator.character().clone();
        detector.track(character.rotation, character.shape, character.airborne);
        if let Some(contact) = simulator.resolve_contact(&mut detector) {
            if launched {
                landing = Some(contact);
                break;
            }
            launched = true;
        }
    }

    let landing = landing.expect("second contact happens");
    let trick = landing.trick.expect("a full airtime of tuck spin completes a trick");
    assert_eq!(trick.shape, BodyShape::Tuck);
    assert!(trick.rotation_degrees >= 360);
    assert!(detector.current_trick().is_none());
}

/// Runs the tick loop until the character lands on the safety floor.
/// Returns the number of trampoline contacts before the fall, if it fell.
fn run_until_fall(simulator: &mut BounceSimulator, spin: f32, dt: f32) -> Option<u32> {
    let mut detector = TrickDetector::default();
    let mut contacts = 0;
    for _ in 0..20_000 {
        if simulator.step(spin, dt) {
            return Some(contacts);
        }
        let character = simulator.character().clone();
        detector.track(character.rotation, character.shape, character.airborne);
        if simulator.resolve_contact(&mut detector).is_some() {
            contacts += 1;
        }
    }
    None
}

#[test]
fn test_leaning_takeoffs_carry_character_off_trampoline() {
    let mut simulator = BounceSimulator::default();
    simulator.set_lean(1.0);

    let contacts = run_until_fall(&mut simulator, 0.0, 1.0 / 60.0).expect("character falls off");
    assert!(contacts >= 1);

    let character = simulator.character();
    assert!(character.horizontal_distance() > simulator.tuning().trampoline_radius);
    assert_eq!(character.position.y, simulator.tuning().floor_height);
    assert!(!character.airborne);
}

#[test]
fn test_tilted_landings_drift_off_trampoline() {
    let mut simulator = BounceSimulator::default();
    assert!(run_until_fall(&mut simulator, 1.0, 1.0 / 60.0).is_some());
    assert!(simulator.character().horizontal_distance() > simulator.tuning().trampoline_radius);
}

#[test]
fn test_upright_bouncing_stays_centred() {
    let mut simulator = BounceSimulator::default();
    for dt in [1.0 / 144.0, 1.0 / 60.0, 0.1] {
        simulator.reset();
        let mut detector = TrickDetector::default();
        for _ in 0..3000 {
            assert!(!simulator.step(0.0, dt));
            simulator.resolve_contact(&mut detector);
        }
        assert_eq!(simulator.character().horizontal_distance(), 0.0);
    }
}

#[test]
fn test_set_lean_clamps() {
    let mut simulator = BounceSimulator::default();
    simulator.set_lean(-3.0);
    assert_eq!(simulator.lean(), -1.0);
    simulator.set_lean(f32::INFINITY);
    assert_eq!(simulator.lean(), 0.0);
    simulator.set_lean(0.5);
    simulator.reset();
    assert_eq!(simulator.lean(), 0.0);
}

#[test]
fn test_reset_restores_initial_drop() {
    let mut simulator = BounceSimulator::default();
    simulator.set_shape(BodyShape::Pike);
    for _ in 0..30 {
        simulator.step(1.0, 1.0 / 60.0);
    }

    simulator.reset();
    assert_eq!(
        simulator.character(),
        &CharacterState::spawn(simulator.tuning().start_height)
    );
    assert_eq!(simulator.trampoline().compression(), 0.0);
}
