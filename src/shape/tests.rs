//! Shape domain: tests for the freeform pose pipeline and stroke capture.

use bevy::prelude::*;

use super::{
    ActivePose, FreehandDrawState, Limb, ShapeProcessor, ShapeRejection, ShapeTuning,
    TORSO_ANCHOR, normalize_screen_point,
};
use crate::core::BodyShape;

fn vertical_stroke() -> Vec<Vec2> {
    // Slightly slanted line through the torso centre, top to bottom
    (0..10)
        .map(|i| {
            let t = i as f32 / 9.0;
            Vec2::new(-0.01 + 0.02 * t, 0.9 - 1.8 * t)
        })
        .collect()
}

fn assert_mirrored(left: &[Vec2], right: &[Vec2]) {
    assert_eq!(left.len(), right.len());
    for (l, r) in left.iter().zip(right) {
        assert_eq!(r.x, -l.x);
        assert_eq!(r.y, l.y);
    }
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_rejects_short_paths() {
    let processor = ShapeProcessor::default();
    let result = processor.process(&[Vec2::ZERO, Vec2::new(0.0, 0.5)]);
    assert_eq!(result, Err(ShapeRejection::PathTooShort { points: 2 }));
    assert!(!processor.is_valid_path(&[]));
}

#[test]
fn test_rejects_paths_missing_torso() {
    let processor = ShapeProcessor::default();
    let far_away: Vec<Vec2> = (0..5).map(|i| Vec2::new(1.2, i as f32 * 0.2)).collect();
    assert_eq!(
        processor.process(&far_away),
        Err(ShapeRejection::MissesTorso)
    );
    assert!(!processor.is_valid_path(&far_away));
}

#[test]
fn test_torso_contact_can_be_disabled() {
    let processor = ShapeProcessor::new(ShapeTuning {
        require_torso_contact: false,
        ..default()
    });
    let far_away: Vec<Vec2> = (0..5).map(|i| Vec2::new(-1.2, i as f32 * 0.2)).collect();
    assert!(processor.process(&far_away).is_ok());
}

#[test]
fn test_segment_crossing_torso_counts_as_contact() {
    // No sample lands inside the torso, but the middle edge crosses it
    let processor = ShapeProcessor::default();
    let path = vec![
        Vec2::new(-0.1, 1.0),
        Vec2::new(-0.1, 0.5),
        Vec2::new(-0.1, -0.5),
        Vec2::new(-0.1, -1.0),
    ];
    assert!(processor.is_valid_path(&path));
}

#[test]
fn test_rejects_degenerate_paths() {
    let processor = ShapeProcessor::default();
    let dot = vec![Vec2::ZERO; 5];
    assert_eq!(processor.process(&dot), Err(ShapeRejection::Degenerate));

    let nan = vec![Vec2::ZERO, Vec2::new(f32::NAN, 0.0), Vec2::ONE];
    assert_eq!(processor.process(&nan), Err(ShapeRejection::Degenerate));
}

// -----------------------------------------------------------------------------
// Processing tests
// -----------------------------------------------------------------------------

#[test]
fn test_vertical_stroke_produces_mirrored_pose() {
    let processor = ShapeProcessor::default();
    let pose = processor
        .process(&vertical_stroke())
        .expect("vertical stroke through the torso is valid");

    assert!(!pose.left_path().is_empty());
    assert_mirrored(pose.left_path(), pose.right_path());
    assert_mirrored(pose.arms().left(), pose.arms().right());
    assert_mirrored(pose.legs().left(), pose.legs().right());
}

#[test]
fn test_sub_paths_are_anchored() {
    let tuning = ShapeTuning::default();
    let processor = ShapeProcessor::new(tuning.clone());
    let pose = processor
        .process(&vertical_stroke())
        .expect("vertical stroke through the torso is valid");

    assert_eq!(pose.arms().left()[0], tuning.shoulder());
    assert_eq!(pose.legs().left()[0], tuning.hip());

    let arm_chain = pose.chain(Limb::LeftArm).expect("left arm chain");
    assert_eq!(arm_chain.segments[0].start, tuning.shoulder().extend(0.0));
}

#[test]
fn test_right_side_stroke_is_normalised_to_left() {
    let processor = ShapeProcessor::default();
    let stroke: Vec<Vec2> = vertical_stroke()
        .into_iter()
        .map(|p| p + Vec2::new(0.25, 0.0))
        .collect();
    let pose = processor.process(&stroke).expect("stroke touches the torso");

    assert!(pose.left_path().iter().all(|p| p.x <= 0.0));
    assert!(pose.right_path().iter().all(|p| p.x >= 0.0));
}

#[test]
fn test_flat_stroke_falls_back_to_default_leg() {
    let processor = ShapeProcessor::default();
    let flat: Vec<Vec2> = (0..6).map(|i| Vec2::new(-0.3 + i as f32 * 0.06, 0.0)).collect();
    let pose = processor.process(&flat).expect("flat stroke crosses the torso");

    let default_pose = processor.generate_default_shape();
    assert_eq!(pose.legs(), default_pose.legs());
    assert_ne!(pose.arms(), default_pose.arms());
}

#[test]
fn test_limb_chains_taper_toward_tip() {
    let tuning = ShapeTuning::default();
    let processor = ShapeProcessor::new(tuning.clone());
    let pose = processor
        .process(&vertical_stroke())
        .expect("vertical stroke through the torso is valid");

    assert_eq!(pose.chains().len(), 4);
    for chain in pose.chains() {
        assert_eq!(chain.segments.len(), tuning.segments_per_limb);
        assert!((chain.segments[0].radius - tuning.limb_base_radius).abs() < 1e-6);
        for pair in chain.segments.windows(2) {
            assert!(pair[1].radius < pair[0].radius);
            // Chain is connected
            assert_eq!(pair[0].end, pair[1].start);
        }
        let last = chain.segments.last().expect("chain has segments");
        assert_eq!(last.end, chain.tip);
        assert!(last.radius >= tuning.limb_base_radius * (1.0 - tuning.limb_taper));
    }
}

#[test]
fn test_right_chains_mirror_left_chains() {
    let processor = ShapeProcessor::default();
    let pose = processor
        .process(&vertical_stroke())
        .expect("vertical stroke through the torso is valid");

    for (left, right) in [
        (Limb::LeftArm, Limb::RightArm),
        (Limb::LeftLeg, Limb::RightLeg),
    ] {
        let left = pose.chain(left).expect("left chain");
        let right = pose.chain(right).expect("right chain");
        for (l, r) in left.segments.iter().zip(&right.segments) {
            assert_eq!(r.start, Vec3::new(-l.start.x, l.start.y, l.start.z));
            assert_eq!(r.end, Vec3::new(-l.end.x, l.end.y, l.end.z));
            assert_eq!(r.radius, l.radius);
        }
    }
}

// -----------------------------------------------------------------------------
// Default and preset pose tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_shape_has_arms_up() {
    let tuning = ShapeTuning::default();
    let processor = ShapeProcessor::new(tuning.clone());
    let pose = processor.generate_default_shape();

    let arm = pose.arms().left();
    assert_eq!(arm[0], tuning.shoulder());
    assert!(arm[arm.len() - 1].y > tuning.shoulder().y);

    let leg = pose.legs().left();
    assert!(leg[leg.len() - 1].y < tuning.hip().y);
    assert_mirrored(pose.left_path(), pose.right_path());
}

#[test]
fn test_every_preset_has_four_chains() {
    let processor = ShapeProcessor::default();
    for shape in BodyShape::ALL {
        let pose = processor.preset_pose(shape);
        assert_eq!(pose.chains().len(), 4, "{shape}");
        assert_mirrored(pose.arms().left(), pose.arms().right());
    }
    assert_eq!(
        processor.preset_pose(BodyShape::Custom),
        processor.generate_default_shape()
    );
}

#[test]
fn test_torso_guide() {
    let tuning = ShapeTuning::default();
    let guide = ShapeProcessor::new(tuning.clone()).torso_guide();
    assert_eq!(guide.center, TORSO_ANCHOR);
    assert_eq!(guide.radius, tuning.torso_radius);
}

#[test]
fn test_active_pose_restores_custom_pose() {
    let processor = ShapeProcessor::default();
    let mut active = ActivePose::new(&processor);
    assert_eq!(active.shape(), BodyShape::Straight);

    // No freeform pose yet: custom cannot be selected
    assert!(!active.select(BodyShape::Custom, &processor));
    assert_eq!(active.shape(), BodyShape::Straight);
    assert_eq!(active.pose(), &processor.generate_default_shape());

    let custom = processor
        .process(&vertical_stroke())
        .expect("vertical stroke through the torso is valid");
    active.apply_custom(custom.clone());
    assert_eq!(active.shape(), BodyShape::Custom);

    assert!(active.select(BodyShape::Tuck, &processor));
    assert_eq!(active.pose(), &processor.preset_pose(BodyShape::Tuck));

    assert!(active.select(BodyShape::Custom, &processor));
    assert_eq!(active.shape(), BodyShape::Custom);
    assert_eq!(active.pose(), &custom);

    active.reset(&processor);
    assert!(!active.has_custom_pose());
    assert_eq!(active.shape(), BodyShape::Straight);
}

#[test]
fn test_custom_selection_refused_after_preset_without_drawing() {
    let processor = ShapeProcessor::default();
    let mut active = ActivePose::new(&processor);
    assert!(active.select(BodyShape::Pike, &processor));

    assert!(!active.select(BodyShape::Custom, &processor));
    assert_eq!(active.shape(), BodyShape::Pike);
    assert_eq!(active.pose(), &processor.preset_pose(BodyShape::Pike));
    assert_eq!(
        ShapeRejection::NoFreeformPose.to_string(),
        "no freeform shape has been drawn yet"
    );
}

// -----------------------------------------------------------------------------
// Stroke capture tests
// -----------------------------------------------------------------------------

#[test]
fn test_stroke_ignored_outside_drawing_mode() {
    let mut state = FreehandDrawState::default();
    state.begin_stroke();
    assert!(!state.is_drawing());
    assert!(!state.add_sample(Vec2::ZERO, 0.0));
    assert!(state.finish_stroke().is_none());
}

#[test]
fn test_stroke_handed_over_once() {
    let mut state = FreehandDrawState::default();
    state.set_enabled(true);
    state.begin_stroke();

    assert!(state.add_sample(Vec2::ZERO, 0.05));
    assert!(!state.add_sample(Vec2::new(0.01, 0.0), 0.05));
    assert!(state.add_sample(Vec2::new(0.1, 0.0), 0.05));

    let points = state.finish_stroke().expect("stroke was active");
    assert_eq!(points.len(), 2);
    assert!(state.finish_stroke().is_none());
    assert!(state.points().is_empty());
    assert!(state.is_enabled());
}

#[test]
fn test_clear_and_disable_are_idempotent() {
    let mut state = FreehandDrawState::default();
    state.set_enabled(true);
    state.begin_stroke();
    state.add_sample(Vec2::ONE, 0.0);

    state.clear();
    state.clear();
    assert!(!state.is_drawing());
    assert!(state.points().is_empty());
    assert!(state.is_enabled());

    state.begin_stroke();
    state.add_sample(Vec2::ONE, 0.0);
    state.set_enabled(false);
    state.set_enabled(false);
    assert!(!state.is_enabled());
    assert!(state.points().is_empty());
}

#[test]
fn test_normalize_screen_point() {
    let canvas = Vec2::new(800.0, 600.0);
    assert_eq!(
        normalize_screen_point(Vec2::new(400.0, 300.0), canvas, 1.5),
        Some(Vec2::ZERO)
    );
    assert_eq!(
        normalize_screen_point(Vec2::ZERO, canvas, 1.5),
        Some(Vec2::new(-1.5, 1.5))
    );
    assert_eq!(normalize_screen_point(Vec2::ONE, Vec2::ZERO, 1.5), None);
}
