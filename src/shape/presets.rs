//! Shape domain: procedural limb curves for default and discrete poses.
//!
//! All curves are left-side control paths starting at their anchor.

use bevy::prelude::*;

const CURVE_POINTS: usize = 7;

/// Arm raised overhead with a slight outward bow.
pub(crate) fn arm_up_curve(shoulder: Vec2, length: f32) -> Vec<Vec2> {
    curve(shoulder, |t| Vec2::new(-0.2 * t * t, t) * length)
}

/// Leg hanging straight down with a slight outward bow.
pub(crate) fn leg_down_curve(hip: Vec2, length: f32) -> Vec<Vec2> {
    curve(hip, |t| Vec2::new(-0.1 * t * t, -t) * length)
}

fn curve(anchor: Vec2, offset: impl Fn(f32) -> Vec2) -> Vec<Vec2> {
    (0..CURVE_POINTS)
        .map(|i| anchor + offset(i as f32 / (CURVE_POINTS - 1) as f32))
        .collect()
}

/// Knees pulled to the chest, hands on the shins.
pub(crate) fn tuck(shoulder: Vec2, hip: Vec2) -> (Vec<Vec2>, Vec<Vec2>) {
    let arm = vec![
        shoulder,
        shoulder + Vec2::new(-0.15, -0.3),
        shoulder + Vec2::new(-0.05, -0.6),
    ];
    let leg = vec![
        hip,
        hip + Vec2::new(-0.2, 0.35),
        hip + Vec2::new(-0.1, -0.05),
    ];
    (arm, leg)
}

/// Legs straight, hands reaching down to the feet.
pub(crate) fn pike(shoulder: Vec2, hip: Vec2) -> (Vec<Vec2>, Vec<Vec2>) {
    let arm = vec![
        shoulder,
        shoulder + Vec2::new(-0.15, -0.45),
        shoulder + Vec2::new(-0.1, -1.1),
    ];
    let leg = vec![hip, hip + Vec2::new(-0.02, -0.45), hip + Vec2::new(-0.04, -0.9)];
    (arm, leg)
}

/// Arms and legs spread wide.
pub(crate) fn straddle(shoulder: Vec2, hip: Vec2) -> (Vec<Vec2>, Vec<Vec2>) {
    let arm = vec![
        shoulder,
        shoulder + Vec2::new(-0.35, 0.05),
        shoulder + Vec2::new(-0.7, 0.1),
    ];
    let leg = vec![hip, hip + Vec2::new(-0.3, -0.35), hip + Vec2::new(-0.6, -0.7)];
    (arm, leg)
}

/// Body outline from the hand, through shoulder and hip, down to the foot.
pub(crate) fn outline(arm: &[Vec2], leg: &[Vec2]) -> Vec<Vec2> {
    arm.iter().rev().chain(leg.iter()).copied().collect()
}
