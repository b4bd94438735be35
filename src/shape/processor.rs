//! Shape domain: freeform path to limb pose pipeline.
//!
//! A drawn stroke is validated, simplified, normalised to the left side of
//! the body, split into an arm half and a leg half around the vertical
//! midpoint of its own bounds, anchored to the shoulder and hip, mirrored
//! for the right side, and finally turned into tapered segment chains.

use bevy::prelude::*;
use std::fmt;

use crate::core::BodyShape;
use crate::geometry::{
    bounding_box, mirror_x, path_length, resample_to_equal_segments, segment_distance,
    simplify_path, smooth,
};
use crate::shape::presets;
use crate::shape::resources::ShapeTuning;

/// The torso anchor every drawn path is expressed relative to.
pub const TORSO_ANCHOR: Vec2 = Vec2::ZERO;

/// Fewest raw points a drawn path may have.
pub const MIN_PATH_POINTS: usize = 3;

/// Consecutive points closer than this are treated as duplicates.
const DUPLICATE_EPSILON: f32 = 1e-4;

/// Why a drawn path or a shape selection was refused.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeRejection {
    PathTooShort { points: usize },
    MissesTorso,
    Degenerate,
    /// Custom shape selected before any freeform pose was accepted
    NoFreeformPose,
}

impl fmt::Display for ShapeRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeRejection::PathTooShort { points } => write!(
                f,
                "path has {} points, at least {} are required",
                points, MIN_PATH_POINTS
            ),
            ShapeRejection::MissesTorso => f.write_str("path does not pass through the torso"),
            ShapeRejection::Degenerate => f.write_str("path has no usable extent"),
            ShapeRejection::NoFreeformPose => f.write_str("no freeform shape has been drawn yet"),
        }
    }
}

/// Target overlay the UI can draw while the player sketches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorsoGuide {
    pub center: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Limb {
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

/// A left limb path and its mirror image.
///
/// Always built from the left side, so `right[i] == (-left[i].x, left[i].y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LimbPathPair {
    left: Vec<Vec2>,
    right: Vec<Vec2>,
}

impl LimbPathPair {
    pub fn from_left(left: Vec<Vec2>) -> Self {
        let right = mirror_x(&left);
        Self { left, right }
    }

    pub fn left(&self) -> &[Vec2] {
        &self.left
    }

    pub fn right(&self) -> &[Vec2] {
        &self.right
    }
}

/// One capsule of a limb chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimbSegment {
    pub start: Vec3,
    pub end: Vec3,
    pub radius: f32,
}

/// Connected segments from the attachment point to the hand or foot.
#[derive(Debug, Clone, PartialEq)]
pub struct LimbChain {
    pub limb: Limb,
    pub segments: Vec<LimbSegment>,
    /// Centre of the hand/foot sphere capping the chain
    pub tip: Vec3,
    pub tip_radius: f32,
}

/// Complete pose description handed to the skeleton renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct LimbPose {
    outline: LimbPathPair,
    arms: LimbPathPair,
    legs: LimbPathPair,
    chains: Vec<LimbChain>,
}

impl LimbPose {
    /// Simplified drawn outline on the left side of the body.
    pub fn left_path(&self) -> &[Vec2] {
        self.outline.left()
    }

    /// Mirror image of [`LimbPose::left_path`].
    pub fn right_path(&self) -> &[Vec2] {
        self.outline.right()
    }

    pub fn arms(&self) -> &LimbPathPair {
        &self.arms
    }

    pub fn legs(&self) -> &LimbPathPair {
        &self.legs
    }

    pub fn chains(&self) -> &[LimbChain] {
        &self.chains
    }

    pub fn chain(&self, limb: Limb) -> Option<&LimbChain> {
        self.chains.iter().find(|chain| chain.limb == limb)
    }
}

/// Converts freeform strokes and preset shapes into limb poses.
#[derive(Resource, Debug, Clone, Default)]
pub struct ShapeProcessor {
    tuning: ShapeTuning,
}

impl ShapeProcessor {
    pub fn new(tuning: ShapeTuning) -> Self {
        Self { tuning }
    }

    pub fn tuning(&self) -> &ShapeTuning {
        &self.tuning
    }

    pub fn torso_guide(&self) -> TorsoGuide {
        TorsoGuide {
            center: TORSO_ANCHOR,
            radius: self.tuning.torso_radius,
        }
    }

    /// Whether a raw path is acceptable input for [`ShapeProcessor::process`].
    pub fn is_valid_path(&self, path: &[Vec2]) -> bool {
        self.validate(path).is_ok()
    }

    fn validate(&self, path: &[Vec2]) -> Result<(), ShapeRejection> {
        if path.len() < MIN_PATH_POINTS {
            return Err(ShapeRejection::PathTooShort { points: path.len() });
        }
        if path.iter().any(|p| !p.is_finite()) {
            return Err(ShapeRejection::Degenerate);
        }
        if self.tuning.require_torso_contact && !self.touches_torso(path) {
            return Err(ShapeRejection::MissesTorso);
        }
        Ok(())
    }

    fn touches_torso(&self, path: &[Vec2]) -> bool {
        let radius = self.tuning.torso_radius;
        path.iter().any(|p| p.distance(TORSO_ANCHOR) <= radius)
            || path
                .windows(2)
                .any(|pair| segment_distance(TORSO_ANCHOR, pair[0], pair[1]) <= radius)
    }

    /// Turn a drawn path into a pose.
    pub fn process(&self, drawn_path: &[Vec2]) -> Result<LimbPose, ShapeRejection> {
        self.validate(drawn_path)?;

        let simplified = simplify_path(drawn_path, self.tuning.simplify_tolerance);
        if path_length(&simplified) < self.tuning.min_path_length {
            return Err(ShapeRejection::Degenerate);
        }

        // Work on the left side regardless of where the stroke was drawn
        let mean_x = simplified.iter().map(|p| p.x).sum::<f32>() / simplified.len() as f32;
        let left = if mean_x > 0.0 {
            mirror_x(&simplified)
        } else {
            simplified
        };

        let bounds = bounding_box(&left).ok_or(ShapeRejection::Degenerate)?;
        let mid_y = (bounds.min.y + bounds.max.y) * 0.5;
        let (upper, lower) = split_at_height(&left, mid_y);

        let arm = self
            .anchored(upper, self.tuning.shoulder())
            .unwrap_or_else(|| self.default_arm());
        let leg = self
            .anchored(lower, self.tuning.hip())
            .unwrap_or_else(|| self.default_leg());

        debug!(
            "Processed freeform path: {} raw points -> {} simplified, arm {} pts, leg {} pts",
            drawn_path.len(),
            left.len(),
            arm.len(),
            leg.len()
        );

        Ok(self.build_pose(left, arm, leg))
    }

    /// Orient a sub-path so it starts at its anchor end, prepending the anchor
    /// when the path does not already start near it. `None` when fewer than
    /// two distinct points remain.
    fn anchored(&self, sub_path: Vec<Vec2>, anchor: Vec2) -> Option<Vec<Vec2>> {
        let mut path = dedup_points(sub_path);
        if path.len() < 2 {
            return None;
        }

        let (first, last) = (path[0], path[path.len() - 1]);
        if last.distance(anchor) < first.distance(anchor) {
            path.reverse();
        }

        if path[0].distance(anchor) > self.tuning.anchor_snap_distance {
            path.insert(0, anchor);
        }
        Some(path)
    }

    fn default_arm(&self) -> Vec<Vec2> {
        presets::arm_up_curve(self.tuning.shoulder(), self.tuning.default_arm_length)
    }

    fn default_leg(&self) -> Vec<Vec2> {
        presets::leg_down_curve(self.tuning.hip(), self.tuning.default_leg_length)
    }

    /// The fixed straight, arms-up pose.
    pub fn generate_default_shape(&self) -> LimbPose {
        let arm = self.default_arm();
        let leg = self.default_leg();
        let outline = presets::outline(&arm, &leg);
        self.build_pose(outline, arm, leg)
    }

    /// Pose shown for a discrete shape. `Custom` falls back to the default pose.
    pub fn preset_pose(&self, shape: BodyShape) -> LimbPose {
        let shoulder = self.tuning.shoulder();
        let hip = self.tuning.hip();
        let (arm, leg) = match shape {
            BodyShape::Straight | BodyShape::Custom => return self.generate_default_shape(),
            BodyShape::Tuck => presets::tuck(shoulder, hip),
            BodyShape::Pike => presets::pike(shoulder, hip),
            BodyShape::Straddle => presets::straddle(shoulder, hip),
        };
        let outline = presets::outline(&arm, &leg);
        self.build_pose(outline, arm, leg)
    }

    fn build_pose(&self, outline: Vec<Vec2>, arm: Vec<Vec2>, leg: Vec<Vec2>) -> LimbPose {
        let arms = LimbPathPair::from_left(arm);
        let legs = LimbPathPair::from_left(leg);
        let chains = vec![
            self.limb_chain(Limb::LeftArm, arms.left()),
            self.limb_chain(Limb::RightArm, arms.right()),
            self.limb_chain(Limb::LeftLeg, legs.left()),
            self.limb_chain(Limb::RightLeg, legs.right()),
        ];

        LimbPose {
            outline: LimbPathPair::from_left(outline),
            arms,
            legs,
            chains,
        }
    }

    /// Equal-length segments along `path` with radius tapering toward the tip.
    pub fn limb_chain(&self, limb: Limb, path: &[Vec2]) -> LimbChain {
        let segment_count = self.tuning.segments_per_limb.max(1);
        let resampled = resample_to_equal_segments(path, segment_count + 1);
        let mut points = smooth(&resampled, 3);
        if let (Some(base), Some(&anchor)) = (points.first_mut(), resampled.first()) {
            *base = anchor;
        }

        let base_radius = self.tuning.limb_base_radius;
        let taper = self.tuning.limb_taper.clamp(0.0, 0.9);
        let radius_at = |i: usize| base_radius * (1.0 - taper * i as f32 / segment_count as f32);

        let segments = points
            .windows(2)
            .enumerate()
            .map(|(i, pair)| LimbSegment {
                start: pair[0].extend(0.0),
                end: pair[1].extend(0.0),
                radius: radius_at(i),
            })
            .collect();

        let tip = points.last().copied().unwrap_or(TORSO_ANCHOR).extend(0.0);

        LimbChain {
            limb,
            segments,
            tip,
            tip_radius: radius_at(segment_count) * 1.2,
        }
    }
}

/// Split a path into the part at or above `mid_y` and the part below it.
///
/// Where an edge crosses `mid_y` the crossing point is added to both halves,
/// so a stroke drawn straight through the midline still yields two usable
/// sub-paths.
fn split_at_height(path: &[Vec2], mid_y: f32) -> (Vec<Vec2>, Vec<Vec2>) {
    let mut upper = Vec::new();
    let mut lower = Vec::new();

    for (i, &point) in path.iter().enumerate() {
        if i > 0 {
            let prev = path[i - 1];
            let crosses = (prev.y >= mid_y) != (point.y >= mid_y);
            if crosses && (point.y - prev.y).abs() > f32::EPSILON {
                let t = (mid_y - prev.y) / (point.y - prev.y);
                let crossing = prev.lerp(point, t);
                upper.push(crossing);
                lower.push(crossing);
            }
        }

        if point.y >= mid_y {
            upper.push(point);
        } else {
            lower.push(point);
        }
    }

    (upper, lower)
}

fn dedup_points(mut points: Vec<Vec2>) -> Vec<Vec2> {
    points.dedup_by(|a, b| a.distance(*b) <= DUPLICATE_EPSILON);
    points
}
