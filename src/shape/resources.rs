//! Shape domain: tuning and the active pose resource.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::BodyShape;
use crate::shape::processor::{LimbPose, ShapeProcessor};

/// Freeform shape tuning, in torso-relative units (torso anchor at the origin).
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShapeTuning {
    /// Douglas-Peucker tolerance applied to every drawn path
    pub simplify_tolerance: f32,
    /// Radius of the torso target drawn paths must cross
    pub torso_radius: f32,
    /// Reject paths that never come within `torso_radius` of the torso anchor
    pub require_torso_contact: bool,
    /// Paths shorter than this (arc length, after simplification) are rejected
    pub min_path_length: f32,
    /// Left shoulder attachment point
    pub shoulder_anchor: [f32; 2],
    /// Left hip attachment point
    pub hip_anchor: [f32; 2],
    /// A sub-path starting closer than this to its anchor is not re-anchored
    pub anchor_snap_distance: f32,
    pub default_arm_length: f32,
    pub default_leg_length: f32,
    pub segments_per_limb: usize,
    pub limb_base_radius: f32,
    /// Fraction of the base radius lost by the time the chain reaches the tip
    pub limb_taper: f32,
    /// Minimum distance between consecutive raw stroke samples
    pub min_sample_distance: f32,
    /// Scale applied when normalising screen points into torso space
    pub draw_scale: f32,
}

impl Default for ShapeTuning {
    fn default() -> Self {
        Self {
            simplify_tolerance: 0.06,
            torso_radius: 0.35,
            require_torso_contact: true,
            min_path_length: 0.05,
            shoulder_anchor: [-0.2, 0.45],
            hip_anchor: [-0.12, -0.45],
            anchor_snap_distance: 0.15,
            default_arm_length: 0.7,
            default_leg_length: 0.9,
            segments_per_limb: 5,
            limb_base_radius: 0.06,
            limb_taper: 0.4,
            min_sample_distance: 0.01,
            draw_scale: 1.5,
        }
    }
}

impl ShapeTuning {
    pub fn shoulder(&self) -> Vec2 {
        Vec2::from_array(self.shoulder_anchor)
    }

    pub fn hip(&self) -> Vec2 {
        Vec2::from_array(self.hip_anchor)
    }
}

/// Pose currently shown by the character skeleton.
///
/// Discrete shapes map to presets; `Custom` uses the last accepted freeform
/// pose and is only reachable once one has been drawn.
#[derive(Resource, Debug, Clone)]
pub struct ActivePose {
    shape: BodyShape,
    pose: LimbPose,
    custom_pose: Option<LimbPose>,
}

impl ActivePose {
    pub fn new(processor: &ShapeProcessor) -> Self {
        Self {
            shape: BodyShape::Straight,
            pose: processor.generate_default_shape(),
            custom_pose: None,
        }
    }

    pub fn shape(&self) -> BodyShape {
        self.shape
    }

    pub fn pose(&self) -> &LimbPose {
        &self.pose
    }

    pub fn has_custom_pose(&self) -> bool {
        self.custom_pose.is_some()
    }

    /// Switch to a shape, replacing the pose wholesale.
    ///
    /// `Custom` needs an accepted freeform pose; without one nothing changes
    /// and `false` is returned.
    pub fn select(&mut self, shape: BodyShape, processor: &ShapeProcessor) -> bool {
        let pose = match (shape, &self.custom_pose) {
            (BodyShape::Custom, Some(custom)) => custom.clone(),
            (BodyShape::Custom, None) => return false,
            _ => processor.preset_pose(shape),
        };
        self.shape = shape;
        self.pose = pose;
        true
    }

    /// Store an accepted freeform pose and switch to it.
    pub fn apply_custom(&mut self, pose: LimbPose) {
        self.shape = BodyShape::Custom;
        self.pose = pose.clone();
        self.custom_pose = Some(pose);
    }

    pub fn reset(&mut self, processor: &ShapeProcessor) {
        *self = Self::new(processor);
    }
}
