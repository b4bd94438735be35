//! View domain: pure layout of the frame in world and screen space.
//!
//! World units are metres with y up. The camera sits at the origin of screen
//! space, so `to_screen` also gives sprite translations.

use bevy::prelude::*;

use crate::shape::{LimbPose, ShapeTuning};

pub const PIXELS_PER_METRE: f32 = 50.0;
/// World height drawn at the vertical centre of the window
pub const VIEW_CENTRE_HEIGHT: f32 = 5.0;
pub const HEAD_RADIUS: f32 = 0.16;
pub const BED_THICKNESS: f32 = 0.08;

pub fn to_screen(world: Vec2) -> Vec2 {
    Vec2::new(world.x, world.y - VIEW_CENTRE_HEIGHT) * PIXELS_PER_METRE
}

/// A capsule-like body part in world space. Heads and limb tips have
/// `start == end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPart {
    pub start: Vec2,
    pub end: Vec2,
    pub radius: f32,
}

impl BodyPart {
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }

    pub fn angle(&self) -> f32 {
        let dir = self.end - self.start;
        if dir.length_squared() <= f32::EPSILON {
            0.0
        } else {
            dir.to_angle()
        }
    }

    /// Sprite size in metres, long axis along x.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.length() + 2.0 * self.radius, 2.0 * self.radius)
    }
}

/// Number of parts `body_parts` yields for a pose built with `tuning`.
pub fn body_part_count(tuning: &ShapeTuning) -> usize {
    2 + 4 * (tuning.segments_per_limb.max(1) + 1)
}

/// Torso, head, then every limb segment and tip, placed at `position` and
/// turned by the flip angle. A positive angle turns the body clockwise.
pub fn body_parts(
    position: Vec2,
    rotation: f32,
    pose: &LimbPose,
    tuning: &ShapeTuning,
) -> Vec<BodyPart> {
    let turn = Rot2::radians(-rotation);
    let place = |local: Vec2| position + turn * local;

    let shoulder_y = tuning.shoulder().y;
    let hip_y = tuning.hip().y;
    let head = Vec2::new(0.0, shoulder_y + HEAD_RADIUS * 1.5);

    let mut parts = vec![
        BodyPart {
            start: place(Vec2::new(0.0, hip_y)),
            end: place(Vec2::new(0.0, shoulder_y)),
            radius: tuning.torso_radius * 0.5,
        },
        BodyPart {
            start: place(head),
            end: place(head),
            radius: HEAD_RADIUS,
        },
    ];

    for chain in pose.chains() {
        parts.extend(chain.segments.iter().map(|segment| BodyPart {
            start: place(segment.start.truncate()),
            end: place(segment.end.truncate()),
            radius: segment.radius,
        }));
        let tip = place(chain.tip.truncate());
        parts.push(BodyPart {
            start: tip,
            end: tip,
            radius: chain.tip_radius,
        });
    }

    parts
}

/// Centre and size of the trampoline bed, top edge at the sagged surface.
pub fn bed_rect(rest_height: f32, compression: f32, radius: f32) -> (Vec2, Vec2) {
    let surface = rest_height - compression.max(0.0);
    (
        Vec2::new(0.0, surface - BED_THICKNESS * 0.5),
        Vec2::new(radius * 2.0, BED_THICKNESS),
    )
}

/// Inverse of `normalize_screen_point`, into camera-centred pixels.
pub fn torso_to_canvas(point: Vec2, canvas: Vec2, scale: f32) -> Vec2 {
    if scale <= 0.0 {
        return Vec2::ZERO;
    }
    point / scale * canvas * 0.5
}
