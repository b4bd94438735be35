//! Core domain: session clock and the per-frame snapshot shared with presentation.

use bevy::prelude::*;

use crate::core::BodyShape;
use crate::tricks::Trick;

/// Simulated seconds since the session started.
///
/// Advances by the clamped tick delta only while the game is playing, so
/// combo windows measure gameplay time rather than wall-clock time.
#[derive(Resource, Debug, Default)]
pub struct SessionClock {
    elapsed: f64,
}

impl SessionClock {
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += f64::from(dt.max(0.0));
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

/// Plain-data view of one simulation tick for the renderer and HUD.
#[derive(Resource, Debug, Clone, Default)]
pub struct FrameSnapshot {
    pub position: Vec3,
    /// Flip angle in radians, unwrapped
    pub rotation: f32,
    pub shape: BodyShape,
    pub airborne: bool,
    pub trampoline_rest_height: f32,
    pub trampoline_radius: f32,
    pub trampoline_compression: f32,
    pub current_trick: Option<Trick>,
    pub total_score: u32,
    pub high_score: u32,
    pub combo_count: u32,
}
