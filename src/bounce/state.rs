//! Bounce domain: character and trampoline state.

use bevy::prelude::*;

use crate::core::BodyShape;

/// Simulated character: a point mass with a single flip axis.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterState {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Flip angle in radians. Kept unwrapped so per-tick deltas stay small.
    pub rotation: f32,
    /// Signed flip speed, rad/s
    pub rotation_speed: f32,
    pub shape: BodyShape,
    pub airborne: bool,
}

impl CharacterState {
    /// Character dropped from `height` above the trampoline centre, at rest.
    pub fn spawn(height: f32) -> Self {
        Self {
            position: Vec3::new(0.0, height, 0.0),
            velocity: Vec3::ZERO,
            rotation: 0.0,
            rotation_speed: 0.0,
            shape: BodyShape::Straight,
            airborne: true,
        }
    }

    /// Horizontal distance from the vertical axis through the trampoline centre.
    pub fn horizontal_distance(&self) -> f32 {
        Vec2::new(self.position.x, self.position.z).length()
    }
}

/// Trampoline bed. Compression is never negative and, once released, decays
/// monotonically to exactly zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TrampolineState {
    rest_height: f32,
    compression: f32,
    recovering: bool,
}

impl TrampolineState {
    pub fn new(rest_height: f32) -> Self {
        Self {
            rest_height,
            compression: 0.0,
            recovering: false,
        }
    }

    pub fn rest_height(&self) -> f32 {
        self.rest_height
    }

    pub fn compression(&self) -> f32 {
        self.compression
    }

    pub fn is_recovering(&self) -> bool {
        self.recovering
    }

    /// Current height of the bed surface.
    pub fn surface_height(&self) -> f32 {
        self.rest_height - self.compression
    }

    /// Press the bed down to `amount`, clamped to `[0, max]`, and start recovery.
    pub fn compress(&mut self, amount: f32, max: f32) {
        let amount = if amount.is_finite() { amount } else { max };
        self.compression = amount.clamp(0.0, max.max(0.0));
        self.recovering = self.compression > 0.0;
    }

    /// One damping step. Returns `true` while still recovering.
    pub fn recover(&mut self, damping: f32, snap: f32) -> bool {
        if !self.recovering {
            return false;
        }
        self.compression *= damping.clamp(0.0, 1.0);
        if self.compression < snap {
            self.compression = 0.0;
            self.recovering = false;
        }
        self.recovering
    }
}
