//! Shape domain: freeform stroke capture state.
//!
//! Points accumulate while the pointer is held and are handed over exactly
//! once, on release. Nothing is processed mid-stroke.

use bevy::prelude::*;

#[derive(Resource, Debug, Default)]
pub struct FreehandDrawState {
    enabled: bool,
    drawing: bool,
    raw_points: Vec<Vec2>,
}

impl FreehandDrawState {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Points of the stroke in progress, in torso space.
    pub fn points(&self) -> &[Vec2] {
        &self.raw_points
    }

    /// Enter or leave drawing mode. Leaving discards any stroke in progress.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.clear();
        }
    }

    pub fn toggle(&mut self) {
        self.set_enabled(!self.enabled);
    }

    /// Start a fresh stroke. Ignored outside drawing mode.
    pub fn begin_stroke(&mut self) {
        if !self.enabled {
            return;
        }
        self.raw_points.clear();
        self.drawing = true;
    }

    /// Add a sample, skipping points closer than `min_distance` to the last one.
    /// Returns `true` if the point was added.
    pub fn add_sample(&mut self, point: Vec2, min_distance: f32) -> bool {
        if !self.drawing || !point.is_finite() {
            return false;
        }
        if let Some(&last) = self.raw_points.last() {
            if last.distance(point) < min_distance {
                return false;
            }
        }
        self.raw_points.push(point);
        true
    }

    /// End the stroke and take its points. `None` when no stroke was active.
    pub fn finish_stroke(&mut self) -> Option<Vec<Vec2>> {
        if !self.drawing {
            return None;
        }
        self.drawing = false;
        Some(std::mem::take(&mut self.raw_points))
    }

    /// Discard the stroke in progress without leaving drawing mode.
    pub fn clear(&mut self) {
        self.drawing = false;
        self.raw_points.clear();
    }
}

/// Map a screen-space point (origin top-left, y down) into torso space.
///
/// `nx = ((px / width) * 2 - 1) * scale`, `ny = -((py / height) * 2 - 1) * scale`.
/// Returns `None` for an empty canvas.
pub fn normalize_screen_point(screen: Vec2, canvas: Vec2, scale: f32) -> Option<Vec2> {
    if canvas.x <= 0.0 || canvas.y <= 0.0 {
        return None;
    }
    let nx = ((screen.x / canvas.x) * 2.0 - 1.0) * scale;
    let ny = -((screen.y / canvas.y) * 2.0 - 1.0) * scale;
    Some(Vec2::new(nx, ny))
}
