//! Tricks domain: airborne rotation tracking.

use bevy::prelude::*;
use std::f32::consts::{PI, TAU};

use crate::core::BodyShape;
use crate::tricks::trick::Trick;

/// Accumulates unsigned rotation during one airtime and turns completed
/// rotations into trick records.
///
/// Each completed full turn is subtracted from the accumulator and counted,
/// so the remainder carries into the next flip and multi-flips are reported
/// in full. A half flip is recorded once per airtime, only while no full
/// flip has completed.
#[derive(Resource, Debug, Default)]
pub struct TrickDetector {
    rotation_total: f32,
    previous_angle: Option<f32>,
    completed_flips: u32,
    current_trick: Option<Trick>,
}

impl TrickDetector {
    /// Feed the current flip angle. Returns a trick when one was newly detected
    /// (or upgraded) on this tick.
    pub fn track(&mut self, angle: f32, shape: BodyShape, airborne: bool) -> Option<Trick> {
        // A bad sample would poison the accumulator for the rest of the airtime
        if !angle.is_finite() {
            return None;
        }

        if !airborne {
            self.rotation_total = 0.0;
            self.previous_angle = None;
            self.completed_flips = 0;
            return None;
        }

        if let Some(previous) = self.previous_angle {
            self.rotation_total += (angle - previous).abs();
        }
        self.previous_angle = Some(angle);

        if self.rotation_total >= TAU {
            let flips = (self.rotation_total / TAU).floor();
            self.rotation_total -= flips * TAU;
            self.completed_flips += flips as u32;

            let trick = Trick::full(shape, self.completed_flips);
            debug!("Trick detected: {} ({} deg)", trick, trick.rotation_degrees);
            self.current_trick = Some(trick.clone());
            return Some(trick);
        }

        if self.completed_flips == 0 && self.current_trick.is_none() && self.rotation_total >= PI {
            let trick = Trick::half(shape);
            debug!("Trick detected: {}", trick);
            self.current_trick = Some(trick.clone());
            return Some(trick);
        }

        None
    }

    /// Last detected trick of the current airtime.
    pub fn current_trick(&self) -> Option<&Trick> {
        self.current_trick.as_ref()
    }

    /// Rotation accumulated past the last completed flip, in radians.
    pub fn rotation_total(&self) -> f32 {
        self.rotation_total
    }

    pub fn completed_flips(&self) -> u32 {
        self.completed_flips
    }

    /// Trampoline bounce: start a new airtime and clear the current trick.
    ///
    /// The angle baseline is kept, so rotation between the contact tick and
    /// the first tick of flight still counts.
    pub fn bounce(&mut self) {
        self.rotation_total = 0.0;
        self.completed_flips = 0;
        self.current_trick = None;
    }

    /// Forget everything, including the angle baseline.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
