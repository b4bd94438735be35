//! Bounce domain: the simulation resource owning character and trampoline state.

use bevy::prelude::*;

use crate::bounce::physics;
use crate::bounce::resources::{BounceTuning, SpinTuning};
use crate::bounce::state::{CharacterState, TrampolineState};
use crate::core::BodyShape;
use crate::tricks::{Trick, TrickDetector};

/// Outcome of a trampoline contact.
#[derive(Debug, Clone, PartialEq)]
pub struct Landing {
    pub descent_speed: f32,
    pub landing_quality: f32,
    pub bounce_force: f32,
    pub compression: f32,
    /// Trick held at the moment of contact
    pub trick: Option<Trick>,
}

/// Owns the character and trampoline. Other domains read them through
/// accessors and change them only through the methods below.
#[derive(Resource, Debug, Clone)]
pub struct BounceSimulator {
    tuning: BounceTuning,
    spin: SpinTuning,
    character: CharacterState,
    trampoline: TrampolineState,
    /// Held lean in `[-1, 1]`, applied at the next takeoff
    lean: f32,
}

impl Default for BounceSimulator {
    fn default() -> Self {
        Self::new(BounceTuning::default(), SpinTuning::default())
    }
}

impl BounceSimulator {
    pub fn new(tuning: BounceTuning, spin: SpinTuning) -> Self {
        let character = CharacterState::spawn(tuning.start_height);
        let trampoline = TrampolineState::new(tuning.trampoline_rest_height);
        Self {
            tuning,
            spin,
            character,
            trampoline,
            lean: 0.0,
        }
    }

    pub fn tuning(&self) -> &BounceTuning {
        &self.tuning
    }

    pub fn character(&self) -> &CharacterState {
        &self.character
    }

    pub fn trampoline(&self) -> &TrampolineState {
        &self.trampoline
    }

    /// Back to the initial drop, keeping tuning.
    pub fn reset(&mut self) {
        self.character = CharacterState::spawn(self.tuning.start_height);
        self.trampoline = TrampolineState::new(self.tuning.trampoline_rest_height);
        self.lean = 0.0;
    }

    /// Lean for the next takeoff. Non-finite input counts as none.
    pub fn set_lean(&mut self, lean: f32) {
        self.lean = if lean.is_finite() { lean.clamp(-1.0, 1.0) } else { 0.0 };
    }

    pub fn lean(&self) -> f32 {
        self.lean
    }

    pub fn set_shape(&mut self, shape: BodyShape) {
        self.character.shape = shape;
    }

    /// Clamp a raw frame delta to the integrator's safe range.
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        physics::clamp_dt(dt, self.tuning.max_dt)
    }

    /// Steer, integrate and let the trampoline recover for one tick.
    /// Returns `true` on the tick the character falls onto the safety floor.
    pub fn step(&mut self, spin_input: f32, dt: f32) -> bool {
        let dt = self.clamp_dt(dt);
        physics::steer_rotation(&mut self.character, spin_input, &self.spin, dt);
        let fell = physics::integrate(&mut self.character, &self.tuning, dt);
        physics::recover_trampoline(&mut self.trampoline, &self.tuning);
        fell
    }

    pub fn landing_quality(&self) -> f32 {
        physics::landing_quality(&self.character, &self.tuning)
    }

    pub fn bounce_force(&self, landing_quality: f32) -> f32 {
        physics::bounce_force(landing_quality, &self.tuning)
    }

    /// Detect trampoline contact and, on contact, relaunch the character.
    ///
    /// The detector's current trick is taken before it is cleared by the
    /// bounce, so the caller can score it.
    pub fn resolve_contact(&mut self, detector: &mut TrickDetector) -> Option<Landing> {
        if !physics::check_contact(&self.character, &mut self.trampoline, &self.tuning) {
            return None;
        }

        let descent_speed = -self.character.velocity.y;
        let landing_quality = self.landing_quality();
        let bounce_force = self.bounce_force(landing_quality);
        let trick = detector.current_trick().cloned();
        let drift = physics::launch_drift(&self.character, bounce_force, self.lean, &self.tuning);

        self.character.position.y = self.trampoline.surface_height();
        physics::apply_bounce(&mut self.character, bounce_force, drift, detector);

        debug!(
            "Trampoline contact: descent {:.2} m/s, quality {:.2}, force {:.2}, drift {:.2}, compression {:.3}",
            descent_speed,
            landing_quality,
            bounce_force,
            drift,
            self.trampoline.compression()
        );

        Some(Landing {
            descent_speed,
            landing_quality,
            bounce_force,
            compression: self.trampoline.compression(),
            trick,
        })
    }
}
