//! Shape domain: messages between stroke capture, the processor and the simulation.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::core::BodyShape;
use crate::shape::processor::ShapeRejection;

/// A finished freeform stroke, in torso space.
#[derive(Debug)]
pub struct StrokeCompleted {
    pub points: Vec<Vec2>,
}

impl Message for StrokeCompleted {}

/// A discrete shape picked by the player.
#[derive(Debug)]
pub struct ShapeSelected {
    pub shape: BodyShape,
}

impl Message for ShapeSelected {}

/// The character's body shape changed (preset or accepted freeform pose).
#[derive(Debug)]
pub struct ShapeChanged {
    pub shape: BodyShape,
}

impl Message for ShapeChanged {}

/// A freeform stroke was rejected; the previous pose stays active.
#[derive(Debug)]
pub struct ShapeRejected {
    pub reason: ShapeRejection,
}

impl Message for ShapeRejected {}
