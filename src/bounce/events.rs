//! Bounce domain: contact and safety-floor messages.

use bevy::ecs::message::Message;

use crate::bounce::simulator::Landing;

/// The character hit the trampoline and was relaunched.
#[derive(Debug)]
pub struct TrampolineContact {
    pub landing: Landing,
}

impl Message for TrampolineContact {}

/// The character missed the trampoline and came to rest on the safety floor.
#[derive(Debug)]
pub struct FellOff;

impl Message for FellOff {}
