//! Tricks domain: detection messages.

use bevy::ecs::message::Message;

use crate::tricks::trick::Trick;

/// A trick was detected (or upgraded) mid-air.
#[derive(Debug)]
pub struct TrickDetected {
    pub trick: Trick,
}

impl Message for TrickDetected {}
