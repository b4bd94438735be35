//! Scoring domain: messages for scored tricks.

use bevy::ecs::message::Message;

use crate::tricks::Trick;

/// A landed trick was scored.
#[derive(Debug)]
pub struct TrickScored {
    pub trick: Trick,
    pub points: u32,
    pub landing_quality: f32,
    pub combo_count: u32,
    pub novel: bool,
    pub total_score: u32,
}

impl Message for TrickScored {}
