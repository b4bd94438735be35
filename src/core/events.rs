//! Core domain: session-wide messages.

use bevy::ecs::message::Message;

/// Request to reset the session: character, trampoline, tricks and score.
/// The persisted high score survives.
#[derive(Debug, Default)]
pub struct RestartRequested;

impl Message for RestartRequested {}
