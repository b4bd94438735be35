//! Core domain: game state and per-tick system ordering.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Playing,
    Paused,
}

/// Ordered stages of one simulation tick.
///
/// Input is polled first, then the pose is updated and motion integrated.
/// Rotation is tracked for tricks before trampoline contact is resolved,
/// landings are scored, and the frame snapshot is published last.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    Input,
    Pose,
    Motion,
    Tracking,
    Contact,
    Scoring,
    Publish,
}
