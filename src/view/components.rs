//! View domain: sprite markers.

use bevy::prelude::*;

/// The trampoline bed, squashed by compression
#[derive(Component)]
pub struct TrampolineBed;

/// One pooled body part sprite. Index into the parts laid out each frame.
#[derive(Component)]
pub struct BodyPartSprite {
    pub index: usize,
}
