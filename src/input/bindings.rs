//! Input domain: key bindings.

use bevy::prelude::*;

use crate::core::BodyShape;

pub const TOGGLE_DRAWING_KEYS: [KeyCode; 2] = [KeyCode::KeyF, KeyCode::Tab];
pub const CLEAR_STROKE_KEY: KeyCode = KeyCode::Escape;
pub const RESTART_KEY: KeyCode = KeyCode::KeyR;
pub const PAUSE_KEY: KeyCode = KeyCode::KeyP;

/// Preset shape bound to a number key.
pub fn shape_hotkey(key: KeyCode) -> Option<BodyShape> {
    match key {
        KeyCode::Digit1 => Some(BodyShape::Straight),
        KeyCode::Digit2 => Some(BodyShape::Tuck),
        KeyCode::Digit3 => Some(BodyShape::Pike),
        KeyCode::Digit4 => Some(BodyShape::Straddle),
        KeyCode::Digit5 => Some(BodyShape::Custom),
        _ => None,
    }
}

/// Rotation axis from the held keys. Each component is -1, 0 or 1.
pub fn rotation_axis(keyboard: &ButtonInput<KeyCode>) -> Vec2 {
    // Horizontal axis spins
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    Vec2::new(x, y)
}
