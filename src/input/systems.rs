//! Input domain: systems turning keyboard and pointer input into gameplay messages.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::{GameState, RestartRequested};
use crate::input::bindings::{
    CLEAR_STROKE_KEY, PAUSE_KEY, RESTART_KEY, TOGGLE_DRAWING_KEYS, rotation_axis, shape_hotkey,
};
use crate::input::resources::{InputTuning, PlayerInput};
use crate::shape::{
    FreehandDrawState, ShapeSelected, ShapeTuning, StrokeCompleted, normalize_screen_point,
};

pub(crate) fn apply_input_tuning(
    tuning: Res<InputTuning>,
    mut draw_state: ResMut<FreehandDrawState>,
) {
    if tuning.drawing_starts_enabled {
        draw_state.set_enabled(true);
        info!("Drawing mode enabled at startup");
    }
}

pub(crate) fn read_rotation(
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<InputTuning>,
    mut input: ResMut<PlayerInput>,
) {
    let mut axis = rotation_axis(&keyboard);
    if tuning.invert_spin {
        axis.x = -axis.x;
    }
    input.rotation = axis;
}

pub(crate) fn select_shape_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut selections: MessageWriter<ShapeSelected>,
) {
    for key in keyboard.get_just_pressed() {
        if let Some(shape) = shape_hotkey(*key) {
            selections.write(ShapeSelected { shape });
        }
    }
}

pub(crate) fn toggle_drawing_mode(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut draw_state: ResMut<FreehandDrawState>,
) {
    if keyboard.any_just_pressed(TOGGLE_DRAWING_KEYS) {
        draw_state.toggle();
        info!(
            "Drawing mode {}",
            if draw_state.is_enabled() { "on" } else { "off" }
        );
    }
    if keyboard.just_pressed(CLEAR_STROKE_KEY) {
        draw_state.clear();
    }
}

/// Capture a freeform stroke while the left mouse button is held.
pub(crate) fn capture_stroke(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    tuning: Res<ShapeTuning>,
    mut draw_state: ResMut<FreehandDrawState>,
    mut strokes: MessageWriter<StrokeCompleted>,
) {
    if !draw_state.is_enabled() {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };

    if mouse.just_pressed(MouseButton::Left) {
        draw_state.begin_stroke();
    }

    if mouse.pressed(MouseButton::Left) {
        let canvas = Vec2::new(window.width(), window.height());
        let point = window
            .cursor_position()
            .and_then(|cursor| normalize_screen_point(cursor, canvas, tuning.draw_scale));
        if let Some(point) = point {
            draw_state.add_sample(point, tuning.min_sample_distance);
        }
    }

    if mouse.just_released(MouseButton::Left) {
        if let Some(points) = draw_state.finish_stroke() {
            debug!("Stroke finished with {} points", points.len());
            strokes.write(StrokeCompleted { points });
        }
    }
}

pub(crate) fn request_restart(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut restarts: MessageWriter<RestartRequested>,
) {
    if keyboard.just_pressed(RESTART_KEY) {
        restarts.write(RestartRequested);
    }
}

pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !keyboard.just_pressed(PAUSE_KEY) {
        return;
    }
    match state.get() {
        GameState::Playing => {
            info!("Paused");
            next_state.set(GameState::Paused);
        }
        GameState::Paused => {
            info!("Resumed");
            next_state.set(GameState::Playing);
        }
    }
}
