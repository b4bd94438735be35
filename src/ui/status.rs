//! UI domain: status line for pause, drawing mode, rejected shapes and missed landings.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::bounce::FellOff;
use crate::core::{GameState, RestartRequested};
use crate::shape::{FreehandDrawState, ShapeRejected};
use crate::ui::hud_score::HUD_PADDING;

const NOTICE_SECS: f32 = 3.0;
const FELL_OFF_NOTICE: &str = "Missed the trampoline! Press R to restart";

/// Marker for the status text
#[derive(Component)]
pub struct StatusText;

/// Notice appended to the status line.
///
/// Timed notices expire on their own. A pinned notice stays until cleared
/// and is not replaced by timed ones.
#[derive(Resource, Debug, Default)]
pub struct StatusNotice {
    text: Option<String>,
    /// `None` while pinned
    remaining: Option<f32>,
}

impl StatusNotice {
    pub fn show(&mut self, text: impl Into<String>, secs: f32) {
        if self.is_pinned() {
            return;
        }
        self.text = Some(text.into());
        self.remaining = Some(secs.max(0.0));
    }

    pub fn pin(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
        self.remaining = None;
    }

    pub fn clear(&mut self) {
        self.text = None;
        self.remaining = None;
    }

    pub fn tick(&mut self, dt: f32) {
        let Some(remaining) = self.remaining else {
            return;
        };
        let remaining = (remaining - dt).max(0.0);
        self.remaining = Some(remaining);
        if remaining <= 0.0 {
            self.clear();
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.text.is_some() && self.remaining.is_none()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Compose the status line. Pause wins over drawing mode; a notice is appended.
pub fn status_line(paused: bool, drawing: bool, notice: Option<&str>) -> String {
    let mode = if paused {
        Some("PAUSED (P to resume, R to restart)")
    } else if drawing {
        Some("Drawing: drag out one side of the body (F to exit, Esc to clear)")
    } else {
        None
    };

    match (mode, notice) {
        (Some(mode), Some(notice)) => format!("{} | {}", mode, notice),
        (Some(mode), None) => mode.to_string(),
        (None, Some(notice)) => notice.to_string(),
        (None, None) => String::new(),
    }
}

pub(crate) fn spawn_status_text(mut commands: Commands) {
    commands.spawn((
        StatusText,
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.8, 0.85)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_PADDING),
            bottom: Val::Px(HUD_PADDING),
            ..default()
        },
    ));
}

pub(crate) fn track_status_notices(
    time: Res<Time>,
    mut rejected: MessageReader<ShapeRejected>,
    mut fell_off: MessageReader<FellOff>,
    mut restarts: MessageReader<RestartRequested>,
    mut notice: ResMut<StatusNotice>,
) {
    notice.tick(time.delta_secs());

    for event in rejected.read() {
        notice.show(format!("Shape rejected: {}", event.reason), NOTICE_SECS);
    }
    if fell_off.read().count() > 0 {
        notice.pin(FELL_OFF_NOTICE);
    }
    if restarts.read().count() > 0 {
        notice.clear();
    }
}

pub(crate) fn update_status_text(
    state: Res<State<GameState>>,
    draw_state: Res<FreehandDrawState>,
    notice: Res<StatusNotice>,
    mut query: Query<&mut Text, With<StatusText>>,
) {
    let line = status_line(
        *state.get() == GameState::Paused,
        draw_state.is_enabled(),
        notice.text(),
    );
    for mut text in &mut query {
        if text.as_str() != line {
            **text = line.clone();
        }
    }
}
