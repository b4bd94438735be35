//! UI domain: transient trick label.
//!
//! Shows the trick in progress while airborne, then the scored result after
//! landing. The label fades out over its last second.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::scoring::TrickScored;
use crate::tricks::TrickDetected;

pub const BANNER_SECS: f32 = 2.0;
pub const FADE_SECS: f32 = 1.0;

/// Marker for the trick label text
#[derive(Component)]
pub struct TrickBannerText;

#[derive(Resource, Debug, Default)]
pub struct TrickBanner {
    text: String,
    remaining: f32,
}

impl TrickBanner {
    pub fn show(&mut self, text: String, secs: f32) {
        self.text = text;
        self.remaining = secs.max(0.0);
    }

    pub fn tick(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt.max(0.0)).max(0.0);
        if self.remaining == 0.0 {
            self.text.clear();
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Opacity in [0, 1].
    pub fn alpha(&self) -> f32 {
        (self.remaining / FADE_SECS).clamp(0.0, 1.0)
    }
}

/// Label for a scored landing, e.g. `double tuck flip +640 NEW!`.
pub fn scored_label(scored: &TrickScored) -> String {
    let mut label = format!("{} +{}", scored.trick, scored.points);
    if scored.novel {
        label.push_str(" NEW!");
    }
    if scored.combo_count > 0 {
        label.push_str(&format!(" (combo x{})", scored.combo_count));
    }
    label
}

pub(crate) fn spawn_trick_banner(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            top: Val::Percent(20.0),
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_child((
            TrickBannerText,
            Text::new(""),
            TextFont {
                font_size: 40.0,
                ..default()
            },
            TextColor(Color::srgb(1.0, 0.9, 0.3)),
        ));
}

pub(crate) fn show_trick_labels(
    mut detected: MessageReader<TrickDetected>,
    mut scored: MessageReader<TrickScored>,
    mut banner: ResMut<TrickBanner>,
) {
    for event in detected.read() {
        banner.show(event.trick.to_string(), BANNER_SECS);
    }
    for event in scored.read() {
        banner.show(scored_label(event), BANNER_SECS);
    }
}

pub(crate) fn update_trick_banner(
    time: Res<Time>,
    mut banner: ResMut<TrickBanner>,
    mut query: Query<(&mut Text, &mut TextColor), With<TrickBannerText>>,
) {
    banner.tick(time.delta_secs());
    for (mut text, mut color) in &mut query {
        if text.as_str() != banner.text() {
            **text = banner.text().to_string();
        }
        color.0 = color.0.with_alpha(banner.alpha());
    }
}
