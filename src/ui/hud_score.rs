//! UI domain: score, high score and combo display.

use bevy::prelude::*;

use crate::core::FrameSnapshot;

pub const HUD_PADDING: f32 = 16.0;

/// Marker for the score HUD container
#[derive(Component)]
pub struct ScoreHud;

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct HighScoreText;

#[derive(Component)]
pub struct ComboText;

pub(crate) fn spawn_score_hud(mut commands: Commands) {
    commands
        .spawn((
            ScoreHud,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                ScoreText,
                Text::new("Score: 0"),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.95, 0.95)),
            ));
            parent.spawn((
                HighScoreText,
                Text::new("Best: 0"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.85, 0.5)),
            ));
            parent.spawn((
                ComboText,
                Text::new(""),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.5, 0.85, 0.95)),
            ));
        });
}

/// Combo label, empty until at least one combo link.
pub fn combo_label(combo_count: u32) -> String {
    if combo_count == 0 {
        String::new()
    } else {
        format!("Combo x{}", combo_count)
    }
}

pub(crate) fn update_score_hud(
    snapshot: Res<FrameSnapshot>,
    mut score_query: Query<&mut Text, (With<ScoreText>, Without<HighScoreText>, Without<ComboText>)>,
    mut high_query: Query<&mut Text, (With<HighScoreText>, Without<ScoreText>, Without<ComboText>)>,
    mut combo_query: Query<&mut Text, (With<ComboText>, Without<ScoreText>, Without<HighScoreText>)>,
) {
    if !snapshot.is_changed() {
        return;
    }
    for mut text in &mut score_query {
        **text = format!("Score: {}", snapshot.total_score);
    }
    for mut text in &mut high_query {
        **text = format!("Best: {}", snapshot.high_score);
    }
    for mut text in &mut combo_query {
        **text = combo_label(snapshot.combo_count);
    }
}
