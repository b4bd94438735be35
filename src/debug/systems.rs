//! Debug systems: hotkeys, simulation readout and gizmo guides.

use bevy::prelude::*;

use crate::bounce::BounceSimulator;
use crate::core::{GameState, SessionClock};
use crate::debug::state::DebugState;
use crate::shape::ShapeProcessor;
use crate::tricks::TrickDetector;
use crate::view::{PIXELS_PER_METRE, to_screen};

/// Marker for the debug info overlay text
#[derive(Component)]
pub struct DebugInfoOverlay;

/// Toggle the readout with F1 or backtick, guides with F2
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.show_info = !debug_state.show_info;
        info!(
            "Debug info {}",
            if debug_state.show_info { "on" } else { "off" }
        );
    }
    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.show_guides = !debug_state.show_guides;
        info!(
            "Debug guides {}",
            if debug_state.show_guides { "on" } else { "off" }
        );
    }
}

/// Multi-line readout of the simulation state.
pub fn format_info(
    simulator: &BounceSimulator,
    detector: &TrickDetector,
    clock: &SessionClock,
    state: &GameState,
) -> String {
    let character = simulator.character();
    let trampoline = simulator.trampoline();
    let trick = detector
        .current_trick()
        .map(|trick| trick.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "Pos: ({:.2}, {:.2}, {:.2})\nVel: ({:.2}, {:.2}, {:.2})\nRot: {:.0} deg @ {:.2} rad/s\nAirborne: {}\nCompression: {:.3}{}\nTracked: {:.0} deg, {} flips\nTrick: {}\nClock: {:.1}s\nState: {:?}",
        character.position.x,
        character.position.y,
        character.position.z,
        character.velocity.x,
        character.velocity.y,
        character.velocity.z,
        character.rotation.to_degrees(),
        character.rotation_speed,
        character.airborne,
        trampoline.compression(),
        if trampoline.is_recovering() { " (recovering)" } else { "" },
        detector.rotation_total().to_degrees(),
        detector.completed_flips(),
        trick,
        clock.elapsed(),
        state
    )
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    simulator: Res<BounceSimulator>,
    detector: Res<TrickDetector>,
    clock: Res<SessionClock>,
    game_state: Res<State<GameState>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let Ok(mut text) = overlay_query.single_mut() {
        **text = format_info(&simulator, &detector, &clock, game_state.get());
    }
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new(""),
        TextFont {
            font_size: 13.0,
            ..default()
        },
        TextColor(Color::srgb(0.6, 1.0, 0.6)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(16.0),
            top: Val::Px(16.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
        ZIndex(500),
    ));
}

/// Contact band, safety floor, torso guide and limb anchors around the character.
pub(crate) fn draw_debug_guides(
    simulator: Res<BounceSimulator>,
    processor: Res<ShapeProcessor>,
    mut gizmos: Gizmos,
) {
    let tuning = simulator.tuning();
    let half_width = tuning.trampoline_radius + 1.0;
    let surface = simulator.trampoline().surface_height();

    let mut level = |height: f32, color: Color| {
        gizmos.line_2d(
            to_screen(Vec2::new(-half_width, height)),
            to_screen(Vec2::new(half_width, height)),
            color,
        );
    };
    level(surface + tuning.contact_epsilon, Color::srgb(0.3, 1.0, 0.3));
    level(surface - tuning.contact_depth, Color::srgb(1.0, 0.6, 0.2));
    level(tuning.floor_height, Color::srgb(1.0, 0.2, 0.2));

    let character = simulator.character();
    let centre = to_screen(character.position.truncate());
    let turn = Rot2::radians(-character.rotation);
    let guide = processor.torso_guide();
    gizmos.circle_2d(
        centre + turn * guide.center * PIXELS_PER_METRE,
        guide.radius * PIXELS_PER_METRE,
        Color::srgba(1.0, 1.0, 0.3, 0.6),
    );

    // Limb anchors, both sides
    let shape_tuning = processor.tuning();
    for anchor in [shape_tuning.shoulder(), shape_tuning.hip()] {
        for side in [anchor, Vec2::new(-anchor.x, anchor.y)] {
            gizmos.circle_2d(
                centre + turn * side * PIXELS_PER_METRE,
                3.0,
                Color::srgb(1.0, 0.4, 0.8),
            );
        }
    }
    gizmos.line_2d(
        centre,
        centre + Vec2::new(character.velocity.x, character.velocity.y) * PIXELS_PER_METRE * 0.1,
        Color::srgb(0.3, 0.8, 1.0),
    );
}
