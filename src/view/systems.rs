//! View domain: camera, sprites and the drawing overlay.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::bounce::BounceSimulator;
use crate::core::FrameSnapshot;
use crate::shape::{ActivePose, FreehandDrawState, ShapeProcessor, ShapeTuning};
use crate::view::components::{BodyPartSprite, TrampolineBed};
use crate::view::scene::{
    PIXELS_PER_METRE, bed_rect, body_part_count, body_parts, to_screen, torso_to_canvas,
};

const BODY_COLOR: Color = Color::srgb(0.95, 0.8, 0.65);
const TORSO_COLOR: Color = Color::srgb(0.25, 0.45, 0.85);
const BED_COLOR: Color = Color::srgb(0.15, 0.15, 0.2);
const FRAME_COLOR: Color = Color::srgb(0.55, 0.55, 0.6);

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn spawn_scene(
    mut commands: Commands,
    simulator: Res<BounceSimulator>,
    tuning: Res<ShapeTuning>,
) {
    let bounce = simulator.tuning();
    let frame_width = bounce.trampoline_radius * 2.0 + 0.3;

    // Frame
    commands.spawn((
        Sprite {
            color: FRAME_COLOR,
            custom_size: Some(Vec2::new(frame_width, 0.12) * PIXELS_PER_METRE),
            ..default()
        },
        Transform::from_translation(
            to_screen(Vec2::new(0.0, bounce.trampoline_rest_height)).extend(0.5),
        ),
    ));
    for side in [-1.0, 1.0] {
        let leg_top = bounce.trampoline_rest_height;
        let leg_bottom = bounce.floor_height;
        let centre = Vec2::new(side * frame_width * 0.5, (leg_top + leg_bottom) * 0.5);
        commands.spawn((
            Sprite {
                color: FRAME_COLOR,
                custom_size: Some(Vec2::new(0.1, leg_top - leg_bottom) * PIXELS_PER_METRE),
                ..default()
            },
            Transform::from_translation(to_screen(centre).extend(0.5)),
        ));
    }

    // Bed
    commands.spawn((
        TrampolineBed,
        Sprite {
            color: BED_COLOR,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
    ));

    // Body part pool: torso first
    for index in 0..body_part_count(&tuning) {
        commands.spawn((
            BodyPartSprite { index },
            Sprite {
                color: if index == 0 { TORSO_COLOR } else { BODY_COLOR },
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 2.0),
            Visibility::Hidden,
        ));
    }
}

pub(crate) fn update_trampoline(
    snapshot: Res<FrameSnapshot>,
    mut bed_query: Query<(&mut Transform, &mut Sprite), With<TrampolineBed>>,
) {
    let (centre, size) = bed_rect(
        snapshot.trampoline_rest_height,
        snapshot.trampoline_compression,
        snapshot.trampoline_radius,
    );
    for (mut transform, mut sprite) in &mut bed_query {
        transform.translation = to_screen(centre).extend(transform.translation.z);
        sprite.custom_size = Some(size * PIXELS_PER_METRE);
    }
}

pub(crate) fn update_body(
    snapshot: Res<FrameSnapshot>,
    active_pose: Res<ActivePose>,
    tuning: Res<ShapeTuning>,
    mut part_query: Query<(&BodyPartSprite, &mut Transform, &mut Sprite, &mut Visibility)>,
) {
    let parts = body_parts(
        snapshot.position.truncate(),
        snapshot.rotation,
        active_pose.pose(),
        &tuning,
    );

    for (part_sprite, mut transform, mut sprite, mut visibility) in &mut part_query {
        let Some(part) = parts.get(part_sprite.index) else {
            *visibility = Visibility::Hidden;
            continue;
        };
        transform.translation = to_screen(part.midpoint()).extend(transform.translation.z);
        transform.rotation = Quat::from_rotation_z(part.angle());
        sprite.custom_size = Some(part.size() * PIXELS_PER_METRE);
        *visibility = Visibility::Inherited;
    }
}

/// Torso guide and the stroke in progress, in window space.
pub(crate) fn draw_stroke_overlay(
    draw_state: Res<FreehandDrawState>,
    processor: Res<ShapeProcessor>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gizmos: Gizmos,
) {
    if !draw_state.is_enabled() {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let canvas = Vec2::new(window.width(), window.height());
    let scale = processor.tuning().draw_scale;

    let guide = processor.torso_guide();
    let centre = torso_to_canvas(guide.center, canvas, scale);
    let radius = torso_to_canvas(Vec2::splat(guide.radius), canvas, scale);
    gizmos.ellipse_2d(centre, radius, Color::srgba(1.0, 1.0, 1.0, 0.5));
    gizmos.line_2d(
        Vec2::new(0.0, -canvas.y * 0.5),
        Vec2::new(0.0, canvas.y * 0.5),
        Color::srgba(1.0, 1.0, 1.0, 0.15),
    );

    let stroke = draw_state
        .points()
        .iter()
        .map(|&point| torso_to_canvas(point, canvas, scale));
    gizmos.linestrip_2d(stroke, Color::srgb(1.0, 0.85, 0.2));
}
