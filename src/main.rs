use bevy::prelude::*;

use trampoline_tricks::{bounce, content, core, input, scoring, shape, tricks, ui, view};

const SAVE_FILE: &str = "save/trampoline_tricks.json";

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Trampoline Tricks".to_string(),
            resolution: (1280_u32, 720_u32).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    // Tuning must be loaded before the gameplay plugins build
    .add_plugins(content::ContentPlugin::default())
    .add_plugins((
        core::CorePlugin,
        shape::ShapePlugin,
        tricks::TricksPlugin,
        bounce::BouncePlugin,
        scoring::ScoringPlugin::with_save_file(SAVE_FILE),
        input::InputPlugin,
        view::ViewPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(trampoline_tricks::debug::DebugPlugin);

    app.run();
}
