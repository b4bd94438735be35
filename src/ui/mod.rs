//! UI domain: score HUD, trick label and status line.

mod hud_score;
mod status;
mod trick_banner;


pub use hud_score::combo_label;
pub use status::{StatusNotice, status_line};
pub use trick_banner::{TrickBanner, scored_label};

use bevy::prelude::*;

use crate::ui::hud_score::{spawn_score_hud, update_score_hud};
use crate::ui::status::{spawn_status_text, track_status_notices, update_status_text};
use crate::ui::trick_banner::{show_trick_labels, spawn_trick_banner, update_trick_banner};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrickBanner>()
            .init_resource::<StatusNotice>()
            .add_systems(
                Startup,
                (spawn_score_hud, spawn_trick_banner, spawn_status_text),
            )
            .add_systems(
                Update,
                (
                    update_score_hud,
                    (show_trick_labels, update_trick_banner).chain(),
                    (track_status_notices, update_status_text).chain(),
                ),
            );
    }
}
