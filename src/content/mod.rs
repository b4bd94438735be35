//! Content domain: loads gameplay tuning from RON and hands each domain its section.
//!
//! Add this plugin before the gameplay plugins. They read their tuning
//! resources while building and fall back to defaults when it is missing.

mod data;
mod loader;
mod validation;


pub use data::{GameTuning, TUNING_SCHEMA_VERSION};
pub use loader::{ContentLoadError, load_tuning, parse_tuning};
pub use validation::{ValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::{Path, PathBuf};

/// Default location of the tuning file, relative to the working directory.
pub const DEFAULT_TUNING_PATH: &str = "assets/data/tuning.ron";

pub struct ContentPlugin {
    pub path: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_TUNING_PATH),
        }
    }
}

impl ContentPlugin {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Load and validate tuning, falling back to defaults on any failure.
pub fn load_tuning_or_default(path: &Path) -> GameTuning {
    let tuning = match load_tuning(path) {
        Ok(tuning) => tuning,
        Err(e) => {
            warn!("{}; using default tuning", e);
            return GameTuning::default();
        }
    };

    let errors = validate_tuning(&tuning);
    if errors.is_empty() {
        return tuning;
    }

    for e in &errors {
        error!("Tuning validation error: {}", e);
    }
    warn!(
        "{} tuning validation error(s) in {}; using default tuning",
        errors.len(),
        path.display()
    );
    GameTuning::default()
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let tuning = load_tuning_or_default(&self.path);
        info!(
            "Tuning ready (schema v{}): gravity {}, bounce force {}..{}, combo window {}s",
            tuning.schema_version,
            tuning.bounce.gravity,
            tuning.bounce.base_bounce_force,
            tuning.bounce.max_bounce_force,
            tuning.score.combo_window_secs
        );

        let GameTuning {
            bounce,
            spin,
            shape,
            score,
            input,
            ..
        } = tuning;
        app.insert_resource(bounce)
            .insert_resource(spin)
            .insert_resource(shape)
            .insert_resource(score)
            .insert_resource(input);
    }
}
