//! Scoring domain: trick points, combos, novelty bonus and high score persistence.

mod engine;
mod events;
mod resources;
mod store;
mod systems;


pub use engine::{ScoreEngine, ScoreState, base_points};
pub use events::TrickScored;
pub use resources::ScoreTuning;
pub use store::{
    HIGH_SCORE_KEY, JsonFileStore, KeyValueStore, MemoryStore, StoreError, read_high_score,
    write_high_score,
};

use bevy::prelude::*;
use std::path::PathBuf;

use crate::core::TickSet;
use crate::scoring::systems::{reset_score_on_restart, score_landings};

/// Scoring plugin. Without a save file the high score lives in memory only.
#[derive(Debug, Default)]
pub struct ScoringPlugin {
    pub save_path: Option<PathBuf>,
}

impl ScoringPlugin {
    pub fn with_save_file(path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: Some(path.into()),
        }
    }
}

impl Plugin for ScoringPlugin {
    fn build(&self, app: &mut App) {
        let tuning = app
            .world()
            .get_resource::<ScoreTuning>()
            .cloned()
            .unwrap_or_default();

        let store: Box<dyn KeyValueStore> = match &self.save_path {
            Some(path) => Box::new(JsonFileStore::open(path.clone())),
            None => Box::new(MemoryStore::default()),
        };
        let engine = ScoreEngine::new(tuning.clone(), store);
        info!("High score loaded: {}", engine.high_score());

        app.insert_resource(engine)
            .insert_resource(tuning)
            .add_message::<TrickScored>()
            .add_systems(Update, reset_score_on_restart.before(TickSet::Input))
            .add_systems(Update, score_landings.in_set(TickSet::Scoring));
    }
}
