//! Scoring domain: key-value persistence for the high score.

use bevy::prelude::*;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Key the high score is stored under.
pub const HIGH_SCORE_KEY: &str = "trampoline_tricks.high_score";

/// Error type for key-value store writes.
#[derive(Debug)]
pub struct StoreError {
    pub key: String,
    pub message: String,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to store '{}': {}", self.key, self.message)
    }
}

/// String key-value storage provided by the host.
pub trait KeyValueStore: Send + Sync + fmt::Debug {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store, lost on exit.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON object of string values on disk.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!("Ignoring corrupt save file {}: {}", path.display(), e);
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_to_disk(&self, key: &str) -> Result<(), StoreError> {
        let store_error = |message: String| StoreError {
            key: key.to_string(),
            message,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| store_error(format!("IO error: {}", e)))?;
        }
        let json = serde_json::to_string_pretty(&self.values)
            .map_err(|e| store_error(format!("Serialize error: {}", e)))?;
        fs::write(&self.path, json).map_err(|e| store_error(format!("IO error: {}", e)))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        self.write_to_disk(key)
    }
}

/// Read the stored high score. Missing or corrupt values read as zero.
pub fn read_high_score(store: &dyn KeyValueStore, key: &str) -> u32 {
    let Some(raw) = store.get(key) else {
        return 0;
    };
    raw.trim().parse::<u32>().unwrap_or_else(|_| {
        warn!("Stored high score '{}' is not a number, using 0", raw);
        0
    })
}

/// Persist the high score as a base-10 integer string.
pub fn write_high_score(
    store: &mut dyn KeyValueStore,
    key: &str,
    high_score: u32,
) -> Result<(), StoreError> {
    store.set(key, &high_score.to_string())
}
