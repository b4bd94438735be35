//! Trampoline trick game: bounce simulation, freeform body shapes, trick
//! detection and scoring, wired together as Bevy plugins.

pub mod bounce;
pub mod content;
pub mod core;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod geometry;
pub mod input;
pub mod scoring;
pub mod shape;
pub mod tricks;
pub mod ui;
pub mod view;
