//! Core domain: tags shared by every gameplay domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body shape held by the character while airborne.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum BodyShape {
    #[default]
    Straight,
    Tuck,
    Pike,
    Straddle,
    /// Pose derived from a freeform drawn silhouette
    Custom,
}

impl BodyShape {
    pub const ALL: [BodyShape; 5] = [
        BodyShape::Straight,
        BodyShape::Tuck,
        BodyShape::Pike,
        BodyShape::Straddle,
        BodyShape::Custom,
    ];

    /// Difficulty multiplier applied to full rotations performed in this shape.
    pub fn difficulty_multiplier(self) -> f32 {
        match self {
            BodyShape::Straight => 1.0,
            BodyShape::Tuck => 1.2,
            BodyShape::Pike => 1.5,
            BodyShape::Straddle => 1.8,
            BodyShape::Custom => 2.0,
        }
    }

    /// How much faster the body spins in this shape for the same input.
    /// Compact shapes rotate faster.
    pub fn spin_factor(self) -> f32 {
        match self {
            BodyShape::Straight => 1.0,
            BodyShape::Tuck => 1.6,
            BodyShape::Pike => 1.3,
            BodyShape::Straddle => 1.15,
            BodyShape::Custom => 1.1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BodyShape::Straight => "straight",
            BodyShape::Tuck => "tuck",
            BodyShape::Pike => "pike",
            BodyShape::Straddle => "straddle",
            BodyShape::Custom => "custom",
        }
    }
}

impl fmt::Display for BodyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
