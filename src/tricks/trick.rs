//! Tricks domain: trick records.

use std::fmt;

use crate::core::BodyShape;

/// Closed set of tricks the detector can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrickKind {
    HalfFlip,
    Flip,
    TuckFlip,
    PikeFlip,
    StraddleFlip,
    CustomFlip,
}

impl TrickKind {
    /// Full-rotation trick performed in `shape`.
    pub fn full_rotation(shape: BodyShape) -> Self {
        match shape {
            BodyShape::Straight => TrickKind::Flip,
            BodyShape::Tuck => TrickKind::TuckFlip,
            BodyShape::Pike => TrickKind::PikeFlip,
            BodyShape::Straddle => TrickKind::StraddleFlip,
            BodyShape::Custom => TrickKind::CustomFlip,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrickKind::HalfFlip => "half flip",
            TrickKind::Flip => "flip",
            TrickKind::TuckFlip => "tuck flip",
            TrickKind::PikeFlip => "pike flip",
            TrickKind::StraddleFlip => "straddle flip",
            TrickKind::CustomFlip => "custom flip",
        }
    }
}

impl fmt::Display for TrickKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A detected trick. Read-only once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Trick {
    pub kind: TrickKind,
    /// Multiple of 180
    pub rotation_degrees: u32,
    /// Body shape held when the trick was detected
    pub shape: BodyShape,
    pub difficulty_multiplier: f32,
}

impl Trick {
    /// `flips` completed full rotations in `shape`.
    pub fn full(shape: BodyShape, flips: u32) -> Self {
        Self {
            kind: TrickKind::full_rotation(shape),
            rotation_degrees: 360 * flips,
            shape,
            difficulty_multiplier: shape.difficulty_multiplier(),
        }
    }

    pub fn half(shape: BodyShape) -> Self {
        let difficulty_multiplier = match shape {
            BodyShape::Custom => 1.0,
            _ => 0.5,
        };
        Self {
            kind: TrickKind::HalfFlip,
            rotation_degrees: 180,
            shape,
            difficulty_multiplier,
        }
    }

    /// Completed full rotations, at least one for scoring purposes.
    pub fn rotation_count(&self) -> u32 {
        (self.rotation_degrees / 360).max(1)
    }
}

impl fmt::Display for Trick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rotation_degrees / 360 {
            0 | 1 => write!(f, "{}", self.kind),
            2 => write!(f, "double {}", self.kind),
            3 => write!(f, "triple {}", self.kind),
            n => write!(f, "{}x {}", n, self.kind),
        }
    }
}
