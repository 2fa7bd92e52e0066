use serde::{Deserialize, Serialize};

use crate::{CorridorParams, MaterialRole};

/// Decoration applied to the left wall of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallDecoration {
    Standard,
    Accent,
}

impl WallDecoration {
    /// Even steps are standard, odd steps are accent.
    pub fn for_step(step: u32) -> Self {
        if step % 2 == 0 {
            Self::Standard
        } else {
            Self::Accent
        }
    }

    pub fn material(self) -> MaterialRole {
        match self {
            Self::Standard => MaterialRole::WallDark,
            Self::Accent => MaterialRole::WallAccent,
        }
    }

    pub fn height_scale(self, params: &CorridorParams) -> f32 {
        match self {
            Self::Standard => 1.0,
            Self::Accent => params.accent_height_scale,
        }
    }

    /// Center height that keeps the scaled wall's base on the floor plane.
    pub fn center_height(self, params: &CorridorParams) -> f32 {
        params.base_height * self.height_scale(params)
    }
}
