use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunable constants for one corridor run.
///
/// Coordinates follow the authoring convention: +X lateral, +Y forward, +Z up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorridorParams {
    /// Total corridor segments.
    pub num_steps: u32,
    /// Distance from the centerline to each wall.
    pub half_width: f32,
    /// Forward spacing between consecutive segments.
    pub advance_z: f32,
    /// Lateral swing of the sine path.
    pub amplitude: f32,
    /// Oscillation rate of the sine path (smaller = gentler curves).
    pub frequency: f32,
    /// Timeline frames spent per segment (smaller = faster flythrough).
    pub frames_per_step: u32,
    /// Vertical placement of the camera and its target.
    pub eye_height: f32,
    /// How many segments ahead the look-at target sits.
    pub lookahead_offset: u32,
    /// Center height of a standard wall; walls are unit cubes so this also
    /// puts their base on the floor plane.
    pub base_height: f32,
    /// Height multiplier for accent walls.
    pub accent_height_scale: f32,
    /// Floor overhang past each wall.
    pub floor_margin: f32,
    /// Floor half-thickness.
    pub floor_thickness: f32,
}

impl Default for CorridorParams {
    fn default() -> Self {
        Self {
            num_steps: 120,
            half_width: 4.5,
            advance_z: 2.0,
            amplitude: 18.0,
            frequency: 0.06,
            frames_per_step: 5,
            eye_height: 2.2,
            lookahead_offset: 5,
            base_height: 1.0,
            accent_height_scale: 1.6,
            floor_margin: 1.5,
            floor_thickness: 0.1,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("`{field}` must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("`frames_per_step` must be at least 1")]
    ZeroFramesPerStep,
    #[error("`half_width` must not be negative, got {0}")]
    NegativeHalfWidth(f32),
    #[error("`advance_z` must be positive, got {0}")]
    NonPositiveAdvance(f32),
    #[error("{num_steps} steps at {frames_per_step} frames each overflow the frame counter")]
    FrameOverflow { num_steps: u32, frames_per_step: u32 },
    #[error("looking {lookahead_offset} steps past the last of {num_steps} overflows the step index")]
    LookaheadOverflow { num_steps: u32, lookahead_offset: u32 },
}

impl CorridorParams {
    /// Rejects parameter sets that would break the keyframe ordering or mirror
    /// the walls.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let floats = [
            ("half_width", self.half_width),
            ("advance_z", self.advance_z),
            ("amplitude", self.amplitude),
            ("frequency", self.frequency),
            ("eye_height", self.eye_height),
            ("base_height", self.base_height),
            ("accent_height_scale", self.accent_height_scale),
            ("floor_margin", self.floor_margin),
            ("floor_thickness", self.floor_thickness),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(ParamsError::NotFinite { field, value });
            }
        }
        if self.frames_per_step == 0 {
            return Err(ParamsError::ZeroFramesPerStep);
        }
        if self.half_width < 0.0 {
            return Err(ParamsError::NegativeHalfWidth(self.half_width));
        }
        if self.advance_z <= 0.0 {
            return Err(ParamsError::NonPositiveAdvance(self.advance_z));
        }
        if self.num_steps.checked_mul(self.frames_per_step).is_none() {
            return Err(ParamsError::FrameOverflow {
                num_steps: self.num_steps,
                frames_per_step: self.frames_per_step,
            });
        }
        // Highest step the look-ahead target is ever placed at.
        if self
            .num_steps
            .saturating_sub(1)
            .checked_add(self.lookahead_offset)
            .is_none()
        {
            return Err(ParamsError::LookaheadOverflow {
                num_steps: self.num_steps,
                lookahead_offset: self.lookahead_offset,
            });
        }
        Ok(())
    }
}
