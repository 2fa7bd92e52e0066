//! Shared corridor data for the generator.
//!
//! This crate intentionally avoids any ECS types. It exposes the sine path,
//! the per-segment box layout and the camera rig keyframes as plain values the
//! generator can translate into scene entities.

mod params;
pub use params::{CorridorParams, ParamsError};

mod path;
pub use path::{center_x, centerline, forward_y};

mod decoration;
pub use decoration::WallDecoration;

mod materials;
pub use materials::{palette, MaterialRole, MaterialSpec};

mod segment;
pub use segment::{build_segment, segments, BoxVolume, SegmentPart, SegmentVolumes};

mod rig;
pub use rig::{animation_length, rig_keyframe, rig_keyframes, RigKeyframe, CAMERA_REST_BACK};

mod orient;
pub use orient::{track_to, WORLD_UP};

pub mod builtins;
