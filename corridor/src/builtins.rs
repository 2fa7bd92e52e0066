use crate::CorridorParams;

// The reference flythrough: 120 segments, 600 frames.
pub fn default_corridor() -> CorridorParams {
    CorridorParams::default()
}

/// A shorter, twistier corridor: a wider swing at a higher rate with a quicker
/// camera and a closer aim point so the turns stay readable.
pub fn slalom_corridor() -> CorridorParams {
    CorridorParams {
        num_steps: 60,
        half_width: 3.5,
        advance_z: 2.0,
        amplitude: 24.0,
        frequency: 0.12,
        frames_per_step: 3,
        eye_height: 1.8,
        lookahead_offset: 3,
        ..CorridorParams::default()
    }
}
