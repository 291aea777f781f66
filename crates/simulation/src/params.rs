use bevy::prelude::*;

pub const SPEED_MIN: f32 = 0.001;
pub const SPEED_MAX: f32 = 0.01;
pub const HEIGHT_MIN: f32 = 1.0;
pub const HEIGHT_MAX: f32 = 10.0;

/// Live tunables exposed in the debug panel.
///
/// Single writer per field: the panel mutates these, the frame systems only
/// read them. Everything runs on the main schedule, so the per-frame read is
/// coherent without extra synchronization. No validation beyond the declared
/// ranges; the panel sliders enforce them.
#[derive(Resource, Debug, Clone, Copy)]
pub struct TerrainParams {
    /// Scroll offset advance per frame.
    pub speed: f32,
    /// Multiplier applied to the raw noise sample, so heights span
    /// [-height, height].
    pub height: f32,
    /// Render the surface as wireframe.
    pub wireframe: bool,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            speed: 0.001,
            height: 5.0,
            wireframe: true,
        }
    }
}
