//! Per-frame terrain height update.
//!
//! Every vertex of the plane is re-sampled from the noise field each frame.
//! The sample coordinate for a vertex is the global scroll offset plus a
//! phase proportional to the vertex's (row, col) cell index, so the surface
//! appears to flow as the offset advances.

use bevy::prelude::*;

use crate::config::{CELL_HEIGHT, CELL_ORIGIN_OFFSET, CELL_WIDTH, SAMPLE_STEP};
use crate::noise_field::NoiseField;
use crate::params::TerrainParams;

/// Scroll accumulator for the noise sample window.
///
/// `x` advances by the speed parameter once per frame and grows without
/// bound. `y` is pinned at zero: the field only ever scrolls along one axis,
/// with the row/col phase supplying variation on the other.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct ScrollOffset {
    pub x: f32,
    pub y: f32,
}

impl ScrollOffset {
    pub fn advance(&mut self, speed: f32) {
        self.x += speed;
        self.y = 0.0;
    }
}

/// Advance the scroll offset once per rendered frame. Frame-stepped on
/// purpose: the scroll rate rides the display refresh rate, it is not
/// delta-time compensated.
pub fn advance_scroll(params: Res<TerrainParams>, mut offset: ResMut<ScrollOffset>) {
    offset.advance(params.speed);
}

/// Derive a vertex's (row, col) cell index from its planar position.
///
/// Positions are shifted by `CELL_ORIGIN_OFFSET` before flooring; spacing
/// comes from the nominal config extents (see `config`). Monotonic in both
/// coordinates.
pub fn cell_indices(x: f32, y: f32) -> (i32, i32) {
    let row = ((y + CELL_ORIGIN_OFFSET) / CELL_HEIGHT).floor() as i32;
    let col = ((x + CELL_ORIGIN_OFFSET) / CELL_WIDTH).floor() as i32;
    (row, col)
}

/// Noise-sample coordinates for a cell index at the given scroll offset.
pub fn sample_point(offset: ScrollOffset, row: i32, col: i32) -> (f32, f32) {
    let tx = offset.x + row as f32 * SAMPLE_STEP;
    let ty = offset.y + col as f32 * SAMPLE_STEP;
    (tx, ty)
}

/// Rewrite the height of every vertex in a flat position buffer in place.
///
/// Each entry is `[x, height, y]`: the plane spans world X/Z, the height sits
/// in the middle component and is the only one mutated. Total over all
/// inputs; no allocation.
pub fn update_heights(
    positions: &mut [[f32; 3]],
    noise: &NoiseField,
    offset: ScrollOffset,
    height_scale: f32,
) {
    for p in positions.iter_mut() {
        let (row, col) = cell_indices(p[0], p[2]);
        let (tx, ty) = sample_point(offset, row, col);
        p[1] = noise.sample(tx, ty) * height_scale;
    }
}
