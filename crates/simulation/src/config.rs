pub const PLANE_WIDTH: f32 = 200.0;
pub const PLANE_HEIGHT: f32 = 200.0;
pub const PLANE_SUBDIVISIONS_X: usize = 150;
pub const PLANE_SUBDIVISIONS_Y: usize = 150;

/// Cell spacing is derived from the nominal extents above, never from live
/// mesh bounds. The mesh in `rendering` is built from these same constants;
/// `heightfield::cell_indices` is only correct while that coupling holds.
pub const CELL_WIDTH: f32 = PLANE_WIDTH / PLANE_SUBDIVISIONS_X as f32;
pub const CELL_HEIGHT: f32 = PLANE_HEIGHT / PLANE_SUBDIVISIONS_Y as f32;

/// Vertex positions are shifted by this before cell indexing, so the cell
/// lattice origin does not sit at the plane corner.
pub const CELL_ORIGIN_OFFSET: f32 = 10.0;

/// Noise phase advance per grid row/column.
pub const SAMPLE_STEP: f32 = 0.025;
