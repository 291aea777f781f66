//! Frame-loop tests driving both per-frame updaters with synthetic time
//! instead of a live render loop:
//! - Scroll offset accumulates across frames and moves the sample window
//! - Height buffer stays bounded and deterministic frame by frame
//! - A parameter change between frames takes effect on the next update
//! - Light orbits follow the rig table for any replayed time sample
//!
//! Run: cargo test -p simulation --test frame_loop

use simulation::config::{
    CELL_HEIGHT, CELL_WIDTH, PLANE_HEIGHT, PLANE_SUBDIVISIONS_X, PLANE_SUBDIVISIONS_Y, PLANE_WIDTH,
};
use simulation::heightfield::{update_heights, ScrollOffset};
use simulation::lights::{light_rig, ORBIT_RADIUS};
use simulation::noise_field::NoiseField;
use simulation::params::TerrainParams;

fn plane_positions() -> Vec<[f32; 3]> {
    let mut positions = Vec::with_capacity((PLANE_SUBDIVISIONS_X + 1) * (PLANE_SUBDIVISIONS_Y + 1));
    for r in 0..=PLANE_SUBDIVISIONS_Y {
        for c in 0..=PLANE_SUBDIVISIONS_X {
            let x = -PLANE_WIDTH / 2.0 + c as f32 * CELL_WIDTH;
            let y = -PLANE_HEIGHT / 2.0 + r as f32 * CELL_HEIGHT;
            positions.push([x, 0.0, y]);
        }
    }
    positions
}

// ---------------------------------------------------------------------------
// 1. Terrain updater over a run of synthetic frames
// ---------------------------------------------------------------------------

#[test]
fn test_hundred_frames_stay_bounded_and_move() {
    let noise = NoiseField::new(42);
    let params = TerrainParams::default();
    let mut offset = ScrollOffset::default();
    let mut positions = plane_positions();

    let mut previous: Option<Vec<[f32; 3]>> = None;
    for frame in 0..100 {
        offset.advance(params.speed);
        update_heights(&mut positions, &noise, offset, params.height);

        for p in &positions {
            assert!(
                p[1].abs() <= params.height,
                "frame {frame}: height {} out of range",
                p[1]
            );
        }
        if let Some(prev) = &previous {
            assert_ne!(prev, &positions, "frame {frame}: surface did not move");
        }
        previous = Some(positions.clone());
    }

    assert!((offset.x - 100.0 * params.speed).abs() < 1e-4);
    assert_eq!(offset.y, 0.0);
}

#[test]
fn test_replaying_a_frame_reproduces_it() {
    let noise = NoiseField::new(7);
    let params = TerrainParams::default();

    let run = |frames: usize| {
        let mut offset = ScrollOffset::default();
        let mut positions = plane_positions();
        for _ in 0..frames {
            offset.advance(params.speed);
            update_heights(&mut positions, &noise, offset, params.height);
        }
        positions
    };

    assert_eq!(run(25), run(25));
}

#[test]
fn test_height_change_applies_on_next_frame() {
    let noise = NoiseField::new(3);
    let mut params = TerrainParams::default();
    let mut offset = ScrollOffset::default();
    let mut positions = plane_positions();

    offset.advance(params.speed);
    update_heights(&mut positions, &noise, offset, params.height);

    // The panel writes between frames; the very next update must reflect it,
    // scaled from the raw noise with nothing left over from the old scale.
    params.height = 10.0;
    let mut rescaled = positions.clone();
    update_heights(&mut rescaled, &noise, offset, params.height);

    for (old, new) in positions.iter().zip(&rescaled) {
        assert!((new[1] - old[1] * 2.0).abs() < 1e-5);
    }
}

// ---------------------------------------------------------------------------
// 2. Light updater against replayed time samples
// ---------------------------------------------------------------------------

#[test]
fn test_orbits_replay_identically() {
    let rig = light_rig();
    for spec in &rig {
        for step in 0..50 {
            let t = step as f32 * 0.25;
            assert_eq!(spec.path.position(t), spec.path.position(t));
        }
    }
}

#[test]
fn test_orbit_positions_match_rig_table_at_t10() {
    let rig = light_rig();
    let t = 10.0;
    let expected = [
        ((1.0f32).sin(), (2.0f32).cos()),
        ((3.0f32).cos(), (4.0f32).sin()),
        ((5.0f32).sin(), (6.0f32).sin()),
        ((7.0f32).sin(), (8.0f32).cos()),
    ];
    for (spec, (ex, ez)) in rig.iter().zip(expected) {
        let p = spec.path.position(t);
        assert!((p.x - ex * ORBIT_RADIUS).abs() < 1e-3);
        assert!((p.y - ez * ORBIT_RADIUS).abs() < 1e-3);
    }
}
