//! Seeded 2D coherent noise backing the terrain height field.

use bevy::prelude::*;
use fastnoise_lite::{FastNoiseLite, NoiseType};

/// Deterministic 2D noise function, stateless after construction.
///
/// OpenSimplex2 output is bounded to [-1, 1]; `heightfield::update_heights`
/// relies on that bound to keep vertex heights within the height-scale range.
#[derive(Resource)]
pub struct NoiseField {
    noise: FastNoiseLite,
}

impl NoiseField {
    pub fn new(seed: i32) -> Self {
        let mut noise = FastNoiseLite::with_seed(seed);
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        // Sample coordinates are used raw (scroll offset + row/col phase),
        // so the frequency multiplier must stay at 1.
        noise.set_frequency(Some(1.0));
        Self { noise }
    }

    pub fn sample(&self, x: f32, y: f32) -> f32 {
        self.noise.get_noise_2d(x, y)
    }
}

/// Startup: seed the process-wide noise field. A fresh seed per run gives
/// each launch a different surface; tests build their own `NoiseField` from
/// fixed seeds.
pub fn seed_noise_field(mut commands: Commands) {
    let seed = rand::random::<i32>();
    info!("noise field seed: {seed}");
    commands.insert_resource(NoiseField::new(seed));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_bounds() {
        let field = NoiseField::new(42);
        for i in 0..200 {
            for j in 0..200 {
                let v = field.sample(i as f32 * 0.13, j as f32 * 0.07);
                assert!((-1.0..=1.0).contains(&v), "sample {v} out of bounds");
            }
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let a = NoiseField::new(7);
        let b = NoiseField::new(7);
        for i in 0..100 {
            let (x, y) = (i as f32 * 0.31, i as f32 * -0.17);
            assert_eq!(a.sample(x, y), b.sample(x, y));
        }
    }

    #[test]
    fn test_seeds_produce_distinct_fields() {
        let a = NoiseField::new(1);
        let b = NoiseField::new(2);
        let differs = (0..100).any(|i| {
            let (x, y) = (i as f32 * 0.29, i as f32 * 0.41);
            a.sample(x, y) != b.sample(x, y)
        });
        assert!(differs, "different seeds should not agree everywhere");
    }
}
