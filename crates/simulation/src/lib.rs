use bevy::prelude::*;

pub mod config;
pub mod heightfield;
pub mod lights;
pub mod noise_field;
pub mod params;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<params::TerrainParams>()
            .init_resource::<heightfield::ScrollOffset>()
            .add_systems(Startup, noise_field::seed_noise_field)
            .add_systems(Update, heightfield::advance_scroll);
    }
}
