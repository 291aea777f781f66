use bevy::prelude::*;

use simulation::lights::{light_rig, OrbitPath, LIGHT_INTENSITY, LIGHT_RANGE};

#[derive(Component)]
pub struct OrbitLight {
    pub path: OrbitPath,
}

pub fn spawn_orbit_lights(mut commands: Commands) {
    for spec in light_rig() {
        commands.spawn((
            PointLight {
                color: spec.color,
                intensity: LIGHT_INTENSITY,
                range: LIGHT_RANGE,
                shadows_enabled: false,
                ..default()
            },
            Transform::from_translation(spec.spawn),
            OrbitLight { path: spec.path },
        ));
    }
}

/// Reposition each light along its orbit from the shared time sample. Only x
/// and z move; spawn height and light identity are fixed for the lifetime of
/// the scene.
pub fn update_orbit_lights(time: Res<Time>, mut lights: Query<(&OrbitLight, &mut Transform)>) {
    let t = time.elapsed_secs();
    for (light, mut transform) in &mut lights {
        let p = light.path.position(t);
        transform.translation.x = p.x;
        transform.translation.z = p.y;
    }
}
