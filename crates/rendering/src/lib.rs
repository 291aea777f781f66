use bevy::prelude::*;

pub mod camera;
pub mod input;
pub mod light_render;
pub mod terrain_render;

use camera::{CameraOrbitDrag, CameraPanDrag};
use input::CursorState;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraOrbitDrag>()
            .init_resource::<CameraPanDrag>()
            .init_resource::<CursorState>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    terrain_render::spawn_terrain_surface,
                    light_render::spawn_orbit_lights,
                ),
            )
            .add_systems(
                Update,
                (
                    camera::camera_orbit_drag,
                    camera::camera_pan_drag,
                    camera::camera_zoom,
                    camera::apply_orbit_camera,
                ),
            )
            .add_systems(
                Update,
                (
                    terrain_render::update_terrain_heights
                        .after(simulation::heightfield::advance_scroll),
                    terrain_render::apply_wireframe_toggle,
                    light_render::update_orbit_lights,
                    input::track_cursor,
                ),
            );
    }
}
