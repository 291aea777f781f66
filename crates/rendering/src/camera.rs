use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use simulation::config::{PLANE_HEIGHT, PLANE_WIDTH};

const ZOOM_SPEED: f32 = 0.15;
const MIN_DISTANCE: f32 = 5.0;
const MAX_DISTANCE: f32 = 300.0;
const MIN_PITCH: f32 = 5.0 * std::f32::consts::PI / 180.0;
const MAX_PITCH: f32 = 85.0 * std::f32::consts::PI / 180.0;
const ORBIT_SENSITIVITY: f32 = 0.005;
const PAN_SENSITIVITY: f32 = 0.05;

/// Orbital camera model: the camera orbits around a focus point on the plane.
#[derive(Resource)]
pub struct OrbitCamera {
    /// Point the camera looks at
    pub focus: Vec3,
    /// Horizontal rotation in radians
    pub yaw: f32,
    /// Elevation angle in radians (clamped between MIN_PITCH and MAX_PITCH)
    pub pitch: f32,
    /// Distance from focus point
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Start pose: eye near (5, 5, 30), looking at the plane center.
        Self {
            focus: Vec3::ZERO,
            yaw: 0.165,
            pitch: 0.162,
            distance: 30.8,
        }
    }
}

#[derive(Resource, Default)]
pub struct CameraOrbitDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

#[derive(Resource, Default)]
pub struct CameraPanDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

pub fn setup_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();
    let (pos, look_at) = orbit_to_transform(&orbit);

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 45.0_f32.to_radians(),
            near: 1.0,
            far: 1000.0,
            ..default()
        }),
        Transform::from_translation(pos).looking_at(look_at, Vec3::Y),
    ));
    commands.insert_resource(orbit);
}

fn clamp_focus(focus: &mut Vec3) {
    focus.x = focus.x.clamp(-PLANE_WIDTH / 2.0, PLANE_WIDTH / 2.0);
    focus.z = focus.z.clamp(-PLANE_HEIGHT / 2.0, PLANE_HEIGHT / 2.0);
}

fn orbit_to_transform(orbit: &OrbitCamera) -> (Vec3, Vec3) {
    // Spherical to cartesian offset from focus
    let x = orbit.distance * orbit.pitch.cos() * orbit.yaw.sin();
    let y = orbit.distance * orbit.pitch.sin();
    let z = orbit.distance * orbit.pitch.cos() * orbit.yaw.cos();
    let pos = orbit.focus + Vec3::new(x, y, z);
    (pos, orbit.focus)
}

/// True while egui is handling the pointer; drags must not start then.
fn pointer_captured_by_ui(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}

/// System: apply OrbitCamera state to the actual camera Transform each frame.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let (pos, look_at) = orbit_to_transform(&orbit);
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = Transform::from_translation(pos).looking_at(look_at, Vec3::Y);
}

/// Left-mouse drag: orbit (horizontal = yaw, vertical = pitch).
pub fn camera_orbit_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut drag: ResMut<CameraOrbitDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) && !pointer_captured_by_ui(&mut contexts) {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }

    if buttons.just_released(MouseButton::Left) {
        drag.dragging = false;
    }

    if drag.dragging {
        if let Some(pos) = window.cursor_position() {
            let delta = pos - drag.last_pos;
            orbit.yaw += delta.x * ORBIT_SENSITIVITY;
            orbit.pitch = (orbit.pitch + delta.y * ORBIT_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
            drag.last_pos = pos;
        }
    }
}

/// Right-mouse drag: pan focus along the plane.
pub fn camera_pan_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut drag: ResMut<CameraPanDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let scale = orbit.distance * PAN_SENSITIVITY / 30.0;

    if buttons.just_pressed(MouseButton::Right) && !pointer_captured_by_ui(&mut contexts) {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }

    if buttons.just_released(MouseButton::Right) {
        drag.dragging = false;
    }

    if drag.dragging {
        if let Some(pos) = window.cursor_position() {
            let delta = pos - drag.last_pos;
            // Rotate pan direction by current yaw
            let cos_yaw = orbit.yaw.cos();
            let sin_yaw = orbit.yaw.sin();
            let world_x = -delta.x * cos_yaw - delta.y * sin_yaw;
            let world_z = delta.x * sin_yaw - delta.y * cos_yaw;
            orbit.focus.x += world_x * scale;
            orbit.focus.z += world_z * scale;
            clamp_focus(&mut orbit.focus);
            drag.last_pos = pos;
        }
    }
}

/// Scroll wheel: zoom (change distance).
pub fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
    mut orbit: ResMut<OrbitCamera>,
) {
    if pointer_captured_by_ui(&mut contexts) {
        scroll_evts.clear();
        return;
    }
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        let factor = 1.0 - dy * ZOOM_SPEED;
        orbit.distance = (orbit.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_preserves_distance() {
        let orbit = OrbitCamera {
            focus: Vec3::new(3.0, 0.0, -7.0),
            yaw: 1.2,
            pitch: 0.6,
            distance: 42.0,
        };
        let (pos, look_at) = orbit_to_transform(&orbit);
        assert!((pos.distance(look_at) - 42.0).abs() < 1e-3);
        assert_eq!(look_at, orbit.focus);
    }

    #[test]
    fn test_default_pose_matches_start_position() {
        let (pos, _) = orbit_to_transform(&OrbitCamera::default());
        assert!((pos - Vec3::new(5.0, 5.0, 30.0)).length() < 0.2, "pos = {pos}");
    }

    #[test]
    fn test_positive_pitch_is_above_focus() {
        let orbit = OrbitCamera {
            pitch: 0.5,
            ..Default::default()
        };
        let (pos, _) = orbit_to_transform(&orbit);
        assert!(pos.y > orbit.focus.y);
    }

    #[test]
    fn test_clamp_focus_stays_on_plane() {
        let mut focus = Vec3::new(500.0, 0.0, -500.0);
        clamp_focus(&mut focus);
        assert_eq!(focus.x, PLANE_WIDTH / 2.0);
        assert_eq!(focus.z, -PLANE_HEIGHT / 2.0);
    }
}
