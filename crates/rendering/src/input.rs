use bevy::prelude::*;
use bevy::window::CursorMoved;

/// Last cursor position in normalized device coordinates ([-1, 1] on both
/// axes, +y up). Surfaced in the debug panel readout; no other consumer.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct CursorState {
    pub ndc: Vec2,
}

pub fn normalized_cursor(position: Vec2, window_size: Vec2) -> Vec2 {
    Vec2::new(
        (position.x / window_size.x) * 2.0 - 1.0,
        1.0 - (position.y / window_size.y) * 2.0,
    )
}

pub fn track_cursor(
    mut moves: EventReader<CursorMoved>,
    windows: Query<&Window>,
    mut cursor: ResMut<CursorState>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    for ev in moves.read() {
        cursor.ndc = normalized_cursor(ev.position, size);
    }
}
