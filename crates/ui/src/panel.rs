//! Debug parameter panel.
//!
//! One egui window: sliders for the scroll speed and height scale over their
//! declared ranges, the wireframe toggle, and a read-only diagnostics
//! section. Writes go straight into `TerrainParams`; the frame systems read
//! them on the same schedule, so no further synchronization is involved.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::input::CursorState;
use simulation::heightfield::ScrollOffset;
use simulation::params::{self, TerrainParams};

pub fn terrain_panel_ui(
    mut contexts: EguiContexts,
    mut terrain: ResMut<TerrainParams>,
    offset: Res<ScrollOffset>,
    cursor: Res<CursorState>,
) {
    egui::Window::new("Terrain")
        .resizable(false)
        .default_width(240.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.spacing_mut().item_spacing.y = 8.0;

            ui.add(
                egui::Slider::new(&mut terrain.speed, params::SPEED_MIN..=params::SPEED_MAX)
                    .text("speed"),
            );
            ui.add(
                egui::Slider::new(&mut terrain.height, params::HEIGHT_MIN..=params::HEIGHT_MAX)
                    .text("height"),
            );
            ui.checkbox(&mut terrain.wireframe, "wireframe");

            ui.separator();

            ui.label(format!("scroll offset: {:.3}", offset.x));
            ui.label(format!(
                "cursor ndc: ({:.2}, {:.2})",
                cursor.ndc.x, cursor.ndc.y
            ));
        });
}
