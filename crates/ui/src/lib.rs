use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod panel;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Update, panel::terrain_panel_ui);
    }
}
