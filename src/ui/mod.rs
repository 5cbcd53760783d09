//! UI module providing the egui-based overlay.

pub mod icons;
mod info_panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            // Font initialization must run before any UI that uses icons
            .add_systems(
                EguiPrimaryContextPass,
                (icons::setup_fonts, info_panel::info_panel).chain(),
            );
    }
}
