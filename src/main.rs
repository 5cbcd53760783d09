//! Orrery - Interactive Solar System Viewer
//!
//! A desktop application rendering a small labeled solar system with
//! orbit/pan/zoom camera controls and a click-to-inspect info card.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orrery::camera::CameraPlugin;
use orrery::picking::PickingPlugin;
use orrery::render::RenderPlugin;
use orrery::selection::Selection;
use orrery::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(Selection::default())
        // Add viewer plugins
        .add_plugins((CameraPlugin, RenderPlugin, PickingPlugin, UiPlugin))
        .run();
}
