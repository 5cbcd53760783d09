//! Rendering systems for the solar system viewer.
//!
//! This module provides the planet spheres, starfield, and scene lighting.

mod background;
pub mod bodies;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::PlanetPlugin;

// Re-export for use in other modules
pub use self::bodies::{spin_planets, Planet, Spin, ROTATION_STEP};

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((PlanetPlugin, BackgroundPlugin));
    }
}
