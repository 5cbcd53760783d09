//! Common test utilities for integration tests.

use bevy::prelude::*;
use orrery::catalog::{self, PlanetSpec};

/// Create a minimal Bevy app for testing without rendering.
pub fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app
}

/// Look up a planet from the catalog by name.
///
/// # Panics
/// Panics if the catalog has no planet with that name.
pub fn planet(name: &str) -> PlanetSpec {
    catalog::planets()
        .into_iter()
        .find(|spec| spec.name == name)
        .unwrap_or_else(|| panic!("no planet named {name}"))
}
