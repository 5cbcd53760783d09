//! Planet spawning and idle rotation.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::catalog::{self, PlanetSpec};

/// Idle rotation increment in radians per rendered frame.
pub const ROTATION_STEP: f32 = 0.001;

/// Component marking an entity as a clickable planet.
#[derive(Component)]
pub struct Planet {
    /// Display name, unique among spawned planets.
    pub name: &'static str,
    /// Description shown in the info card.
    pub description: &'static str,
    /// Sphere radius in scene units, used for hit testing.
    pub radius: f32,
}

/// Accumulated idle-rotation angle in radians.
///
/// Owned exclusively by [`spin_planets`]; each planet's angle advances
/// independently of every other planet.
#[derive(Component, Default)]
pub struct Spin {
    pub angle: f32,
}

/// Plugin providing planet spawning and rotation.
pub struct PlanetPlugin;

impl Plugin for PlanetPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_planets)
            .add_systems(Update, spin_planets);
    }
}

/// Spawn every planet from the catalog.
fn spawn_planets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let specs = catalog::planets();
    if let Err(e) = catalog::validate(&specs) {
        error!("Refusing to spawn planets: {e}");
        return;
    }

    for spec in specs {
        spawn_planet(&mut commands, &mut meshes, &mut materials, &spec);
    }

    info!("Spawned {} planets", specs.len());
}

fn spawn_planet(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    spec: &PlanetSpec,
) {
    // 64x64 UV sphere, smooth enough for close-up zoom
    let mesh = meshes.add(Sphere::new(spec.radius).mesh().uv(64, 64));
    let material = materials.add(StandardMaterial {
        base_color: spec.color,
        ..default()
    });

    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::from_translation(spec.position),
        Planet {
            name: spec.name,
            description: spec.description,
            radius: spec.radius,
        },
        Spin::default(),
    ));
}

/// Advance each planet's idle rotation by one step.
///
/// The angle wraps modulo a full turn; rotation is purely cosmetic and no
/// other system reads it.
pub fn spin_planets(mut planets: Query<(&mut Spin, &mut Transform), With<Planet>>) {
    for (mut spin, mut transform) in planets.iter_mut() {
        spin.angle = (spin.angle + ROTATION_STEP) % TAU;
        transform.rotation = Quat::from_rotation_y(spin.angle);
    }
}
