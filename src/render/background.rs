//! Background rendering for the solar system viewer.
//!
//! Provides starfield and lighting systems.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

/// Inner radius of the starfield shell.
pub const STARFIELD_RADIUS: f32 = 100.0;

/// Radial depth of the starfield shell.
pub const STARFIELD_DEPTH: f32 = 50.0;

/// Number of background stars.
pub const STAR_COUNT: usize = 5000;

/// Star size multiplier.
pub const STAR_SIZE_FACTOR: f32 = 4.0;

/// Base star sphere radius before scaling.
const STAR_RADIUS: f32 = 0.05;

/// Brightness bands for depth fading: deeper stars render dimmer.
const FADE_BANDS: usize = 4;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_starfield, spawn_lighting));
    }
}

/// Sample a star position uniformly within the starfield shell.
pub fn star_position(rng: &mut impl Rng) -> Vec3 {
    // Uniform direction on the unit sphere via the z/angle method
    let z: f32 = rng.gen_range(-1.0..1.0);
    let theta: f32 = rng.gen_range(0.0..TAU);
    let planar = (1.0 - z * z).sqrt();
    let dir = Vec3::new(planar * theta.cos(), planar * theta.sin(), z);

    let radius = STARFIELD_RADIUS + rng.gen_range(0.0..STARFIELD_DEPTH);
    dir * radius
}

/// Spawn a starfield shell with randomly placed stars.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Small low-resolution sphere shared by every star
    let star_mesh = meshes.add(Sphere::new(STAR_RADIUS).mesh().uv(8, 6));

    // One grayscale material per fade band, dimmer toward the outer shell
    let band_materials: Vec<Handle<StandardMaterial>> = (0..FADE_BANDS)
        .map(|band| {
            let brightness = 1.0 - band as f32 / FADE_BANDS as f32 * 0.75;
            materials.add(StandardMaterial {
                base_color: Color::WHITE,
                emissive: LinearRgba::WHITE * brightness,
                unlit: true,
                ..default()
            })
        })
        .collect();

    let mut rng = rand::thread_rng();

    for _ in 0..STAR_COUNT {
        let position = star_position(&mut rng);
        let depth = (position.length() - STARFIELD_RADIUS) / STARFIELD_DEPTH;
        let band = ((depth * FADE_BANDS as f32) as usize).min(FADE_BANDS - 1);
        let scale = STAR_SIZE_FACTOR * rng.gen_range(0.5..1.5);

        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(band_materials[band].clone()),
            Transform::from_translation(position).with_scale(Vec3::splat(scale)),
        ));
    }

    info!("Spawned {STAR_COUNT} background stars");
}

/// Spawn lighting for the scene.
fn spawn_lighting(mut commands: Commands) {
    // Ambient light for general visibility
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });

    // Point light offset from the planet row
    commands.spawn((
        PointLight {
            range: 250.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0),
    ));

    info!("Scene lighting initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_positions_stay_within_shell() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let r = star_position(&mut rng).length();
            assert!(r >= STARFIELD_RADIUS - 1e-3);
            assert!(r <= STARFIELD_RADIUS + STARFIELD_DEPTH + 1e-3);
        }
    }

    #[test]
    fn star_positions_cover_all_octants() {
        let mut rng = rand::thread_rng();
        let mut seen = [false; 8];
        for _ in 0..1000 {
            let p = star_position(&mut rng);
            let octant = ((p.x > 0.0) as usize) << 2
                | ((p.y > 0.0) as usize) << 1
                | (p.z > 0.0) as usize;
            seen[octant] = true;
        }
        assert!(seen.iter().all(|&s| s), "starfield clustered: {seen:?}");
    }
}
