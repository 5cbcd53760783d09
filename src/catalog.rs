//! Static planet catalog for the viewer.
//!
//! The set of bodies is fixed at composition time; nothing creates or
//! removes planets at runtime.

use bevy::prelude::*;

/// Number of planets in the catalog.
pub const PLANET_COUNT: usize = 5;

/// Static configuration for one planet.
#[derive(Clone, Copy, Debug)]
pub struct PlanetSpec {
    /// Display name, unique within the catalog.
    pub name: &'static str,
    /// Free-form description shown in the info card.
    pub description: &'static str,
    /// Position in scene coordinates.
    pub position: Vec3,
    /// Sphere radius in scene units.
    pub radius: f32,
    /// Surface color.
    pub color: Color,
}

/// Errors produced by catalog validation.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("duplicate planet name: {0}")]
    DuplicateName(&'static str),
    #[error("non-positive radius {radius} for planet {name}")]
    NonPositiveRadius { name: &'static str, radius: f32 },
}

/// The full set of planets rendered by the scene.
pub fn planets() -> [PlanetSpec; PLANET_COUNT] {
    [
        PlanetSpec {
            name: "Earth",
            description: "Our home planet.",
            position: Vec3::new(0.0, 0.0, 0.0),
            radius: 1.0,
            color: Color::srgb(0.0, 0.0, 1.0),
        },
        PlanetSpec {
            name: "Mars",
            description: "The red planet.",
            position: Vec3::new(2.0, 0.0, 0.0),
            radius: 0.5,
            color: Color::srgb(1.0, 0.0, 0.0),
        },
        PlanetSpec {
            name: "Venus",
            description: "The second planet from the Sun.",
            position: Vec3::new(-2.0, 0.0, 0.0),
            radius: 0.9,
            color: Color::srgb(1.0, 1.0, 0.0),
        },
        PlanetSpec {
            name: "Jupiter",
            description: "The largest planet in our solar system.",
            position: Vec3::new(4.0, 0.0, 0.0),
            radius: 1.2,
            color: Color::srgb(1.0, 0.65, 0.0),
        },
        PlanetSpec {
            name: "Saturn",
            description: "Known for its ring system.",
            position: Vec3::new(-4.0, 0.0, 0.0),
            radius: 0.7,
            color: Color::srgb(0.0, 0.5, 0.0),
        },
    ]
}

/// Check catalog invariants: unique names and positive radii.
pub fn validate(specs: &[PlanetSpec]) -> Result<(), CatalogError> {
    for (i, spec) in specs.iter().enumerate() {
        if spec.radius <= 0.0 {
            return Err(CatalogError::NonPositiveRadius {
                name: spec.name,
                radius: spec.radius,
            });
        }
        if specs[..i].iter().any(|other| other.name == spec.name) {
            return Err(CatalogError::DuplicateName(spec.name));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_five_planets() {
        assert_eq!(planets().len(), PLANET_COUNT);
    }

    #[test]
    fn catalog_is_valid() {
        assert_eq!(validate(&planets()), Ok(()));
    }

    #[test]
    fn catalog_matches_configured_layout() {
        let specs = planets();
        let expected = [
            ("Earth", Vec3::new(0.0, 0.0, 0.0), 1.0),
            ("Mars", Vec3::new(2.0, 0.0, 0.0), 0.5),
            ("Venus", Vec3::new(-2.0, 0.0, 0.0), 0.9),
            ("Jupiter", Vec3::new(4.0, 0.0, 0.0), 1.2),
            ("Saturn", Vec3::new(-4.0, 0.0, 0.0), 0.7),
        ];
        for (spec, (name, position, radius)) in specs.iter().zip(expected) {
            assert_eq!(spec.name, name);
            assert_eq!(spec.position, position);
            assert_eq!(spec.radius, radius);
        }
    }

    #[test]
    fn validate_rejects_duplicate_names() {
        let mut specs = planets().to_vec();
        specs[1].name = "Earth";
        assert_eq!(validate(&specs), Err(CatalogError::DuplicateName("Earth")));
    }

    #[test]
    fn validate_rejects_non_positive_radius() {
        let mut specs = planets().to_vec();
        specs[2].radius = 0.0;
        assert_eq!(
            validate(&specs),
            Err(CatalogError::NonPositiveRadius {
                name: "Venus",
                radius: 0.0
            })
        );
    }
}
