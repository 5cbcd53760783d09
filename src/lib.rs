//! Orrery - Interactive Solar System Viewer
//!
//! A library crate providing the scene, camera, and selection components
//! of the viewer for testing and integration purposes.

pub mod camera;
pub mod catalog;
pub mod picking;
pub mod render;
pub mod selection;
pub mod ui;
