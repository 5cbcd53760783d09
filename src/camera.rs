//! Camera system for the solar system viewer.
//!
//! Provides orbit, pan, and zoom controls around a focus point. The camera
//! plugin owns its control state directly as a component on the camera
//! entity; nothing else reads or writes it.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};
use bevy_egui::EguiContexts;

/// Initial camera distance from the origin along the +Z axis.
pub const CAMERA_DISTANCE: f32 = 20.0;

/// Minimum orbit distance (closest zoom).
pub const MIN_DISTANCE: f32 = 2.0;

/// Maximum orbit distance (furthest zoom).
pub const MAX_DISTANCE: f32 = 200.0;

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Orbit sensitivity in radians per pixel of mouse motion.
pub const ORBIT_SENSITIVITY: f32 = 0.005;

/// Pan speed as a fraction of orbit distance per pixel.
pub const PAN_SPEED: f32 = 0.001;

/// Pitch limit keeping the camera short of the poles.
pub const PITCH_LIMIT: f32 = 1.54;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Orbit-camera control state: spherical position around a focus point.
#[derive(Component, Clone, Debug)]
pub struct OrbitCamera {
    /// Point the camera orbits around and looks at.
    pub focus: Vec3,
    /// Rotation around the world Y axis, radians.
    pub yaw: f32,
    /// Elevation above the XZ plane, radians.
    pub pitch: f32,
    /// Distance from the focus point.
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            distance: CAMERA_DISTANCE,
        }
    }
}

impl OrbitCamera {
    /// Compute the camera transform for the current control state.
    pub fn transform(&self) -> Transform {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0);
        Transform {
            translation: self.focus + rotation * Vec3::new(0.0, 0.0, self.distance),
            rotation,
            ..default()
        }
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera).add_systems(
            Update,
            (camera_orbit, camera_pan, camera_zoom, apply_camera_state).chain(),
        );
    }
}

/// Spawn the main camera at the initial viewing distance.
fn setup_camera(mut commands: Commands) {
    let controls = OrbitCamera::default();
    let transform = controls.transform();
    commands.spawn((Camera3d::default(), transform, controls, MainCamera));
}

/// Handle left mouse button drag for orbiting.
fn camera_orbit(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut camera_query: Query<&mut OrbitCamera, With<MainCamera>>,
    mut contexts: EguiContexts,
) {
    if !mouse_buttons.pressed(MouseButton::Left) || mouse_motion.delta == Vec2::ZERO {
        return;
    }

    if egui_wants_pointer(&mut contexts) {
        return;
    }

    let Ok(mut controls) = camera_query.single_mut() else {
        return;
    };

    controls.yaw -= mouse_motion.delta.x * ORBIT_SENSITIVITY;
    controls.pitch = (controls.pitch - mouse_motion.delta.y * ORBIT_SENSITIVITY)
        .clamp(-PITCH_LIMIT, PITCH_LIMIT);
}

/// Handle right mouse button drag for panning the focus point.
fn camera_pan(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut camera_query: Query<&mut OrbitCamera, With<MainCamera>>,
    mut contexts: EguiContexts,
) {
    if !mouse_buttons.pressed(MouseButton::Right) || mouse_motion.delta == Vec2::ZERO {
        return;
    }

    if egui_wants_pointer(&mut contexts) {
        return;
    }

    let Ok(mut controls) = camera_query.single_mut() else {
        return;
    };

    // Move the focus in the camera plane, scaled by distance so panning
    // covers comparable screen distance at any zoom level
    let rotation = Quat::from_euler(EulerRot::YXZ, controls.yaw, controls.pitch, 0.0);
    let right = rotation * Vec3::X;
    let up = rotation * Vec3::Y;
    let scale = controls.distance * PAN_SPEED;

    let delta = mouse_motion.delta * scale;
    controls.focus -= right * delta.x;
    controls.focus += up * delta.y; // Invert Y for natural feel
}

/// Handle mouse scroll wheel for zoom.
fn camera_zoom(
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut camera_query: Query<&mut OrbitCamera, With<MainCamera>>,
    mut contexts: EguiContexts,
) {
    if mouse_scroll.delta.y == 0.0 {
        return;
    }

    if egui_wants_pointer(&mut contexts) {
        return;
    }

    let Ok(mut controls) = camera_query.single_mut() else {
        return;
    };

    // Logarithmic zoom: multiply distance by factor based on scroll direction
    let zoom_factor = 1.0 - mouse_scroll.delta.y * ZOOM_SPEED;
    controls.distance = (controls.distance * zoom_factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
}

/// Write the control state into the camera transform.
fn apply_camera_state(mut camera_query: Query<(&OrbitCamera, &mut Transform), With<MainCamera>>) {
    let Ok((controls, mut transform)) = camera_query.single_mut() else {
        return;
    };
    *transform = controls.transform();
}

/// True when egui currently wants pointer input, meaning the cursor is over
/// an overlay window and camera controls should not react.
fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    match contexts.ctx_mut() {
        Ok(ctx) => ctx.wants_pointer_input(),
        Err(_) => false,
    }
}
