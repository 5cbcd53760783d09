//! Pointer picking for planets.
//!
//! Casts a ray from the cursor through the camera and selects the nearest
//! planet whose sphere the ray hits. A click is only registered when the
//! mouse barely moved between press and release, so orbit drags with the
//! same button never change the selection.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::camera::MainCamera;
use crate::render::Planet;
use crate::selection::Selection;

/// Maximum accumulated cursor travel (pixels) for a press to count as a click.
pub const CLICK_DRAG_THRESHOLD: f32 = 5.0;

/// Resource mirroring whether egui claims the pointer this frame.
///
/// Updated once per frame from the egui context so the click system can
/// consult it at both press and release time.
#[derive(Resource, Default)]
pub struct PointerOverUi(pub bool);

/// Resource tracking the in-flight mouse press.
#[derive(Resource, Default)]
pub struct ClickTracker {
    /// Whether a left press started outside the overlay UI.
    pub pressed: bool,
    /// Cursor travel accumulated since the press, in pixels.
    pub motion: f32,
}

/// Plugin providing click-to-select behaviour.
pub struct PickingPlugin;

impl Plugin for PickingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClickTracker>()
            .init_resource::<PointerOverUi>()
            .add_systems(Update, (track_pointer_over_ui, handle_planet_click).chain());
    }
}

/// Mirror egui's pointer claim into [`PointerOverUi`].
fn track_pointer_over_ui(mut contexts: EguiContexts, mut over_ui: ResMut<PointerOverUi>) {
    over_ui.0 = match contexts.ctx_mut() {
        Ok(ctx) => ctx.wants_pointer_input(),
        Err(_) => false,
    };
}

/// Whether a finished press counts as a planet click.
///
/// `armed` means the press started outside the overlay. A release over the
/// overlay belongs to the overlay even when the press was armed, and any
/// press that travelled at least [`CLICK_DRAG_THRESHOLD`] is a drag.
pub fn click_qualifies(armed: bool, motion: f32, over_ui_at_release: bool) -> bool {
    armed && !over_ui_at_release && motion < CLICK_DRAG_THRESHOLD
}

/// Track press/release of the left button and select the planet under the
/// cursor when a press qualifies as a click.
pub fn handle_planet_click(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    over_ui: Res<PointerOverUi>,
    mut tracker: ResMut<ClickTracker>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    planets: Query<(&Transform, &Planet)>,
    mut selection: ResMut<Selection>,
) {
    if mouse_buttons.just_pressed(MouseButton::Left) {
        // Presses starting over an egui window belong to the overlay
        tracker.pressed = !over_ui.0;
        tracker.motion = 0.0;
    }

    if mouse_buttons.pressed(MouseButton::Left) && tracker.pressed {
        tracker.motion += mouse_motion.delta.length();
    }

    if !mouse_buttons.just_released(MouseButton::Left) {
        return;
    }

    let armed = tracker.pressed;
    tracker.pressed = false;

    if !click_qualifies(armed, tracker.motion, over_ui.0) {
        return;
    }

    let Ok(window) = window_query.single() else {
        return;
    };

    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };

    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor_pos) else {
        return;
    };

    if let Some(name) = select_nearest_hit(ray.origin, *ray.direction, planets.iter(), &mut selection)
    {
        info!("Selected {name}");
    }
}

/// Select the nearest planet hit by the ray, returning its name.
///
/// Empty-space rays hit nothing and change nothing.
pub fn select_nearest_hit<'a>(
    origin: Vec3,
    direction: Vec3,
    planets: impl IntoIterator<Item = (&'a Transform, &'a Planet)>,
    selection: &mut Selection,
) -> Option<&'static str> {
    let mut closest: Option<(f32, &Planet)> = None;

    for (transform, planet) in planets {
        let hit = ray_sphere_intersection(origin, direction, transform.translation, planet.radius);

        if let Some(t) = hit {
            if closest.is_none_or(|(best, _)| t < best) {
                closest = Some((t, planet));
            }
        }
    }

    let (_, planet) = closest?;
    selection.select(planet.name, planet.description);
    Some(planet.name)
}

/// Distance along a ray to the first intersection with a sphere, if any.
///
/// `direction` must be normalized. Returns the nearest non-negative hit, so
/// a ray starting inside the sphere hits the far surface and spheres fully
/// behind the origin are missed.
pub fn ray_sphere_intersection(
    origin: Vec3,
    direction: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let near = -b - sqrt_d;
    if near >= 0.0 {
        return Some(near);
    }
    let far = -b + sqrt_d;
    (far >= 0.0).then_some(far)
}
