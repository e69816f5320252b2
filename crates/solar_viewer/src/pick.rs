use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use glam::Vec3;

use crate::ui::UiState;
use crate::{BodyIndex, Sim};

/// Maps a left click to a body hit, if any, and opens the info popup for
/// the nearest hit body.
pub fn click(
    buttons: Res<Input<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    bodies: Query<(&BodyIndex, &GlobalTransform)>,
    sim: Res<Sim>,
    mut ui_state: ResMut<UiState>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = windows.get_single() else {
        return;
    };

    let Some(cursor) = window.cursor_position() else {
        return;
    };

    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };

    let Some(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    let mut hit: Option<(usize, f32)> = None;

    for (idx, transform) in bodies.iter() {
        let radius = sim.0.body(idx.0).sphere_radius;

        let Some(t) = ray_sphere(
            ray.origin,
            ray.direction,
            transform.translation(),
            radius,
        ) else {
            continue;
        };

        if hit.map_or(true, |(_, best)| t < best) {
            hit = Some((idx.0, t));
        }
    }

    if let Some((idx, _)) = hit {
        info!("selected {}", sim.0.body(idx).name);

        ui_state.selected_body = Some(idx);
        ui_state.info_visible = true;
    }
}

/// Distance along a ray to its nearest intersection with a sphere.
///
/// `direction` must be normalized. Returns `None` when the ray misses or
/// the sphere lies entirely behind the origin.
pub fn ray_sphere(
    origin: Vec3,
    direction: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let to_center = center - origin;
    let proj = to_center.dot(direction);

    let closest_sq = to_center.length_squared() - proj * proj;
    let radius_sq = radius * radius;

    if closest_sq > radius_sq {
        return None;
    }

    let half_chord = (radius_sq - closest_sq).sqrt();

    let near = proj - half_chord;
    let far = proj + half_chord;

    // Prefer the near face; fall back to the far one when the origin is
    // inside the sphere.
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        Some(far)
    } else {
        None
    }
}
