use bevy::prelude::*;
use solar_orbits::{Center, TWO_PI};

use crate::{Sim, State};

/// Draws every orbit as a gizmo line loop.
///
/// Each ellipse is sampled around its center's live position, so a moon's
/// orbit line follows its planet. Root orbits are white, satellite orbits
/// cyan, as in the original scene.
pub fn orbits(mut lines: Gizmos, sim: Res<Sim>, state: Res<State>) {
    if !state.draw_orbits {
        return;
    }

    let subdivisions = state.orbit_subdivisions.max(3);

    for idx in 0..sim.0.len() {
        let body = sim.0.body(idx);

        // The star record rests at the origin and has no orbit to draw.
        if body.orbit_radius_x <= 0.0 {
            continue;
        }

        let offset = sim.0.registry().center_position(idx);

        let color = match sim.0.registry().center(idx) {
            Center::Root => Color::WHITE,
            Center::Body(_) => Color::CYAN,
        };

        let mut prev = offset + body.orbit_offset_at(0.0);

        for i in 1..=subdivisions {
            let angle = i as f32 * TWO_PI / subdivisions as f32;
            let next = offset + body.orbit_offset_at(angle);

            lines.line(prev, next, color);

            prev = next;
        }
    }
}
