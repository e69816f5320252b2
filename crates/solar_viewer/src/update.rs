use bevy::prelude::*;

use crate::{BodyIndex, Sim};

/// Advances the simulation by exactly one frame and applies the resulting
/// positions and spins to the meshes.
///
/// Progress is measured in rendered frames, not wall-clock time, matching
/// the original behavior: playback rate follows the display cadence.
pub fn bodies(
    mut sim: ResMut<Sim>,
    mut bodies: Query<(&BodyIndex, &mut Transform)>,
) {
    sim.0.step();

    for (idx, mut transform) in bodies.iter_mut() {
        transform.translation = sim.0.position(idx.0);
        transform.rotation = Quat::from_rotation_y(sim.0.body(idx.0).spin);
    }
}
