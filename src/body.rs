use serde::{Deserialize, Serialize};

use crate::{vec3, Num, Vec3};

/// One planet or moon, as it appears in the registry data.
///
/// Field names follow the camelCase wire format of the registry source.
/// `angle` is the current orbital phase in radians and is mutated every
/// frame; it accumulates without wraparound. `spin` is the accumulated
/// axial rotation, runtime-only state that never round-trips through the
/// data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialBody {
    pub name: String,
    /// Name of the body this one orbits, or [`ROOT_CENTER`] for a body
    /// orbiting the scene origin.
    ///
    /// [`ROOT_CENTER`]: crate::constants::ROOT_CENTER
    pub center: String,
    pub sphere_radius: Num,
    /// Semi-major axis of the orbit ellipse.
    pub orbit_radius_x: Num,
    pub eccentricity: Num,
    #[serde(default)]
    pub angle: Num,
    /// Per-frame axial spin increment, before step and speed scaling.
    pub rotation_speed: Num,
    /// Per-frame orbital increment, before step and speed scaling.
    pub revolution_speed: Num,
    /// Texture resource reference. Opaque to the simulation.
    #[serde(default)]
    pub path: String,
    #[serde(skip)]
    pub spin: Num,
}

impl CelestialBody {
    /// Semi-minor axis, derived from the semi-major axis and eccentricity.
    pub fn orbit_radius_y(&self) -> Num {
        self.orbit_radius_x * (1.0 - self.eccentricity.powi(2)).sqrt()
    }

    /// Offset from the orbit center at the body's current phase angle.
    ///
    /// Standard ellipse parametrization in the horizontal plane:
    /// `(rx * cos(angle), 0, ry * sin(angle))`.
    pub fn orbit_offset(&self) -> Vec3 {
        self.orbit_offset_at(self.angle)
    }

    pub fn orbit_offset_at(&self, angle: Num) -> Vec3 {
        vec3(
            self.orbit_radius_x * angle.cos(),
            0.0,
            self.orbit_radius_y() * angle.sin(),
        )
    }
}
