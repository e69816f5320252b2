use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::constants::ROOT_CENTER;
use crate::error::RegistryError;
use crate::{CelestialBody, Vec3};

/// What a body orbits, resolved once at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Center {
    /// The scene origin (the star's resting place).
    Root,
    /// Index of another body in the registry. The centered body's angle is
    /// re-read on every position query, never snapshotted.
    Body(usize),
}

/// Validated, ordered collection of celestial bodies.
///
/// Records are created once at load time and persist for the lifetime of
/// the registry; there is no dynamic insertion or removal. Center names
/// are resolved to indices up front so the per-frame path is lookup-free.
#[derive(Debug, Clone)]
pub struct Registry {
    bodies: Vec<CelestialBody>,
    centers: Vec<Center>,
}

impl Registry {
    /// Validates a sequence of records into a registry.
    ///
    /// Fails fast on the first malformed record: duplicate names, center
    /// references that resolve to nothing, satellite chains deeper than
    /// star -> planet -> moon, eccentricities outside `[0, 1)` and
    /// non-finite or non-positive geometry are all load errors rather
    /// than silent defaults.
    pub fn from_records(bodies: Vec<CelestialBody>) -> Result<Self, RegistryError> {
        if bodies.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut index_by_name = HashMap::with_capacity(bodies.len());

        for (idx, body) in bodies.iter().enumerate() {
            if index_by_name.insert(body.name.clone(), idx).is_some() {
                return Err(RegistryError::DuplicateName {
                    name: body.name.clone(),
                });
            }
        }

        for body in &bodies {
            validate_parameters(body)?;
        }

        let centers = bodies
            .iter()
            .map(|body| {
                if body.center == ROOT_CENTER {
                    return Ok(Center::Root);
                }

                match index_by_name.get(&body.center) {
                    Some(&idx) => Ok(Center::Body(idx)),
                    None => Err(RegistryError::UnknownCenter {
                        body: body.name.clone(),
                        center: body.center.clone(),
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Two-level hierarchy only: a moon's center must orbit the root.
        // This also rejects self-referential centers.
        for (body, center) in bodies.iter().zip(&centers) {
            if let Center::Body(idx) = center {
                if centers[*idx] != Center::Root {
                    return Err(RegistryError::NestedSatellite {
                        body: body.name.clone(),
                        center: body.center.clone(),
                    });
                }
            }
        }

        Ok(Self { bodies, centers })
    }

    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        Self::from_records(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, RegistryError> {
        Self::from_records(serde_json::from_reader(reader)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn body(&self, idx: usize) -> &CelestialBody {
        &self.bodies[idx]
    }

    pub fn body_mut(&mut self, idx: usize) -> &mut CelestialBody {
        &mut self.bodies[idx]
    }

    pub fn bodies(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    pub fn bodies_mut(&mut self) -> impl Iterator<Item = &mut CelestialBody> {
        self.bodies.iter_mut()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|body| body.name == name)
    }

    pub fn center(&self, idx: usize) -> Center {
        self.centers[idx]
    }

    /// Current position of the orbit center of the body at `idx`.
    pub fn center_position(&self, idx: usize) -> Vec3 {
        match self.centers[idx] {
            Center::Root => Vec3::ZERO,
            Center::Body(center_idx) => self.position(center_idx),
        }
    }

    /// Current position of the body at `idx`.
    ///
    /// A root orbiter sits on its own ellipse around the origin. A
    /// satellite is the vector sum of its center's current position and
    /// its own ellipse offset; both phase angles advance independently.
    pub fn position(&self, idx: usize) -> Vec3 {
        self.center_position(idx) + self.bodies[idx].orbit_offset()
    }
}

fn validate_parameters(body: &CelestialBody) -> Result<(), RegistryError> {
    let invalid = |field: &'static str, value| RegistryError::InvalidValue {
        body: body.name.clone(),
        field,
        value,
    };

    if !body.eccentricity.is_finite() || !(0.0..1.0).contains(&body.eccentricity) {
        return Err(RegistryError::Eccentricity {
            body: body.name.clone(),
            value: body.eccentricity,
        });
    }

    if !body.sphere_radius.is_finite() || body.sphere_radius <= 0.0 {
        return Err(invalid("sphereRadius", body.sphere_radius));
    }

    // Zero is allowed so the star record can rest at the origin.
    if !body.orbit_radius_x.is_finite() || body.orbit_radius_x < 0.0 {
        return Err(invalid("orbitRadiusX", body.orbit_radius_x));
    }

    if !body.angle.is_finite() {
        return Err(invalid("angle", body.angle));
    }

    if !body.rotation_speed.is_finite() {
        return Err(invalid("rotationSpeed", body.rotation_speed));
    }

    if !body.revolution_speed.is_finite() {
        return Err(invalid("revolutionSpeed", body.revolution_speed));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Num;

    fn record(name: &str, center: &str) -> CelestialBody {
        CelestialBody {
            name: name.to_string(),
            center: center.to_string(),
            sphere_radius: 1.0,
            orbit_radius_x: 10.0,
            eccentricity: 0.0,
            angle: 0.0,
            rotation_speed: 1.0,
            revolution_speed: 1.0,
            path: String::new(),
            spin: 0.0,
        }
    }

    #[test]
    fn resolves_two_level_hierarchy() {
        let registry = Registry::from_records(vec![
            record("Earth", "Sun"),
            record("Moon", "Earth"),
        ])
        .unwrap();

        assert_eq!(registry.center(0), Center::Root);
        assert_eq!(registry.center(1), Center::Body(0));
    }

    #[test]
    fn rejects_unknown_center() {
        let err = Registry::from_records(vec![record("Moon", "Earth")]).unwrap_err();

        assert!(matches!(
            err,
            RegistryError::UnknownCenter { body, center }
                if body == "Moon" && center == "Earth"
        ));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = Registry::from_records(vec![
            record("Earth", "Sun"),
            record("Earth", "Sun"),
        ])
        .unwrap_err();

        assert!(matches!(err, RegistryError::DuplicateName { name } if name == "Earth"));
    }

    #[test]
    fn rejects_moons_of_moons() {
        let err = Registry::from_records(vec![
            record("Earth", "Sun"),
            record("Moon", "Earth"),
            record("Base", "Moon"),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            RegistryError::NestedSatellite { body, .. } if body == "Base"
        ));
    }

    #[test]
    fn rejects_self_referential_center() {
        let err = Registry::from_records(vec![record("Ouroboros", "Ouroboros")])
            .unwrap_err();

        assert!(matches!(err, RegistryError::NestedSatellite { .. }));
    }

    #[test]
    fn rejects_parabolic_eccentricity() {
        let mut body = record("Comet", "Sun");
        body.eccentricity = 1.0;

        let err = Registry::from_records(vec![body]).unwrap_err();

        assert!(matches!(
            err,
            RegistryError::Eccentricity { value, .. } if value == 1.0
        ));
    }

    #[test]
    fn rejects_non_finite_speed() {
        let mut body = record("Earth", "Sun");
        body.revolution_speed = Num::NAN;

        let err = Registry::from_records(vec![body]).unwrap_err();

        assert!(matches!(
            err,
            RegistryError::InvalidValue { field: "revolutionSpeed", .. }
        ));
    }

    #[test]
    fn rejects_empty_registry() {
        assert!(matches!(
            Registry::from_records(vec![]).unwrap_err(),
            RegistryError::Empty
        ));
    }

    #[test]
    fn satellite_position_is_a_vector_sum() {
        let mut registry = Registry::from_records(vec![
            record("Earth", "Sun"),
            record("Moon", "Earth"),
        ])
        .unwrap();

        registry.body_mut(0).angle = 0.7;
        registry.body_mut(1).angle = 2.1;

        let expected =
            registry.body(0).orbit_offset() + registry.body(1).orbit_offset();

        assert!(registry.position(1).distance(expected) < 1e-5);
    }

    #[test]
    fn satellite_reads_the_live_center_angle() {
        let mut registry = Registry::from_records(vec![
            record("Earth", "Sun"),
            record("Moon", "Earth"),
        ])
        .unwrap();

        let before = registry.position(1);
        registry.body_mut(0).angle += 0.5;
        let after = registry.position(1);

        assert!(before.distance(after) > 1e-3);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Registry::from_json("[{\"name\": \"Eart").unwrap_err();

        assert!(matches!(err, RegistryError::Parse(_)));
    }

    #[test]
    fn loads_from_json() {
        let registry = Registry::from_json(
            r#"[
                {
                    "name": "Sun",
                    "center": "Sun",
                    "sphereRadius": 5.0,
                    "orbitRadiusX": 0.0,
                    "eccentricity": 0.0,
                    "angle": 0.0,
                    "rotationSpeed": 0.5,
                    "revolutionSpeed": 0.0,
                    "path": "textures/sun.jpg"
                },
                {
                    "name": "Earth",
                    "center": "Sun",
                    "sphereRadius": 0.5,
                    "orbitRadiusX": 14.0,
                    "eccentricity": 0.0167,
                    "angle": 0.0,
                    "rotationSpeed": 1.0,
                    "revolutionSpeed": 1.0,
                    "path": "textures/earth.jpg"
                }
            ]"#,
        )
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.index_of("Earth"), Some(1));
        // The star record rests at the origin.
        assert_eq!(registry.position(0), Vec3::ZERO);
    }
}
