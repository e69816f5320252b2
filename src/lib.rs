//! Solar-system style orbital motion along parametrized ellipses.
//!
//! Bodies move on independent, closed-form ellipses: planets around a
//! central star, moons around planets as a plain vector sum of the two
//! ellipse offsets. This is a visual model, not an n-body integration.
//!
//! The crate is frame-driven: [`Simulation::step`] advances every body by
//! one frame worth of angle, scaled by a global speed multiplier, and
//! positions are recomputed from the accumulated angles on demand.

pub mod body;
pub mod constants;
pub mod error;
pub mod registry;
pub mod simulation;

pub use body::CelestialBody;
pub use constants::{DEFAULT_SPEED, ROOT_CENTER, STEP};
pub use error::RegistryError;
pub use registry::{Center, Registry};
pub use simulation::Simulation;

#[cfg(feature = "f32")]
pub type Num = f32;
#[cfg(feature = "f64")]
pub type Num = f64;

#[cfg(feature = "f32")]
pub use glam::{vec3, Vec3};
#[cfg(feature = "f64")]
pub use glam::{dvec3 as vec3, DVec3 as Vec3};

pub use constants::{PI, TWO_PI};
