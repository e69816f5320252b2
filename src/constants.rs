use crate::Num;

/// Fixed per-frame step, decoupling the angular speed units in body data
/// from raw per-frame increments.
pub const STEP: Num = 0.01;

/// Speed multiplier applied when none has been set.
pub const DEFAULT_SPEED: Num = 1.0;

/// The `center` value marking a body that orbits the scene origin.
pub const ROOT_CENTER: &str = "Sun";

#[cfg(feature = "f32")]
pub use std::f32::consts::PI;
#[cfg(feature = "f64")]
pub use std::f64::consts::PI;

pub const TWO_PI: Num = 2.0 * PI;
