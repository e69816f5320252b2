use crate::constants::{DEFAULT_SPEED, STEP};
use crate::registry::Registry;
use crate::{CelestialBody, Num, Vec3};

/// Frame-driven simulation state: a validated registry plus the global
/// speed multiplier.
///
/// One [`step`](Self::step) call corresponds to one rendered frame; the
/// unit of progress is elapsed frames, not wall-clock time. A single
/// central loop advances every body, replacing the per-body
/// self-rescheduling callbacks of the original rendition, so update order
/// is explicit: all angles advance first, positions are read afterwards.
/// Satellites therefore observe their center's post-increment angle for
/// the frame, which is within the accepted one-frame slop of the model.
#[derive(Debug, Clone)]
pub struct Simulation {
    registry: Registry,
    /// Global speed multiplier. Any finite value is accepted: zero
    /// freezes all motion, a negative value reverses it.
    pub speed: Num,
}

impl Simulation {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            speed: DEFAULT_SPEED,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn body(&self, idx: usize) -> &CelestialBody {
        self.registry.body(idx)
    }

    pub fn set_speed(&mut self, speed: Num) {
        self.speed = speed;
    }

    /// Advances every body by one frame.
    ///
    /// Per body: `spin += rotation_speed * STEP * speed` and
    /// `angle += revolution_speed * STEP * speed`. Angles accumulate
    /// without wraparound; nothing in this path can fail.
    pub fn step(&mut self) {
        for body in self.registry.bodies_mut() {
            body.spin += body.rotation_speed * STEP * self.speed;
            body.angle += body.revolution_speed * STEP * self.speed;
        }
    }

    pub fn step_n(&mut self, frames: usize) {
        for _ in 0..frames {
            self.step();
        }
    }

    /// Current position of the body at `idx`, from its accumulated angle
    /// and, for satellites, the live angle of its center.
    pub fn position(&self, idx: usize) -> Vec3 {
        self.registry.position(idx)
    }
}
