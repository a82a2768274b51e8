//! Particle record and spawn anchors

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::fx::Fx8;

/// Lifespan given to particles by the default factory allocation (ms)
pub const DEFAULT_PARTICLE_LIFESPAN: i32 = 500;

/// A single particle, owned by its `ParticleSource`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub x: Fx8,
    pub y: Fx8,
    /// Velocity in pixels per second
    pub vx: Fx8,
    pub vy: Fx8,
    /// Remaining time in ms. Only the source decrements this.
    pub lifespan: i32,
    /// Lifespan below which the next velocity decay step fires.
    /// Only ever lowered, one tween-out slice at a time.
    pub tween_threshold: f32,
}

impl Particle {
    /// A motionless particle at `pos` with the default lifespan
    pub fn at(pos: Vec2) -> Self {
        Self {
            x: Fx8::from_f32(pos.x),
            y: Fx8::from_f32(pos.y),
            vx: Fx8::ZERO,
            vy: Fx8::ZERO,
            lifespan: DEFAULT_PARTICLE_LIFESPAN,
            tween_threshold: 0.0,
        }
    }

    /// Position as floats (for tooling and tests)
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x.to_f32(), self.y.to_f32())
    }

    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.vx.to_f32(), self.vy.to_f32())
    }

    /// Advance position by `dt_ms` of travel
    pub fn integrate(&mut self, dt_ms: i32) {
        let dt = Fx8::from_int(dt_ms);
        let thousand = Fx8::from_int(1000);
        self.x += self.vx * dt / thousand;
        self.y += self.vy * dt / thousand;
    }
}

/// Something particles spawn from
pub trait Anchor {
    fn position(&self) -> Vec2;
}

/// A fixed point on screen
impl Anchor for Vec2 {
    fn position(&self) -> Vec2 {
        *self
    }
}

/// A point that its owner can move while the effect runs
impl Anchor for Cell<Vec2> {
    fn position(&self) -> Vec2 {
        self.get()
    }
}

impl<A: Anchor + ?Sized> Anchor for Rc<A> {
    fn position(&self) -> Vec2 {
        (**self).position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_at_anchor() {
        let p = Particle::at(Vec2::new(75.0, 55.5));
        assert_eq!(p.x, Fx8::from_int(75));
        assert_eq!(p.y, Fx8::from_f32(55.5));
        assert_eq!(p.lifespan, DEFAULT_PARTICLE_LIFESPAN);
        assert_eq!(p.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_integrate_per_second_units() {
        let mut p = Particle::at(Vec2::ZERO);
        p.vx = Fx8::from_int(20);
        p.vy = Fx8::from_int(-10);
        p.integrate(500);
        assert_eq!(p.x, Fx8::from_int(10));
        assert_eq!(p.y, Fx8::from_int(-5));
    }

    #[test]
    fn test_shared_anchor_moves() {
        let sprite = Rc::new(Cell::new(Vec2::new(1.0, 2.0)));
        let anchor: Rc<Cell<Vec2>> = Rc::clone(&sprite);
        sprite.set(Vec2::new(3.0, 4.0));
        assert_eq!(anchor.position(), Vec2::new(3.0, 4.0));
    }
}
