//! The capability a particle source drives each frame

use crate::fx::Fx8;
use crate::render::Canvas;

use super::particle::{Anchor, Particle};

/// Creates particles for a source and draws them every frame.
///
/// The source owns storage, spawn cadence and motion; the factory decides
/// where a particle starts, how it moves initially and how it looks.
pub trait ParticleFactory {
    /// Allocate a particle at the anchor. The default is a motionless
    /// particle with `DEFAULT_PARTICLE_LIFESPAN`.
    fn create_particle(&mut self, anchor: &dyn Anchor) -> Particle {
        Particle::at(anchor.position())
    }

    /// Draw `particle` at screen position (x, y). May adjust velocity.
    fn draw_particle(&self, particle: &mut Particle, x: Fx8, y: Fx8, canvas: &mut dyn Canvas);
}
