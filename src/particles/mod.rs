//! Particles, the factory contract, and the radial burst factory

pub mod circular;
pub mod factory;
pub mod particle;
pub mod source;

pub use circular::CircularParticleFactory;
pub use factory::ParticleFactory;
pub use particle::{Anchor, DEFAULT_PARTICLE_LIFESPAN, Particle};
pub use source::{MAX_PARTICLES, ParticleSource};
