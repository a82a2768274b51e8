//! Particle source: spawns, moves and retires particles each frame
//!
//! A small emitter. Particles live in a `Vec` in spawn order;
//! the factory decides how they start and how they look.

use crate::fx::Fx8;
use crate::render::Canvas;

use super::factory::ParticleFactory;
use super::particle::{Anchor, Particle};

/// Upper bound on live particles per source
pub const MAX_PARTICLES: usize = 500;

/// Emits particles from an anchor at a fixed rate
pub struct ParticleSource {
    anchor: Box<dyn Anchor>,
    factory: Box<dyn ParticleFactory>,
    particles: Vec<Particle>,
    /// Milliseconds between spawns
    period: f32,
    /// Time banked toward the next spawn
    timer: f32,
    /// Remaining source time in ms (None = runs until dropped)
    lifespan: Option<i32>,
    /// Set once the lifespan runs out; no further spawns
    destroyed: bool,
}

impl ParticleSource {
    /// `frequency` is particles per second; zero, negative or non-finite
    /// rates never spawn on their own
    pub fn new(anchor: Box<dyn Anchor>, frequency: f32, factory: Box<dyn ParticleFactory>) -> Self {
        let period = if frequency > 0.0 && frequency.is_finite() {
            1000.0 / frequency
        } else {
            f32::INFINITY
        };
        Self {
            anchor,
            factory,
            particles: Vec::new(),
            period,
            timer: 0.0,
            lifespan: None,
            destroyed: false,
        }
    }

    pub fn lifespan(&self) -> Option<i32> {
        self.lifespan
    }

    /// Total time before the source stops spawning
    pub fn set_lifespan(&mut self, lifespan: i32) {
        self.lifespan = Some(lifespan);
    }

    /// Spawn rate in particles per second
    pub fn frequency(&self) -> f32 {
        1000.0 / self.period
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn anchor_position(&self) -> glam::Vec2 {
        self.anchor.position()
    }

    /// True once the source stopped spawning and its last particle expired
    pub fn is_finished(&self) -> bool {
        self.destroyed && self.particles.is_empty()
    }

    /// Stop spawning. Particles already emitted play out their lifespans.
    pub fn destroy(&mut self) {
        if !self.destroyed {
            log::debug!("Particle source stopped ({} particles still live)", self.particles.len());
        }
        self.destroyed = true;
        self.lifespan = None;
    }

    /// Drop every live particle at once
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Spawn one particle immediately (ignores the spawn timer)
    pub fn burst(&mut self) {
        if self.destroyed || self.particles.len() >= MAX_PARTICLES {
            return;
        }
        let p = self.factory.create_particle(&*self.anchor);
        self.particles.push(p);
    }

    /// Advance by `dt_ms`
    pub fn update(&mut self, dt_ms: i32) {
        if let Some(remaining) = self.lifespan.as_mut() {
            *remaining -= dt_ms;
            if *remaining <= 0 {
                self.destroy();
            }
        }

        // Age and move existing particles first so new ones start at the anchor
        for p in self.particles.iter_mut() {
            p.lifespan -= dt_ms;
            p.integrate(dt_ms);
        }
        self.particles.retain(|p| p.lifespan > 0);

        if self.destroyed {
            return;
        }
        self.timer += dt_ms as f32;
        if self.timer < self.period {
            return;
        }
        let due = (self.timer / self.period).floor() as usize;
        self.timer %= self.period;
        let free = MAX_PARTICLES.saturating_sub(self.particles.len());
        for _ in 0..due.min(free) {
            self.burst();
        }
    }

    /// Draw every live particle at its current position
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        let factory = &self.factory;
        for p in self.particles.iter_mut() {
            let (x, y): (Fx8, Fx8) = (p.x, p.y);
            factory.draw_particle(p, x, y, canvas);
        }
    }
}

impl std::fmt::Debug for ParticleSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticleSource")
            .field("anchor", &self.anchor.position())
            .field("particles", &self.particles.len())
            .field("period", &self.period)
            .field("lifespan", &self.lifespan)
            .field("destroyed", &self.destroyed)
            .finish()
    }
}
