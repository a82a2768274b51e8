//! Wiring factories into particle sources

use rand::Rng;

use crate::particles::{Anchor, CircularParticleFactory, ParticleSource};
use crate::render::Color;

use super::data::EffectData;

/// Effects shorter than this get their density boosted so they still read
/// as a burst
const DENSITY_BOOST_BELOW_MS: i32 = 800;

/// Particle source for circular particles on a center-spread trajectory.
///
/// `lifespan` is the total effect time in ms, `frequency` is particles per
/// second. Ranges must already be normalized (`min <= max`).
#[allow(clippy::too_many_arguments)]
pub fn create_circular_effect<A, R>(
    anchor: A,
    lifespan: i32,
    color_lut: Vec<Color>,
    size_lut: Vec<u8>,
    frequency: f32,
    min_particle_lifespan: i32,
    max_particle_lifespan: i32,
    min_spread: f32,
    max_spread: f32,
    min_travel: f32,
    max_travel: f32,
    rng: R,
) -> ParticleSource
where
    A: Anchor + 'static,
    R: Rng + 'static,
{
    let factory = CircularParticleFactory::new(
        color_lut,
        size_lut,
        min_particle_lifespan,
        max_particle_lifespan,
        min_spread,
        max_spread,
        min_travel,
        max_travel,
        rng,
    );

    let mut source = ParticleSource::new(Box::new(anchor), frequency, Box::new(factory));
    source.set_lifespan(lifespan);

    log::debug!(
        "Circular effect at {:?}: {} ms, {} particles/s",
        source.anchor_position(),
        lifespan,
        frequency
    );
    source
}

/// Particles per second for an effect of `duration` ms. Short effects are
/// scaled up so roughly `density` particles appear regardless of length.
pub fn calculate_density(duration: i32, density: f32) -> f32 {
    if duration < DENSITY_BOOST_BELOW_MS {
        density / duration as f32 * 1000.0
    } else {
        density
    }
}

/// Start `effect` at an anchor for `duration` ms.
///
/// Pass a `Vec2` for a fixed point or an `Rc<Cell<Vec2>>` to follow a
/// moving sprite.
pub fn start_explosive_effect<A, R>(
    effect: &EffectData,
    anchor: A,
    duration: i32,
    density: f32,
    rng: R,
) -> ParticleSource
where
    A: Anchor + 'static,
    R: Rng + 'static,
{
    create_circular_effect(
        anchor,
        duration,
        effect.color_lut.clone(),
        effect.size_lut.clone(),
        calculate_density(duration, density),
        effect.duration.min as i32,
        effect.duration.max as i32,
        effect.spawn.min,
        effect.spawn.max,
        effect.spread.min,
        effect.spread.max,
        rng,
    )
}
