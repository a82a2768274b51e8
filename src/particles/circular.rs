//! Radial burst particles
//!
//! Each particle leaves the anchor along one of `NUM_SLICES` directions,
//! picks its size and color from lifespan-indexed tables, and slows down
//! geometrically during the last half of the longest possible lifespan.

use rand::Rng;

use crate::cache::{ShapeCache, TrigCache, shape_cache, trig_cache};
use crate::consts::{LUT_SLICES, NUM_SLICES, STENCIL_MARKER, TWEEN_OUT_BREAKPOINT, TWEEN_SLICES};
use crate::fx::Fx8;
use crate::lut::{RangeLut, range_lut};
use crate::render::{Canvas, Color};

use super::factory::ParticleFactory;
use super::particle::{Anchor, Particle};

/// Per tween-out step, velocity is multiplied by DECAY_NUM / DECAY_DEN
const DECAY_NUM: Fx8 = Fx8::from_int(90);
const DECAY_DEN: Fx8 = Fx8::from_int(100);

/// Factory for particles bursting out of a center point.
///
/// Tables are indexed by `floor(lifespan / slice)`, so the caller's first
/// entry is what a freshly spawned particle shows and the last entry is
/// what it shows right before it expires.
#[derive(Debug)]
pub struct CircularParticleFactory<R: Rng> {
    /// Reversed at construction
    color_lut: Vec<Color>,
    /// Reversed at construction
    size_lut: Vec<u8>,
    min_lifespan: i32,
    max_lifespan: i32,
    size_slice: f32,
    color_slice: f32,
    tween_out_slice: f32,
    init_spread_lut: RangeLut,
    /// Travel distances already converted to pixels per second
    travel_distance_lut: RangeLut,
    trig: &'static TrigCache,
    shapes: &'static ShapeCache,
    rng: R,
}

impl<R: Rng> CircularParticleFactory<R> {
    /// Build a factory. Tables must be non-empty; ranges must have
    /// `min <= max` (callers normalize).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mut color_lut: Vec<Color>,
        mut size_lut: Vec<u8>,
        min_lifespan: i32,
        max_lifespan: i32,
        min_init_spread: f32,
        max_init_spread: f32,
        min_travel_distance: f32,
        max_travel_distance: f32,
        rng: R,
    ) -> Self {
        debug_assert!(!color_lut.is_empty(), "color table must not be empty");
        debug_assert!(!size_lut.is_empty(), "size table must not be empty");

        color_lut.reverse();
        size_lut.reverse();

        let max = max_lifespan as f32;
        let size_slice = max / size_lut.len() as f32;
        let color_slice = max / color_lut.len() as f32;
        let tween_out_slice = max / TWEEN_SLICES as f32;

        // Distance over the longest lifespan becomes pixels per second
        let per_second = 1000.0 / max;
        let travel_distance_lut = range_lut(
            min_travel_distance * per_second,
            max_travel_distance * per_second,
        );

        log::debug!(
            "Circular factory: {} colors, {} sizes, lifespan {}..{} ms, spread {}..{}, travel {}..{}",
            color_lut.len(),
            size_lut.len(),
            min_lifespan,
            max_lifespan,
            min_init_spread,
            max_init_spread,
            min_travel_distance,
            max_travel_distance
        );

        Self {
            color_lut,
            size_lut,
            min_lifespan,
            max_lifespan,
            size_slice,
            color_slice,
            tween_out_slice,
            init_spread_lut: range_lut(min_init_spread, max_init_spread),
            travel_distance_lut,
            trig: trig_cache(),
            shapes: shape_cache(),
            rng,
        }
    }

    pub fn size_slice(&self) -> f32 {
        self.size_slice
    }

    pub fn color_slice(&self) -> f32 {
        self.color_slice
    }

    pub fn tween_out_slice(&self) -> f32 {
        self.tween_out_slice
    }

    pub fn max_lifespan(&self) -> i32 {
        self.max_lifespan
    }

    /// Color table in lookup (reversed) order
    pub fn color_lut(&self) -> &[Color] {
        &self.color_lut
    }

    /// Size table in lookup (reversed) order
    pub fn size_lut(&self) -> &[u8] {
        &self.size_lut
    }

    pub fn travel_distance_lut(&self) -> &RangeLut {
        &self.travel_distance_lut
    }

    /// Index into the reversed size table for a lifespan
    pub fn size_bucket(&self, lifespan: i32) -> usize {
        bucket(lifespan, self.size_slice, self.size_lut.len())
    }

    /// Index into the reversed color table for a lifespan
    pub fn color_bucket(&self, lifespan: i32) -> usize {
        bucket(lifespan, self.color_slice, self.color_lut.len())
    }

    pub fn size_for(&self, lifespan: i32) -> u8 {
        self.size_lut[self.size_bucket(lifespan)]
    }

    /// (color, cooler color) for a lifespan; the cooler color tints the
    /// outer ring of large particles
    pub fn colors_for(&self, lifespan: i32) -> (Color, Color) {
        let index = self.color_bucket(lifespan);
        let color = self.color_lut[index];
        let cooler = if index == 0 {
            color
        } else {
            self.color_lut[index - 1]
        };
        (color, cooler)
    }

    /// Catch-up velocity decay: one 90% step per tween-out slice the
    /// lifespan has fallen below the threshold
    fn tween_out(&self, p: &mut Particle) {
        if self.tween_out_slice <= 0.0 {
            return;
        }
        while (p.lifespan as f32) < p.tween_threshold {
            p.tween_threshold -= self.tween_out_slice;
            p.vx = p.vx * DECAY_NUM / DECAY_DEN;
            p.vy = p.vy * DECAY_NUM / DECAY_DEN;
        }
    }
}

/// `floor(lifespan / slice)` clamped to the table. Lifespans at or past the
/// maximum land on the last entry instead of running off the end.
fn bucket(lifespan: i32, slice: f32, len: usize) -> usize {
    let index = (lifespan.max(0) as f32 / slice).floor() as usize;
    index.min(len.saturating_sub(1))
}

impl<R: Rng> ParticleFactory for CircularParticleFactory<R> {
    fn create_particle(&mut self, anchor: &dyn Anchor) -> Particle {
        let mut p = Particle::at(anchor.position());

        let upper = self.max_lifespan.saturating_sub(1).max(self.min_lifespan);
        p.lifespan = self.rng.random_range(self.min_lifespan..=upper);
        p.tween_threshold = TWEEN_OUT_BREAKPOINT as f32 * self.tween_out_slice;

        let angle = self.rng.random_range(0..NUM_SLICES);
        let spread = self.init_spread_lut[self.rng.random_range(0..LUT_SLICES)];
        let travel = self.travel_distance_lut[self.rng.random_range(0..LUT_SLICES)];

        let (cos, sin) = self.trig.direction(angle);
        p.x += cos * spread;
        p.y += sin * spread;
        p.vx = cos * travel;
        p.vy = sin * travel;

        p
    }

    fn draw_particle(&self, p: &mut Particle, x: Fx8, y: Fx8, canvas: &mut dyn Canvas) {
        let size = self.size_for(p.lifespan);
        let radius = Fx8::from_int(size as i32) / Fx8::TWO;
        let (color, cooler) = self.colors_for(p.lifespan);

        match size {
            0 => {}
            1 => canvas.set_pixel(x.to_int(), y.to_int(), color),
            2 => canvas.fill_rect(x.to_int(), y.to_int(), 2, 2, color),
            3 | 4 => {
                let image = self.shapes.four_pixel().recolored(STENCIL_MARKER, color);
                canvas.draw_transparent_image(&image, (x - Fx8::ONE).to_int(), (y - Fx8::ONE).to_int());
            }
            5 | 6 => {
                let image = self.shapes.six_pixel().recolored(STENCIL_MARKER, color);
                canvas.draw_transparent_image(&image, (x - Fx8::TWO).to_int(), (y - Fx8::TWO).to_int());
            }
            7..=10 => canvas.fill_circle(x.to_int(), y.to_int(), radius.to_int(), color),
            _ => {
                canvas.fill_circle(x.to_int(), y.to_int(), radius.to_int(), cooler);
                canvas.fill_circle(x.to_int(), y.to_int(), (radius - Fx8::TWO).to_int(), color);
            }
        }

        self.tween_out(p);
    }
}
