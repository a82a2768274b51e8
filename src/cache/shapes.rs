//! Pre-built circle stencils for tiny particle sizes
//!
//! At 4 and 6 pixels across a rasterized circle looks lumpy, so these
//! hand-drawn masks stand in for `fill_circle`.

use std::sync::OnceLock;

use crate::consts::STENCIL_MARKER;
use crate::render::{Color, Stencil};

const F: Color = STENCIL_MARKER;

/// The two circle masks, drawn with `STENCIL_MARKER`
#[derive(Debug)]
pub struct ShapeCache {
    four_pixel: Stencil,
    six_pixel: Stencil,
}

impl ShapeCache {
    fn build() -> Self {
        let four_pixel = Stencil::from_rows(&[
            &[0, F, F, 0],
            &[F, F, F, F],
            &[F, F, F, F],
            &[0, F, F, 0],
        ]);
        let six_pixel = Stencil::from_rows(&[
            &[0, 0, F, F, 0, 0],
            &[0, F, F, F, F, 0],
            &[F, F, F, F, F, F],
            &[F, F, F, F, F, F],
            &[0, F, F, F, F, 0],
            &[0, 0, F, F, 0, 0],
        ]);
        log::debug!("Built shape cache");
        Self {
            four_pixel,
            six_pixel,
        }
    }

    /// 4x4 circle template (marker-colored, never mutate)
    pub fn four_pixel(&self) -> &Stencil {
        &self.four_pixel
    }

    /// 6x6 circle template
    pub fn six_pixel(&self) -> &Stencil {
        &self.six_pixel
    }
}

static SHAPES: OnceLock<ShapeCache> = OnceLock::new();

/// Shared circle stencils, built on first call
pub fn shape_cache() -> &'static ShapeCache {
    SHAPES.get_or_init(ShapeCache::build)
}
