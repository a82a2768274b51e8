//! Burst FX - radial particle effects for small pixel displays
//!
//! Core modules:
//! - `fx`: 8-bit fractional fixed-point math
//! - `cache`: Shared trig tables and circle stencils
//! - `lut`: Quantized range tables
//! - `particles`: Particle factory contract, radial burst factory, particle source
//! - `effects`: Effect assembly, presets and effect data
//! - `render`: Canvas trait and draw command recording

pub mod cache;
pub mod effects;
pub mod error;
pub mod fx;
pub mod lut;
pub mod particles;
pub mod render;
pub mod settings;

pub use effects::{EffectData, NumberRange, PresetColor, PresetShape, create_circular_effect, start_explosive_effect};
pub use error::EffectError;
pub use fx::Fx8;
pub use particles::{Anchor, CircularParticleFactory, Particle, ParticleFactory, ParticleSource};
pub use render::{Canvas, CommandBuffer, DrawCommand};
pub use settings::Settings;

/// Table sizes and tuning constants
pub mod consts {
    use crate::render::Color;

    /// Angular resolution of the trig cache
    pub const NUM_SLICES: usize = 90;
    /// Entries in a range lookup table
    pub const LUT_SLICES: usize = 20;
    /// Tween-out slices per maximum particle lifespan
    pub const TWEEN_SLICES: usize = 20;
    /// Velocity decay starts this many tween-out slices before expiry
    pub const TWEEN_OUT_BREAKPOINT: u32 = 10;
    /// Marker value in circle stencils, replaced by the particle color
    pub const STENCIL_MARKER: Color = 0xF;
}
