//! Rendering surface
//!
//! Particles draw through the `Canvas` trait so the core never touches a
//! framebuffer. `CommandBuffer` records the calls for tests and tooling.

pub mod canvas;
pub mod stencil;

pub use canvas::{Canvas, CommandBuffer, DrawCommand};
pub use stencil::Stencil;

/// Palette index. 0 is the transparent key for stencil blits.
pub type Color = u8;

/// Palette index treated as transparent by `draw_transparent_image`
pub const TRANSPARENT: Color = 0;
