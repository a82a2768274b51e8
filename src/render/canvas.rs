//! Drawing primitives at integer pixel coordinates

use serde::{Deserialize, Serialize};

use super::Color;
use super::stencil::Stencil;

/// The primitive surface particles render through
pub trait Canvas {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color);

    /// Blit `image` with its top-left at (x, y), skipping transparent pixels
    fn draw_transparent_image(&mut self, image: &Stencil, x: i32, y: i32);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Pixel {
        x: i32,
        y: i32,
        color: Color,
    },
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
    },
    Circle {
        cx: i32,
        cy: i32,
        radius: i32,
        color: Color,
    },
    Image {
        x: i32,
        y: i32,
        image: Stencil,
    },
}

/// Canvas that records draw calls instead of rasterizing them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop recorded commands (call once per frame)
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Take the recorded commands, leaving the buffer empty
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Canvas for CommandBuffer {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.commands.push(DrawCommand::Pixel { x, y, color });
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            cx,
            cy,
            radius,
            color,
        });
    }

    fn draw_transparent_image(&mut self, image: &Stencil, x: i32, y: i32) {
        self.commands.push(DrawCommand::Image {
            x,
            y,
            image: image.clone(),
        });
    }
}
