//! Small palette-index bitmaps blitted with a transparent key

use serde::{Deserialize, Serialize};

use super::{Color, TRANSPARENT};

/// A tiny monochrome-or-indexed image, row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stencil {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Stencil {
    /// Build from rows of equal length
    pub fn from_rows(rows: &[&[Color]]) -> Self {
        let height = rows.len() as u32;
        let width = rows.first().map(|r| r.len()).unwrap_or(0) as u32;
        debug_assert!(rows.iter().all(|r| r.len() as u32 == width));
        let pixels = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at (x, y), or `None` outside the image
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// Replace every pixel equal to `from` with `to`
    pub fn replace(&mut self, from: Color, to: Color) {
        for px in self.pixels.iter_mut().filter(|px| **px == from) {
            *px = to;
        }
    }

    /// A copy with `from` remapped to `to`; `self` is left untouched
    pub fn recolored(&self, from: Color, to: Color) -> Stencil {
        let mut copy = self.clone();
        copy.replace(from, to);
        copy
    }

    /// Number of pixels that a transparent blit would write
    pub fn opaque_count(&self) -> usize {
        self.pixels.iter().filter(|px| **px != TRANSPARENT).count()
    }

    /// Iterate opaque pixels as (x, y, color)
    pub fn opaque_pixels(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
        let width = self.width;
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, px)| **px != TRANSPARENT)
            .map(move |(i, px)| (i as u32 % width, i as u32 / width, *px))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> Stencil {
        Stencil::from_rows(&[&[0, 0xF], &[0xF, 0]])
    }

    #[test]
    fn test_from_rows_dimensions() {
        let s = checker();
        assert_eq!(s.width(), 2);
        assert_eq!(s.height(), 2);
        assert_eq!(s.get(1, 0), Some(0xF));
        assert_eq!(s.get(2, 0), None);
    }

    #[test]
    fn test_recolored_keeps_source() {
        let s = checker();
        let red = s.recolored(0xF, 2);
        assert_eq!(red.get(1, 0), Some(2));
        assert_eq!(red.get(0, 0), Some(0));
        assert_eq!(s.get(1, 0), Some(0xF));
    }

    #[test]
    fn test_opaque_pixels() {
        let s = checker();
        assert_eq!(s.opaque_count(), 2);
        let px: Vec<_> = s.opaque_pixels().collect();
        assert_eq!(px, vec![(1, 0, 0xF), (0, 1, 0xF)]);
    }
}
