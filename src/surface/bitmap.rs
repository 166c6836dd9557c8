use crate::foundation::{core::Canvas, geom::Rect, palette::Color};

/// Decoded 8-bit bitmap, one palette index per pixel, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Bitmap {
    /// Solid bitmap filled with one color.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color.0; width as usize * height as usize],
        }
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Bitmap-local bounds at origin `(0, 0)`.
    pub fn bounds(&self) -> Rect {
        self.canvas().bounds()
    }

    /// A bitmap is drawable only when its pixel storage matches its dimensions.
    pub fn is_valid(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.pixels.len() == self.width as usize * self.height as usize
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels.get(idx).copied().map(Color)
    }
}
