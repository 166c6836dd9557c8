use crate::foundation::{core::Canvas, geom::Rect, palette::Color};
use crate::surface::bitmap::Bitmap;

/// Driver-layer drawing contract over an 8-bit palette framebuffer.
///
/// Only [`Surface::canvas`], [`Surface::get_pixel`], [`Surface::put_pixel`] and
/// [`Surface::present`] are required. The remaining primitives have pixel-granular default
/// implementations; drivers with faster paths override them. Every primitive clips to the
/// screen and returns promptly.
pub trait Surface {
    /// Screen dimensions.
    fn canvas(&self) -> Canvas;

    /// Read one pixel; `None` outside the screen.
    fn get_pixel(&self, x: i32, y: i32) -> Option<Color>;

    /// Write one pixel; silently ignored outside the screen.
    fn put_pixel(&mut self, x: i32, y: i32, color: Color);

    /// Swap the finished back buffer onto the display.
    fn present(&mut self);

    /// Fill `rect` clipped to the screen.
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(r) = rect.clip_to(self.canvas().bounds()) else {
            return;
        };
        for y in r.y..r.bottom() {
            for x in r.x..r.right() {
                self.put_pixel(x, y, color);
            }
        }
    }

    /// One-pixel outline along the inside edge of `rect`.
    fn outline_rect(&mut self, rect: Rect, color: Color) {
        let Some(clip) = rect.clip_to(self.canvas().bounds()) else {
            return;
        };
        let (x1, y1) = (rect.right() - 1, rect.bottom() - 1);
        // Edges lying off screen are skipped; the rest span only the visible range.
        if rect.y >= clip.y {
            self.fill_rect(Rect::new(clip.x, rect.y, clip.w, 1), color);
        }
        if y1 < clip.bottom() {
            self.fill_rect(Rect::new(clip.x, y1, clip.w, 1), color);
        }
        if rect.x >= clip.x {
            self.fill_rect(Rect::new(rect.x, clip.y, 1, clip.h), color);
        }
        if x1 < clip.right() {
            self.fill_rect(Rect::new(x1, clip.y, 1, clip.h), color);
        }
    }

    /// Bresenham line between two inclusive endpoints.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let screen = self.canvas().bounds();
        let dx = (i64::from(x1) - i64::from(x0)).abs();
        let dy = -(i64::from(y1) - i64::from(y0)).abs();
        let sx = x1.cmp(&x0) as i32;
        let sy = y1.cmp(&y0) as i32;
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            if screen.contains(x, y) {
                self.put_pixel(x, y, color);
            } else if leaving(x, sx, screen.x, screen.right())
                || leaving(y, sy, screen.y, screen.bottom())
            {
                break;
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Copy the `src` sub-rectangle of `bitmap` so its top-left lands at `(dest_x, dest_y)`.
    ///
    /// Source pixels outside the bitmap and destination pixels outside the screen are
    /// skipped.
    fn blit(&mut self, bitmap: &Bitmap, dest_x: i32, dest_y: i32, src: Rect) {
        if !bitmap.is_valid() {
            return;
        }
        let Some(src) = src.clip_to(bitmap.bounds()) else {
            return;
        };
        let screen = self.canvas().bounds();
        for sy in src.y..src.bottom() {
            let dy = dest_y + (sy - src.y);
            if dy < screen.y || dy >= screen.bottom() {
                continue;
            }
            for sx in src.x..src.right() {
                let dx = dest_x + (sx - src.x);
                // src is clipped to the bitmap, so the coordinates are non-negative.
                if let Some(c) = bitmap.pixel(sx as u32, sy as u32) {
                    self.put_pixel(dx, dy, c);
                }
            }
        }
    }
}

/// True once a coordinate outside `lo..hi` can only move further away.
fn leaving(v: i32, step: i32, lo: i32, hi: i32) -> bool {
    (v < lo && step <= 0) || (v >= hi && step >= 0)
}

/// In-memory double-buffered framebuffer.
///
/// All drawing lands in the back buffer; [`Surface::present`] copies it to the front
/// buffer, which is what a display would show.
#[derive(Clone, Debug)]
pub struct IndexedFramebuffer {
    canvas: Canvas,
    back: Vec<u8>,
    front: Vec<u8>,
    presents: u64,
}

impl IndexedFramebuffer {
    pub fn new(canvas: Canvas) -> Self {
        let len = canvas.pixel_count();
        Self {
            canvas,
            back: vec![0; len],
            front: vec![0; len],
            presents: 0,
        }
    }

    /// Back buffer contents, row-major palette indices.
    pub fn back(&self) -> &[u8] {
        &self.back
    }

    /// Front buffer contents as of the last present.
    pub fn front(&self) -> &[u8] {
        &self.front
    }

    /// Number of completed presents.
    pub fn present_count(&self) -> u64 {
        self.presents
    }

    /// Front buffer pixel, for assertions.
    pub fn front_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index_of(x, y).map(|i| Color(self.front[i]))
    }

    /// Expand the front buffer through the palette.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        let mut out = image::RgbImage::new(self.canvas.width, self.canvas.height);
        for (px, &idx) in out.pixels_mut().zip(self.front.iter()) {
            *px = image::Rgb(Color(idx).to_rgb());
        }
        out
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if !self.canvas.bounds().contains(x, y) {
            return None;
        }
        Some(y as usize * self.canvas.width as usize + x as usize)
    }
}

impl Surface for IndexedFramebuffer {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index_of(x, y).map(|i| Color(self.back[i]))
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index_of(x, y) {
            self.back[i] = color.0;
        }
    }

    fn present(&mut self) {
        self.front.copy_from_slice(&self.back);
        self.presents += 1;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(r) = rect.clip_to(self.canvas.bounds()) else {
            return;
        };
        let stride = self.canvas.width as usize;
        for y in r.y..r.bottom() {
            let row = y as usize * stride;
            let start = row + r.x as usize;
            self.back[start..start + r.w as usize].fill(color.0);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/framebuffer.rs"]
mod tests;
