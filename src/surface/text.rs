use crate::foundation::{geom::Rect, palette::Color};
use crate::surface::framebuffer::Surface;

/// Font collaborator used for taskbar labels, the clock and icon captions.
pub trait TextPainter {
    /// Size in pixels of `text` when drawn.
    fn measure(&self, text: &str) -> (i32, i32);

    /// Draw `text` with its top-left at `(x, y)`.
    fn draw_text(&self, surface: &mut dyn Surface, x: i32, y: i32, text: &str, color: Color);
}

/// Headless font: every non-space glyph is a solid cell.
///
/// Output is deterministic, which is all tests and the headless binary need.
#[derive(Clone, Copy, Debug)]
pub struct BlockText {
    pub cell_w: i32,
    pub cell_h: i32,
}

impl Default for BlockText {
    fn default() -> Self {
        Self {
            cell_w: 6,
            cell_h: 8,
        }
    }
}

impl TextPainter for BlockText {
    fn measure(&self, text: &str) -> (i32, i32) {
        let n = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        (n.saturating_mul(self.cell_w), self.cell_h)
    }

    fn draw_text(&self, surface: &mut dyn Surface, x: i32, y: i32, text: &str, color: Color) {
        let mut cx = x;
        for ch in text.chars() {
            if !ch.is_whitespace() {
                surface.fill_rect(Rect::new(cx, y, self.cell_w - 1, self.cell_h - 1), color);
            }
            cx += self.cell_w;
        }
    }
}
