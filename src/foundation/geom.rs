/// Integer, axis-aligned screen rectangle.
///
/// A rectangle whose width or height is `<= 0` is empty and carries no paint obligation.
/// Every partial-repaint decision depends on [`Rect::intersect`] being exact: an
/// approximated overlap either leaves stale pixels or bleeds into neighbouring layers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl Rect {
    /// Build a rectangle from origin and extent.
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle anchored at the origin with the given extent.
    pub const fn from_size(w: i32, h: i32) -> Self {
        Self { x: 0, y: 0, w, h }
    }

    /// Exclusive right edge.
    pub fn right(self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// Exclusive bottom edge.
    pub fn bottom(self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// True when the rectangle covers no pixels.
    pub fn is_empty(self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Pixel count, zero for empty rectangles.
    pub fn area(self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        u64::from(self.w.unsigned_abs()) * u64::from(self.h.unsigned_abs())
    }

    /// True when `(px, py)` lies inside the rectangle (right/bottom edges exclusive).
    pub fn contains(self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Overlap of `self` and `other`: max of origins to min of far edges.
    ///
    /// Returns `None` when the resulting width or height is `<= 0`. Empty inputs therefore
    /// always intersect to `None`.
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        let out = Rect::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0));
        if out.is_empty() { None } else { Some(out) }
    }

    /// True when the two rectangles share at least one pixel.
    pub fn intersects(self, other: Rect) -> bool {
        self.intersect(other).is_some()
    }

    /// Clip to `bounds`; alias of [`Rect::intersect`] that reads better at call sites.
    pub fn clip_to(self, bounds: Rect) -> Option<Rect> {
        self.intersect(bounds)
    }

    /// Shift the rectangle by `(dx, dy)`.
    pub fn translate(self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.w,
            self.h,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geom.rs"]
mod tests;
