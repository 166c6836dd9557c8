use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    assets::decode,
    foundation::core::{Canvas, Point},
    foundation::error::DeskResult,
    foundation::geom::Rect,
    surface::bitmap::Bitmap,
    surface::framebuffer::Surface,
};

/// Wallpaper layout policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementMode {
    /// Native size, centered, origin clamped to the top-left corner.
    #[default]
    Center,
    /// Pre-scaled to fill the whole screen at `(0, 0)`.
    Stretch,
}

/// Decoded wallpaper plus its fixed screen placement.
#[derive(Clone, Debug)]
pub struct CachedBitmap {
    pub bitmap: Bitmap,
    pub origin: Point,
}

impl CachedBitmap {
    /// Screen rectangle covered by the bitmap.
    pub fn footprint(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            i32::try_from(self.bitmap.width).unwrap_or(i32::MAX),
            i32::try_from(self.bitmap.height).unwrap_or(i32::MAX),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct WallpaperKey {
    path: PathBuf,
    mode: PlacementMode,
}

/// Single-entry wallpaper cache.
///
/// Holds either a fully decoded [`CachedBitmap`] or nothing. A failed load leaves the
/// cache empty so the background color shows through; there is never a half-built bitmap.
#[derive(Debug, Default)]
pub struct WallpaperCache {
    key: Option<WallpaperKey>,
    mode: PlacementMode,
    cached: Option<CachedBitmap>,
    decodes: u64,
}

impl WallpaperCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `(path, mode)` differs from what the cache was last built for.
    pub fn needs_recache(&self, path: Option<&Path>, mode: PlacementMode) -> bool {
        match (self.key.as_ref(), path) {
            (None, None) => self.mode != mode,
            (Some(k), Some(p)) => k.path != p || k.mode != mode,
            _ => true,
        }
    }

    /// Rebuild for `(path, mode)`. Returns whether a bitmap is now cached.
    ///
    /// `None` clears the wallpaper. Decode failures are logged and leave the cache empty.
    #[tracing::instrument(skip(self))]
    pub fn cache(&mut self, path: Option<&Path>, mode: PlacementMode, screen: Canvas) -> bool {
        self.cached = None;
        self.mode = mode;
        self.key = path.map(|p| WallpaperKey {
            path: p.to_path_buf(),
            mode,
        });

        let Some(path) = path else {
            return false;
        };
        self.decodes += 1;
        match load(path, mode, screen) {
            Ok(cached) => {
                tracing::debug!(
                    width = cached.bitmap.width,
                    height = cached.bitmap.height,
                    x = cached.origin.x,
                    y = cached.origin.y,
                    "wallpaper cached"
                );
                self.cached = Some(cached);
                true
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "wallpaper unavailable");
                false
            }
        }
    }

    /// Recache only if `(path, mode)` changed. Returns whether a decode happened.
    pub fn update(&mut self, path: Option<&Path>, mode: PlacementMode, screen: Canvas) -> bool {
        if !self.needs_recache(path, mode) {
            return false;
        }
        self.cache(path, mode, screen);
        true
    }

    pub fn cached(&self) -> Option<&CachedBitmap> {
        self.cached.as_ref()
    }

    pub fn mode(&self) -> PlacementMode {
        self.mode
    }

    /// Screen footprint of the cached bitmap, `None` when empty.
    pub fn footprint(&self) -> Option<Rect> {
        self.cached.as_ref().map(CachedBitmap::footprint)
    }

    /// Number of decode attempts since construction.
    pub fn decode_count(&self) -> u64 {
        self.decodes
    }

    /// Blit the whole bitmap at its stored origin; no-op when empty.
    pub fn draw_full(&self, surface: &mut dyn Surface) {
        let Some(c) = self.cached.as_ref().filter(|c| c.bitmap.is_valid()) else {
            return;
        };
        surface.blit(&c.bitmap, c.origin.x, c.origin.y, c.bitmap.bounds());
    }

    /// Blit the `(src_x, src_y, w, h)` sub-rectangle of the bitmap to `(dest_x, dest_y)`.
    ///
    /// The caller has already intersected the destination with [`Self::footprint`]; bounds
    /// are not re-validated here.
    pub fn draw_partial(
        &self,
        surface: &mut dyn Surface,
        dest_x: i32,
        dest_y: i32,
        src_x: i32,
        src_y: i32,
        w: i32,
        h: i32,
    ) {
        let Some(c) = self.cached.as_ref().filter(|c| c.bitmap.is_valid()) else {
            return;
        };
        surface.blit(&c.bitmap, dest_x, dest_y, Rect::new(src_x, src_y, w, h));
    }
}

fn load(path: &Path, mode: PlacementMode, screen: Canvas) -> DeskResult<CachedBitmap> {
    let bytes = std::fs::read(path).with_context(|| format!("read '{}'", path.display()))?;
    match mode {
        PlacementMode::Center => {
            let bitmap = decode::decode_bitmap(&bytes)?;
            let origin = centered_origin(bitmap.canvas(), screen);
            Ok(CachedBitmap { bitmap, origin })
        }
        PlacementMode::Stretch => Ok(CachedBitmap {
            bitmap: decode::decode_bitmap_scaled(&bytes, screen)?,
            origin: Point::ORIGIN,
        }),
    }
}

/// `((screen - bitmap) / 2)` per axis, clamped to be non-negative.
pub fn centered_origin(bitmap: Canvas, screen: Canvas) -> Point {
    fn axis(screen: u32, size: u32) -> i32 {
        let off = (i64::from(screen) - i64::from(size)) / 2;
        i32::try_from(off.max(0)).unwrap_or(i32::MAX)
    }
    Point::new(
        axis(screen.width, bitmap.width),
        axis(screen.height, bitmap.height),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/assets/wallpaper.rs"]
mod tests;
